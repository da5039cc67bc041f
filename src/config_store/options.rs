use serde::{Deserialize, Serialize};

/// How [`TypedStore::load`](super::TypedStore::load) treats a backing file
/// whose content is not a single JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Report a decode error and keep the in-memory values untouched
    #[default]
    Strict,
    /// Discard the unreadable content and continue with an empty store
    Lenient,
}

/// Behavior knobs fixed when a store is constructed.
///
/// Deserializable so a host application can embed it in its own
/// configuration; every field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Handling of malformed file content on load.
    pub decode_policy: DecodePolicy,

    /// Pretty-print the JSON written by save.
    pub pretty: bool,

    /// Write to a temporary sibling file and rename it over the target.
    pub atomic_save: bool,

    /// Create missing parent directories of the backing file.
    pub create_parent_dirs: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            decode_policy: DecodePolicy::Strict,
            pretty: true,
            atomic_save: true,
            create_parent_dirs: false,
        }
    }
}

impl StoreOptions {
    /// Sets the decode policy.
    pub fn with_decode_policy(mut self, decode_policy: DecodePolicy) -> Self {
        self.decode_policy = decode_policy;
        self
    }

    /// Enables or disables pretty-printed output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Enables or disables rename-based atomic saves.
    pub fn with_atomic_save(mut self, atomic_save: bool) -> Self {
        self.atomic_save = atomic_save;
        self
    }

    /// Enables or disables creation of missing parent directories.
    pub fn with_create_parent_dirs(mut self, create_parent_dirs: bool) -> Self {
        self.create_parent_dirs = create_parent_dirs;
        self
    }
}

/// What a successful load found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file held a JSON object with this many top-level entries
    Loaded {
        /// Number of top-level keys read
        entries: usize,
    },
    /// The file did not exist, or vanished before it could be read
    Absent,
    /// The file existed but had zero length
    Empty,
    /// The file content was not a JSON object and was dropped under
    /// [`DecodePolicy::Lenient`]
    Discarded,
}

impl LoadOutcome {
    /// Returns true when the store was reset to empty rather than filled
    /// from the file.
    pub fn is_reset(&self) -> bool {
        !matches!(self, LoadOutcome::Loaded { .. })
    }
}
