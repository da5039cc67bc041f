use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, instrument, warn};

use crate::core::{Result, StoreError};

use super::{DecodePolicy, LoadOutcome, StoreOptions};

/// A key-value store held in memory and persisted as one JSON object.
///
/// Construction binds the store to a file but does not read it. The
/// in-memory mapping only crosses the file boundary through [`load`] and
/// [`save`], and each of those moves the whole mapping at once.
///
/// No locking is done internally. Share a store across threads by
/// wrapping it, e.g. in a `Mutex`.
///
/// [`load`]: TypedStore::load
/// [`save`]: TypedStore::save
#[derive(Debug, Clone)]
pub struct TypedStore {
    pub(super) path: PathBuf,
    pub(super) values: Map<String, Value>,
    options: StoreOptions,
}

impl TypedStore {
    /// Binds a new, empty store to `path` with default options.
    ///
    /// The file is created empty when missing; existing content is left
    /// alone and only read by [`TypedStore::load`].
    ///
    /// # Errors
    /// * `StoreError::Creation` - If the file does not exist and cannot be created
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_options(path, StoreOptions::default())
    }

    /// Binds a new, empty store to `path` with the given options.
    ///
    /// # Errors
    /// * `StoreError::Creation` - If the file does not exist and cannot be created
    pub fn with_options(path: impl Into<PathBuf>, options: StoreOptions) -> Result<Self> {
        let path = path.into();

        ensure_file(&path, &options).map_err(|e| StoreError::creation(e, &path))?;

        Ok(Self {
            path,
            values: Map::new(),
            options,
        })
    }

    /// Replaces the in-memory values with the content of the backing file.
    ///
    /// A missing or zero-length file resets the store to empty without
    /// error, including when the file disappears between the existence
    /// check and the read. Content that is not a JSON object is handled
    /// according to [`StoreOptions::decode_policy`].
    ///
    /// # Errors
    /// * `StoreError::Read` - If the file exists but cannot be read
    /// * `StoreError::Decode` - If the content is malformed under [`DecodePolicy::Strict`];
    ///   the in-memory values are left unchanged
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&mut self) -> Result<LoadOutcome> {
        if !self.path.exists() {
            debug!("store file absent, resetting to empty");
            self.values = Map::new();
            return Ok(LoadOutcome::Absent);
        }

        let bytes = match read_if_present(&self.path) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("store file vanished before read, resetting to empty");
                self.values = Map::new();
                return Ok(LoadOutcome::Absent);
            }
            Err(e) => return Err(StoreError::read(e, &self.path)),
        };

        if bytes.is_empty() {
            debug!("store file empty, resetting to empty");
            self.values = Map::new();
            return Ok(LoadOutcome::Empty);
        }

        match serde_json::from_slice::<Map<String, Value>>(&bytes) {
            Ok(values) => {
                let entries = values.len();
                self.values = values;
                debug!(entries, "loaded store");
                Ok(LoadOutcome::Loaded { entries })
            }
            Err(e) => match self.options.decode_policy {
                DecodePolicy::Strict => Err(StoreError::decode(e, &self.path)),
                DecodePolicy::Lenient => {
                    warn!(error = %e, "discarding malformed store file");
                    self.values = Map::new();
                    Ok(LoadOutcome::Discarded)
                }
            },
        }
    }

    /// Writes every in-memory value to the backing file, replacing its
    /// previous content.
    ///
    /// # Errors
    /// * `StoreError::Encode` - If the values cannot be serialized
    /// * `StoreError::Write` - If the file cannot be created, written or committed
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self) -> Result<()> {
        ensure_file(&self.path, &self.options).map_err(|e| StoreError::write(e, &self.path))?;

        let bytes = self.encode()?;

        let written = if self.options.atomic_save {
            write_atomic(&self.path, &bytes)
        } else {
            fs::write(&self.path, &bytes)
        };
        written.map_err(|e| StoreError::write(e, &self.path))?;

        debug!(entries = self.values.len(), "saved store");
        Ok(())
    }

    /// Returns the number of top-level keys.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns true when the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the options the store was built with.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    fn encode(&self) -> Result<Vec<u8>> {
        let encoded = if self.options.pretty {
            serde_json::to_vec_pretty(&self.values)
        } else {
            serde_json::to_vec(&self.values)
        };

        encoded.map_err(|e| StoreError::encode(e, "*"))
    }
}

fn ensure_file(path: &Path, options: &StoreOptions) -> io::Result<()> {
    if path.exists() {
        return Ok(());
    }

    if options.create_parent_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;

    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    // Rename onto the link target so a symlinked store file stays a link.
    let target = if path.exists() {
        fs::canonicalize(path)?
    } else {
        path.to_path_buf()
    };

    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    if let Ok(metadata) = fs::metadata(&target) {
        staged.as_file().set_permissions(metadata.permissions())?;
    }
    staged.as_file().sync_all()?;
    staged.persist(&target).map_err(|e| e.error)?;

    Ok(())
}

/// Reads the whole file, mapping a missing file to `None`.
///
/// The store checks for existence first, so `None` here means the file
/// was removed between that check and the read.
fn read_if_present(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
