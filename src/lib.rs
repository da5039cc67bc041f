//! Typedstore - JSON file-backed key-value store with typed accessors.
//!
//! A store keeps one JSON object in memory and persists it to a single
//! file. Reads never fail: every typed accessor takes a default that is
//! returned when the key is absent or its value has the wrong shape.
//!
//! - Explicit load/save lifecycle, whole-file in both directions
//! - Strict string/boolean/list/map reads, lenient numeric reads
//! - Configurable handling of malformed files and atomic saves
//! - Command-line front end for inspecting store files
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use typedstore::config_store::TypedStore;
//!
//! let mut store = TypedStore::create("settings.json")?;
//! store.load()?;
//!
//! store.set_value("volume", "11");
//! assert_eq!(store.opt_int("volume", 5), 11);
//! assert_eq!(store.opt_string("theme", "dark"), "dark");
//!
//! store.save()?;
//! # Ok::<(), typedstore::StoreError>(())
//! ```

/// Default store file locations.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// JSON file-backed store with typed accessors.
pub mod config_store;

/// Command-line interface for store files.
pub mod cli;

/// Tracing subscriber setup for binaries.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{Result, StoreError};
