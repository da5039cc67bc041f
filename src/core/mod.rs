use std::{
    fmt,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Error types for store operations.
///
/// Only construction, loading and saving can fail. Typed reads never
/// produce an error; a missing key or a shape mismatch yields the
/// caller's default instead.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file could not be created
    #[error("failed to create store file '{path}': {details}")]
    Creation {
        /// Path of the backing file
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// The backing file exists but could not be read
    #[error("failed to read store file '{path}': {details}")]
    Read {
        /// Path of the backing file
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// The backing file does not hold a single JSON object
    #[error("failed to decode JSON in '{path}': {details}")]
    Decode {
        /// Path of the backing file
        path: PathBuf,
        /// Parser error details
        details: String,
    },

    /// The backing file could not be created, written or committed on save
    #[error("failed to write store file '{path}': {details}")]
    Write {
        /// Path of the backing file
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// A value could not be represented as JSON
    #[error("failed to encode value for '{key}': {details}")]
    Encode {
        /// Key the value was destined for, or `*` for the whole store
        key: String,
        /// Serializer error details
        details: String,
    },
}

/// A specialized `Result` type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Creates a creation error for `path`.
    pub fn creation(error: impl fmt::Display, path: &Path) -> Self {
        StoreError::Creation {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a read error for `path`.
    pub fn read(error: impl fmt::Display, path: &Path) -> Self {
        StoreError::Read {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a decode error for `path`.
    pub fn decode(error: impl fmt::Display, path: &Path) -> Self {
        StoreError::Decode {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a write error for `path`.
    pub fn write(error: impl fmt::Display, path: &Path) -> Self {
        StoreError::Write {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates an encode error for the value stored under `key`.
    pub fn encode(error: impl fmt::Display, key: &str) -> Self {
        StoreError::Encode {
            key: key.to_string(),
            details: error.to_string(),
        }
    }
}
