use thiserror::Error;

use crate::core::StoreError;

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid arguments were provided to a command.
    ///
    /// Returned when a value or default cannot be parsed into the kind
    /// the command asked for.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The requested key is not in the store.
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// The store could not be opened, loaded or saved.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// An I/O operation failed, e.g. resolving the default store location.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// Commands return the text to print on success.
pub type CommandResult = Result<String, CliError>;
