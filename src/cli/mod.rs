//! Command-line interface for inspecting and editing a store file.
//!
//! Every invocation opens the store, loads it, runs one command, and
//! saves again if the command changed anything.

mod commands;
pub mod formatting;
mod types;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    config::StorePaths,
    config_store::{DecodePolicy, StoreOptions, TypedStore},
};

pub use commands::execute;
pub use types::{CliError, CommandResult};

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(name = "typedstore")]
#[command(about = "Inspect and edit a JSON key-value store file")]
pub struct Cli {
    /// Store file to operate on; defaults to the application's config directory
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Application name used to locate the default store file
    #[arg(long, default_value = "typedstore", global = true)]
    pub app: String,

    /// Treat malformed store content as empty instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Store commands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print the value under a key, optionally coerced to a type
    Get {
        /// Key to read
        key: String,

        /// Kind to read the value as
        #[arg(long = "as", value_enum, default_value_t = ValueKind::Raw)]
        kind: ValueKind,

        /// Value to print when the key is absent or does not coerce
        #[arg(long)]
        default: Option<String>,
    },
    /// Store a value under a key and save
    Set {
        /// Key to write
        key: String,

        /// New value; its type is guessed unless --json is given
        value: String,

        /// Parse the value as a JSON literal
        #[arg(long)]
        json: bool,
    },
    /// Remove a key and save
    Remove {
        /// Key to remove
        key: String,
    },
    /// List all keys
    Keys,
    /// Remove every key and save
    Clear,
    /// Print the whole store as JSON
    Dump,
}

/// Kinds a stored value can be read as.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The stored value unchanged
    Raw,
    /// Exact string
    String,
    /// Exact boolean
    Bool,
    /// 32-bit integer, numeric strings accepted
    Int,
    /// 64-bit integer, numeric strings accepted
    Long,
    /// 32-bit float, numeric strings accepted
    Float,
    /// 64-bit float, numeric strings accepted
    Double,
    /// Exact array
    List,
    /// Exact object
    Map,
}

/// Opens the store named by `cli`, loads it and runs its command.
///
/// # Errors
/// Returns `CliError` if the store location cannot be resolved, the store
/// cannot be opened, loaded or saved, or the command arguments are invalid.
pub fn run(cli: Cli) -> CommandResult {
    let path = match cli.file {
        Some(path) => path,
        None => StorePaths::store_file(&cli.app)?,
    };

    let decode_policy = if cli.lenient {
        DecodePolicy::Lenient
    } else {
        DecodePolicy::Strict
    };
    let options = StoreOptions::default()
        .with_create_parent_dirs(true)
        .with_decode_policy(decode_policy);

    let mut store = TypedStore::with_options(path, options)?;
    store.load()?;

    execute(&mut store, cli.command)
}
