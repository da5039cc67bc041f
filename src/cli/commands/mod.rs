//! Store command implementations.
mod get;
mod list;
mod remove;
mod set;

use crate::config_store::TypedStore;

use super::{CommandResult, Commands};

/// Runs `command` against an already loaded store.
///
/// Commands that change the store save it before returning.
///
/// # Errors
/// Returns `CliError` if arguments are invalid, a key is missing, or saving fails.
pub fn execute(store: &mut TypedStore, command: Commands) -> CommandResult {
    match command {
        Commands::Get { key, kind, default } => get::execute(store, &key, kind, default.as_deref()),
        Commands::Set { key, value, json } => set::execute(store, key, &value, json),
        Commands::Remove { key } => remove::remove(store, &key),
        Commands::Clear => remove::clear(store),
        Commands::Keys => list::keys(store),
        Commands::Dump => list::dump(store),
    }
}
