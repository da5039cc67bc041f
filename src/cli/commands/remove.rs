use crate::{
    cli::{CliError, CommandResult, formatting::format_value},
    config_store::TypedStore,
};

/// Removes `key` and saves. An absent key is reported and nothing is written.
pub(super) fn remove(store: &mut TypedStore, key: &str) -> CommandResult {
    let old = store
        .remove(key)
        .ok_or_else(|| CliError::KeyNotFound(key.to_string()))?;

    store.save()?;

    Ok(format!("Removed '{}' (was {})", key, format_value(&old)))
}

/// Removes every key and saves.
pub(super) fn clear(store: &mut TypedStore) -> CommandResult {
    let removed = store.size();

    store.clear();
    store.save()?;

    Ok(format!("Removed {} keys", removed))
}
