use serde_json::{Map, Value};

use crate::{cli::CommandResult, config_store::TypedStore};

/// Lists keys one per line, sorted.
pub(super) fn keys(store: &TypedStore) -> CommandResult {
    let mut keys: Vec<&str> = store.keys().collect();
    keys.sort_unstable();

    Ok(keys.join("\n"))
}

/// Prints the whole store as pretty JSON.
pub(super) fn dump(store: &TypedStore) -> CommandResult {
    let map: Map<String, Value> = store
        .entries()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();

    Ok(format!("{:#}", Value::Object(map)))
}
