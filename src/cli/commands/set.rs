use serde_json::Value;

use crate::{
    cli::{CliError, CommandResult, formatting::parse_value},
    config_store::TypedStore,
};

/// Stores `raw` under `key` and saves.
///
/// With `json` the text must be a JSON literal; otherwise its kind is
/// guessed by [`parse_value`].
pub(super) fn execute(store: &mut TypedStore, key: String, raw: &str, json: bool) -> CommandResult {
    let value: Value = if json {
        serde_json::from_str(raw).map_err(|e| {
            CliError::InvalidArguments(format!("'{}' is not valid JSON: {}", raw, e))
        })?
    } else {
        parse_value(raw)
    };

    let message = format!("Set new value '{}' at key '{}'", raw, key);

    store.set_value(key, value);
    store.save()?;

    Ok(message)
}
