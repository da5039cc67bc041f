use std::{fmt::Display, str::FromStr};

use serde_json::{Map, Value};

use crate::{
    cli::{
        CliError, CommandResult, ValueKind,
        formatting::{format_value, parse_value},
    },
    config_store::TypedStore,
};

/// Reads `key` as `kind` and formats it as `key: value`.
///
/// Typed reads fall back to `default`, or to the kind's zero value when
/// no default is given. Raw reads of an absent key without a default
/// are an error.
pub(super) fn execute(
    store: &TypedStore,
    key: &str,
    kind: ValueKind,
    default: Option<&str>,
) -> CommandResult {
    let rendered = match kind {
        ValueKind::Raw => match (store.get(key), default) {
            (Some(value), _) => format_value(value),
            (None, Some(default)) => format_value(&parse_value(default)),
            (None, None) => return Err(CliError::KeyNotFound(key.to_string())),
        },
        ValueKind::String => {
            format_value(&Value::from(store.opt_string(key, default.unwrap_or_default())))
        }
        ValueKind::Bool => store.opt_bool(key, parse_default(default, false)?).to_string(),
        ValueKind::Int => store.opt_int(key, parse_default(default, 0)?).to_string(),
        ValueKind::Long => store.opt_long(key, parse_default(default, 0)?).to_string(),
        ValueKind::Float => store.opt_float(key, parse_default(default, 0.0)?).to_string(),
        ValueKind::Double => store.opt_double(key, parse_default(default, 0.0)?).to_string(),
        ValueKind::List => {
            let fallback = match parse_json_default(default)? {
                Some(Value::Array(items)) => items,
                Some(other) => return Err(wrong_default_kind("array", &other)),
                None => Vec::new(),
            };
            Value::from(store.opt_list(key, &fallback).to_vec()).to_string()
        }
        ValueKind::Map => {
            let fallback = match parse_json_default(default)? {
                Some(Value::Object(map)) => map,
                Some(other) => return Err(wrong_default_kind("object", &other)),
                None => Map::new(),
            };
            Value::from(store.opt_map(key, &fallback).clone()).to_string()
        }
    };

    Ok(format!("{}: {}", key, rendered))
}

fn parse_default<T>(default: Option<&str>, zero: T) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: Display,
{
    match default {
        Some(text) => text.parse().map_err(|e| {
            CliError::InvalidArguments(format!("Invalid default '{}': {}", text, e))
        }),
        None => Ok(zero),
    }
}

fn parse_json_default(default: Option<&str>) -> Result<Option<Value>, CliError> {
    default
        .map(|text| {
            serde_json::from_str(text).map_err(|e| {
                CliError::InvalidArguments(format!("Default '{}' is not valid JSON: {}", text, e))
            })
        })
        .transpose()
}

fn wrong_default_kind(expected: &str, got: &Value) -> CliError {
    CliError::InvalidArguments(format!(
        "Default must be a JSON {}, got {}",
        expected,
        format_value(got)
    ))
}
