use std::{borrow::Cow, str::FromStr};

use serde_json::Value;

/// Renders a stored value as the text the numeric accessors parse.
///
/// Strings yield their contents without quotes, so `"42"` and `42` both
/// render as `42`. Containers render as compact JSON, which never parses
/// as a number.
pub(super) fn canonical_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Null => Cow::Borrowed("null"),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// Parses the canonical text of `value` as an integer type.
///
/// The text must be an exact integer literal: no surrounding whitespace,
/// no fractional part, and within the range of `T`.
pub(super) fn parse_integer<T: FromStr>(value: &Value) -> Option<T> {
    canonical_text(value).parse().ok()
}

/// Parses the canonical text of `value` as a floating point type,
/// ignoring surrounding whitespace.
pub(super) fn parse_float<T: FromStr>(value: &Value) -> Option<T> {
    canonical_text(value).trim().parse().ok()
}
