//! Formatting utilities for CLI output.

use serde_json::Value;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a stored value for human-readable CLI output.
///
/// Every kind prints as compact JSON, so strings are quoted and escaped
/// and can be told apart from numbers and booleans.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use typedstore::cli::formatting::format_value;
///
/// assert_eq!(format_value(&json!("hello")), "\"hello\"");
/// assert_eq!(format_value(&json!(42)), "42");
/// assert_eq!(format_value(&json!("say \"hi\"")), r#""say \"hi\"""#);
/// assert_eq!(format_value(&json!([1, 2])), "[1,2]");
/// ```
pub fn format_value(value: &Value) -> String {
    value.to_string()
}

/// Guesses the JSON kind of a command-line value.
///
/// Tries boolean, null, integer and finite float in that order, and keeps
/// anything else as a string.
pub fn parse_value(text: &str) -> Value {
    if let Ok(b) = text.parse::<bool>() {
        return Value::Bool(b);
    }

    if text == "null" {
        return Value::Null;
    }

    if let Ok(i) = text.parse::<i64>() {
        return Value::from(i);
    }

    if let Ok(f) = text.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }

    Value::String(text.to_string())
}
