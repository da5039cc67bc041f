use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::core::{Result, StoreError};

use super::{TypedStore, coercion};

impl TypedStore {
    /// Returns the raw value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns true when `key` is present, even if its value is `null`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the raw value under `key`, or `default` when the key is absent.
    ///
    /// A stored `null` counts as present and is returned as is.
    pub fn opt_object<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Returns the value under `key` if it is a JSON string, else `default`.
    ///
    /// Numbers and booleans are not stringified.
    pub fn opt_string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get(key) {
            Some(Value::String(s)) => s,
            _ => default,
        }
    }

    /// Returns the value under `key` if it is a JSON boolean, else `default`.
    pub fn opt_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Parses the value under `key` as an `i32`.
    ///
    /// Numbers and numeric strings both parse, so `"42"` yields 42. Values
    /// whose text is not an integer literal in range yield `default`.
    pub fn opt_int(&self, key: &str, default: i32) -> i32 {
        self.get(key)
            .and_then(coercion::parse_integer::<i32>)
            .unwrap_or(default)
    }

    /// Parses the value under `key` as an `i64`, with the same rules as
    /// [`TypedStore::opt_int`].
    pub fn opt_long(&self, key: &str, default: i64) -> i64 {
        self.get(key)
            .and_then(coercion::parse_integer::<i64>)
            .unwrap_or(default)
    }

    /// Parses the value under `key` as an `f32`.
    pub fn opt_float(&self, key: &str, default: f32) -> f32 {
        self.get(key)
            .and_then(coercion::parse_float::<f32>)
            .unwrap_or(default)
    }

    /// Parses the value under `key` as an `f64`.
    pub fn opt_double(&self, key: &str, default: f64) -> f64 {
        self.get(key)
            .and_then(coercion::parse_float::<f64>)
            .unwrap_or(default)
    }

    /// Returns the value under `key` if it is a JSON array, else `default`.
    pub fn opt_list<'a>(&'a self, key: &str, default: &'a [Value]) -> &'a [Value] {
        match self.get(key) {
            Some(Value::Array(items)) => items,
            _ => default,
        }
    }

    /// Returns the value under `key` if it is a JSON object, else `default`.
    pub fn opt_map<'a>(
        &'a self,
        key: &str,
        default: &'a Map<String, Value>,
    ) -> &'a Map<String, Value> {
        match self.get(key) {
            Some(Value::Object(map)) => map,
            _ => default,
        }
    }

    /// Deserializes the value under `key` into `T`.
    ///
    /// Returns `None` when the key is absent or the value has the wrong shape.
    pub fn opt_deserialize<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|value| T::deserialize(value).ok())
    }

    /// Inserts or overwrites the value under `key`, returning the previous one.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Serializes `value` to JSON and stores it under `key`.
    ///
    /// # Errors
    /// * `StoreError::Encode` - If `value` has no JSON representation, e.g. a map
    ///   with non-string keys
    pub fn set_serialized<T>(&mut self, key: impl Into<String>, value: &T) -> Result<Option<Value>>
    where
        T: Serialize + ?Sized,
    {
        let key = key.into();
        let value = serde_json::to_value(value).map_err(|e| StoreError::encode(e, &key))?;

        Ok(self.values.insert(key, value))
    }

    /// Removes `key`, returning its value, or `None` if it was absent.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Removes every key. The file is untouched until the next save.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterates over the top-level keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates over the top-level key/value pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }
}
