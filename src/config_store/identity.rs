use std::{
    hash::{Hash, Hasher},
    mem,
};

use serde_json::{Map, Number, Value};

use super::TypedStore;

/// Two stores are equal when they are bound to the same path and hold
/// deep-equal values. Options do not take part.
impl PartialEq for TypedStore {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.values == other.values
    }
}

impl Eq for TypedStore {}

/// Hashed on demand from the current values; nothing is cached since the
/// mapping is mutable.
impl Hash for TypedStore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
        hash_object(&self.values, state);
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    mem::discriminant(value).hash(state);

    match value {
        Value::Null => {}
        Value::Bool(b) => b.hash(state),
        Value::Number(n) => hash_number(n, state),
        Value::String(s) => s.hash(state),
        Value::Array(items) => {
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => hash_object(map, state),
    }
}

// Key order must not matter: equal maps can iterate differently when
// serde_json is built with `preserve_order`.
fn hash_object<H: Hasher>(map: &Map<String, Value>, state: &mut H) {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    entries.len().hash(state);
    for (key, value) in entries {
        key.hash(state);
        hash_value(value, state);
    }
}

fn hash_number<H: Hasher>(n: &Number, state: &mut H) {
    if let Some(u) = n.as_u64() {
        0u8.hash(state);
        u.hash(state);
    } else if let Some(i) = n.as_i64() {
        1u8.hash(state);
        i.hash(state);
    } else if let Some(f) = n.as_f64() {
        2u8.hash(state);
        // 0.0 and -0.0 compare equal
        let f = if f == 0.0 { 0.0 } else { f };
        f.to_bits().hash(state);
    }
}
