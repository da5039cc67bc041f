//! JSON file-backed key-value store with typed accessors.
//!
//! Holds one JSON object in memory, persists it to a single file, and
//! offers defaulting reads that coerce stored values to native types.

mod accessors;
mod coercion;
mod identity;
mod options;
mod store;


pub use options::{DecodePolicy, LoadOutcome, StoreOptions};
pub use serde_json::{Map, Value};
pub use store::TypedStore;
