//! Unit tests for CLI module
//!
//! Tests argument parsing, formatting, and command execution against
//! stores in temporary directories.

#![allow(clippy::unwrap_used)]

use clap::Parser;
use serde_json::{Value, json};
use tempfile::TempDir;

use crate::cli::{
    Cli, CliError, Commands, ValueKind, execute,
    formatting::{format_value, parse_value},
    run,
};
use crate::config_store::TypedStore;

fn temp_store() -> (TempDir, TypedStore) {
    let dir = TempDir::new().unwrap();
    let store = TypedStore::create(dir.path().join("store.json")).unwrap();
    (dir, store)
}

fn get(key: &str, kind: ValueKind, default: Option<&str>) -> Commands {
    Commands::Get {
        key: key.to_string(),
        kind,
        default: default.map(str::to_string),
    }
}

#[test]
fn format_value_quotes_strings_only() {
    assert_eq!(format_value(&json!("hello world")), "\"hello world\"");
    assert_eq!(format_value(&json!("")), "\"\"");
    assert_eq!(format_value(&json!(42)), "42");
    assert_eq!(format_value(&json!(-2.5)), "-2.5");
    assert_eq!(format_value(&json!(false)), "false");
    assert_eq!(format_value(&Value::Null), "null");
}

#[test]
fn format_value_escapes_quotes_and_newlines() {
    assert_eq!(format_value(&json!("with \"quotes\"")), r#""with \"quotes\"""#);
    assert_eq!(format_value(&json!("two\nlines")), r#""two\nlines""#);
}

#[test]
fn get_string_output_is_escaped() {
    let (_dir, mut store) = temp_store();
    store.set_value("motd", "say \"hi\"\nbye");

    let output = execute(&mut store, get("motd", ValueKind::String, None)).unwrap();
    assert_eq!(output, r#"motd: "say \"hi\"\nbye""#);

    let output = execute(&mut store, get("motd", ValueKind::Raw, None)).unwrap();
    assert_eq!(output, r#"motd: "say \"hi\"\nbye""#);
}

#[test]
fn format_value_containers_as_compact_json() {
    assert_eq!(format_value(&json!(["a", 1])), r#"["a",1]"#);
    assert_eq!(format_value(&json!({"k": true})), r#"{"k":true}"#);
}

#[test]
fn parse_value_guesses_kind() {
    assert_eq!(parse_value("true"), json!(true));
    assert_eq!(parse_value("null"), Value::Null);
    assert_eq!(parse_value("42"), json!(42));
    assert_eq!(parse_value("-7"), json!(-7));
    assert_eq!(parse_value("2.5"), json!(2.5));
    assert_eq!(parse_value("hello"), json!("hello"));
}

#[test]
fn parse_value_keeps_non_finite_floats_as_strings() {
    assert_eq!(parse_value("inf"), json!("inf"));
    assert_eq!(parse_value("NaN"), json!("NaN"));
}

#[test]
fn cli_parses_get_with_kind_and_default() {
    let cli = Cli::try_parse_from([
        "typedstore",
        "--file",
        "/tmp/s.json",
        "get",
        "port",
        "--as",
        "int",
        "--default",
        "8080",
    ])
    .unwrap();

    assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("/tmp/s.json")));
    assert_eq!(cli.command, get("port", ValueKind::Int, Some("8080")));
}

#[test]
fn cli_rejects_unknown_kind() {
    let result = Cli::try_parse_from(["typedstore", "get", "k", "--as", "uuid"]);
    assert!(result.is_err());
}

#[test]
fn get_raw_missing_key_without_default_fails() {
    let (_dir, mut store) = temp_store();

    let result = execute(&mut store, get("missing", ValueKind::Raw, None));
    assert!(matches!(result, Err(CliError::KeyNotFound(key)) if key == "missing"));
}

#[test]
fn get_typed_applies_coercion_rules() {
    let (_dir, mut store) = temp_store();
    store.set_value("port", "8080");
    store.set_value("debug", true);

    let output = execute(&mut store, get("port", ValueKind::Int, None)).unwrap();
    assert_eq!(output, "port: 8080");

    let output = execute(&mut store, get("debug", ValueKind::String, Some("off"))).unwrap();
    assert_eq!(output, "debug: \"off\"");

    let output = execute(&mut store, get("missing", ValueKind::Bool, None)).unwrap();
    assert_eq!(output, "missing: false");
}

#[test]
fn get_with_unparseable_default_is_invalid() {
    let (_dir, mut store) = temp_store();

    let result = execute(&mut store, get("k", ValueKind::Int, Some("ten")));
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));

    let result = execute(&mut store, get("k", ValueKind::List, Some("{}")));
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[test]
fn get_list_and_map_fall_back_to_json_defaults() {
    let (_dir, mut store) = temp_store();
    store.set_value("tags", "not a list");

    let output = execute(&mut store, get("tags", ValueKind::List, Some("[1,2]"))).unwrap();
    assert_eq!(output, "tags: [1,2]");

    let output = execute(&mut store, get("opts", ValueKind::Map, None)).unwrap();
    assert_eq!(output, "opts: {}");
}

#[test]
fn set_persists_guessed_and_json_values() {
    let (_dir, mut store) = temp_store();

    execute(
        &mut store,
        Commands::Set {
            key: "retries".to_string(),
            value: "3".to_string(),
            json: false,
        },
    )
    .unwrap();
    execute(
        &mut store,
        Commands::Set {
            key: "hosts".to_string(),
            value: r#"["a","b"]"#.to_string(),
            json: true,
        },
    )
    .unwrap();

    let mut reloaded = TypedStore::create(store.path()).unwrap();
    reloaded.load().unwrap();
    assert_eq!(reloaded.opt_int("retries", 0), 3);
    assert_eq!(reloaded.get("hosts"), Some(&json!(["a", "b"])));
}

#[test]
fn set_with_invalid_json_changes_nothing() {
    let (_dir, mut store) = temp_store();

    let result = execute(
        &mut store,
        Commands::Set {
            key: "k".to_string(),
            value: "[1,".to_string(),
            json: true,
        },
    );

    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
    assert!(store.is_empty());
}

#[test]
fn remove_and_clear_save_changes() {
    let (_dir, mut store) = temp_store();
    store.set_value("a", 1);
    store.set_value("b", 2);
    store.set_value("c", 3);

    let output = execute(&mut store, Commands::Remove { key: "a".to_string() }).unwrap();
    assert_eq!(output, "Removed 'a' (was 1)");

    let result = execute(&mut store, Commands::Remove { key: "a".to_string() });
    assert!(matches!(result, Err(CliError::KeyNotFound(_))));

    let output = execute(&mut store, Commands::Clear).unwrap();
    assert_eq!(output, "Removed 2 keys");

    let mut reloaded = TypedStore::create(store.path()).unwrap();
    reloaded.load().unwrap();
    assert_eq!(reloaded.size(), 0);
}

#[test]
fn keys_are_sorted_and_dump_is_pretty_json() {
    let (_dir, mut store) = temp_store();
    store.set_value("zeta", 1);
    store.set_value("alpha", "x");

    let output = execute(&mut store, Commands::Keys).unwrap();
    assert_eq!(output, "alpha\nzeta");

    let output = execute(&mut store, Commands::Dump).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, json!({"alpha": "x", "zeta": 1}));
    assert!(output.contains('\n'));
}

#[test]
fn run_opens_loads_and_saves_store_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("store.json");

    let cli = Cli::try_parse_from([
        "typedstore",
        "--file",
        path.to_str().unwrap(),
        "set",
        "name",
        "demo",
    ])
    .unwrap();
    run(cli).unwrap();

    let cli =
        Cli::try_parse_from(["typedstore", "--file", path.to_str().unwrap(), "get", "name"])
            .unwrap();
    assert_eq!(run(cli).unwrap(), "name: \"demo\"");
}

#[test]
fn run_reports_malformed_store_unless_lenient() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{ not json").unwrap();

    let cli =
        Cli::try_parse_from(["typedstore", "--file", path.to_str().unwrap(), "keys"]).unwrap();
    assert!(matches!(run(cli), Err(CliError::Store(_))));

    let cli = Cli::try_parse_from([
        "typedstore",
        "--file",
        path.to_str().unwrap(),
        "--lenient",
        "keys",
    ])
    .unwrap();
    assert_eq!(run(cli).unwrap(), "");
}
