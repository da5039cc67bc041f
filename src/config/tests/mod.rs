//! Unit tests for config module
//!
//! Path resolution only; environment lookups are passed in explicitly.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use crate::config::StorePaths;

#[test]
fn config_dir_prefers_xdg_config_home() {
    let dir = StorePaths::config_dir_from(Some("/xdg"), Some("/home/me"), "app").unwrap();
    assert_eq!(dir, PathBuf::from("/xdg/app"));
}

#[test]
fn config_dir_falls_back_to_home() {
    let dir = StorePaths::config_dir_from(None, Some("/home/me"), "app").unwrap();
    assert_eq!(dir, PathBuf::from("/home/me/.config/app"));
}

#[test]
fn config_dir_ignores_empty_xdg_config_home() {
    let dir = StorePaths::config_dir_from(Some(""), Some("/home/me"), "app").unwrap();
    assert_eq!(dir, PathBuf::from("/home/me/.config/app"));
}

#[test]
fn config_dir_without_any_base_fails() {
    let err = StorePaths::config_dir_from(None, None, "app").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
