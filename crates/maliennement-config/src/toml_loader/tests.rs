//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_maliennement_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, maliennement_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[splash]
background = "#112233"

[window]
width = 800
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.splash.background, "#112233");
    assert_eq!(config.window.width, 800);
    // Defaults preserved
    assert_eq!(config.splash.title, "Maliennement");
    assert_eq!(config.window.height, 915);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, maliennement_common::ConfigError::ParseError(_)));
}

#[test]
fn load_out_of_range_values_are_kept_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[surface]\npull_threshold = 5\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.surface.pull_threshold, 5);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("maliennement").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.splash.title, "Maliennement");
    assert_eq!(config.splash.fade_ms, 300);
    assert!(config.session.restore);
}

#[test]
fn default_template_is_valid_toml() {
    let parsed: Result<crate::ShellConfig, _> = toml::from_str(super::template::default_config_toml());
    assert!(parsed.is_ok());
}

#[test]
fn default_config_path_ends_with_config_toml() {
    let path = default_config_path().unwrap();
    assert_eq!(path.file_name().unwrap(), "config.toml");
    assert!(path.parent().unwrap().ends_with("maliennement"));
}
