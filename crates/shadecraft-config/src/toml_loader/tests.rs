//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{OutputFormat, PaletteMode, ShadecraftConfig};
use shadecraft_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_shadecraft_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[palette]
seed = "#ff0000"
mode = "two"

[output]
format = "json"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.palette.seed, "#ff0000");
    assert_eq!(config.palette.mode, PaletteMode::Two);
    assert_eq!(config.output.format, OutputFormat::Json);
    // Defaults preserved
    assert_eq!(config.palette.count, 9);
    assert_eq!(config.palette.second_seed, "#8b5cf6");
    assert!(config.output.wrap_root);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn unknown_enum_value_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

    assert!(matches!(load_from_path(&path), Err(ConfigError::ParseError(_))));
}

#[test]
fn invalid_values_fall_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[palette]
count = 100
seed = "#00ff00"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, ShadecraftConfig::default());
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shadecraft").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, ShadecraftConfig::default());
}

#[test]
fn template_documents_every_section() {
    let template = default_config_toml();
    for section in ["[palette]", "[output]", "[logging]"] {
        assert!(template.contains(section), "{section}");
    }
    let parsed: ShadecraftConfig = toml::from_str(template).unwrap();
    assert_eq!(parsed, ShadecraftConfig::default());
}

#[test]
fn default_path_ends_with_app_dir() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("shadecraft/config.toml"));
    }
}
