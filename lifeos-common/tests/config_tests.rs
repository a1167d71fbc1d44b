//! Integration tests for configuration loading and path resolution
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate LIFEOS_* variables are marked with #[serial].

use lifeos_common::config::{
    load_config, resolve_path, ConfigSource, TomlConfig, CONFIG_ENV_VAR, CSV_PATH_ENV_VAR,
    DEFAULT_CSV_PATH,
};
use lifeos_common::Error;
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
#[serial]
fn test_resolve_path_with_no_overrides_uses_default() {
    env::remove_var(CSV_PATH_ENV_VAR);

    let path = resolve_path(None, CSV_PATH_ENV_VAR, None, DEFAULT_CSV_PATH);

    assert_eq!(path, PathBuf::from("backup.csv"));
}

#[test]
#[serial]
fn test_resolve_path_cli_takes_precedence() {
    env::set_var(CSV_PATH_ENV_VAR, "/tmp/from-env.csv");

    let path = resolve_path(
        Some(Path::new("/tmp/from-cli.csv")),
        CSV_PATH_ENV_VAR,
        Some(Path::new("/tmp/from-toml.csv")),
        DEFAULT_CSV_PATH,
    );

    assert_eq!(path, PathBuf::from("/tmp/from-cli.csv"));

    // Cleanup
    env::remove_var(CSV_PATH_ENV_VAR);
}

#[test]
#[serial]
fn test_resolve_path_env_beats_toml() {
    env::set_var(CSV_PATH_ENV_VAR, "/tmp/from-env.csv");

    let path = resolve_path(
        None,
        CSV_PATH_ENV_VAR,
        Some(Path::new("/tmp/from-toml.csv")),
        DEFAULT_CSV_PATH,
    );

    assert_eq!(path, PathBuf::from("/tmp/from-env.csv"));

    // Cleanup
    env::remove_var(CSV_PATH_ENV_VAR);
}

#[test]
#[serial]
fn test_resolve_path_blank_env_is_ignored() {
    env::set_var(CSV_PATH_ENV_VAR, "   ");

    let path = resolve_path(
        None,
        CSV_PATH_ENV_VAR,
        Some(Path::new("/tmp/from-toml.csv")),
        DEFAULT_CSV_PATH,
    );

    assert_eq!(path, PathBuf::from("/tmp/from-toml.csv"));

    // Cleanup
    env::remove_var(CSV_PATH_ENV_VAR);
}

#[test]
#[serial]
fn test_load_config_explicit_file() {
    env::remove_var(CONFIG_ENV_VAR);
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("convert.toml");
    std::fs::write(&config_path, "output = \"out.json\"\n[logging]\nlevel = \"info\"\n").unwrap();

    let loaded = load_config(Some(&config_path), "lifeos-convert-test").unwrap();

    assert_eq!(loaded.config.output, Some(PathBuf::from("out.json")));
    assert!(loaded.config.input.is_none());
    assert_eq!(loaded.config.logging.level, "info");
    assert_eq!(loaded.source, ConfigSource::Explicit(config_path));
}

#[test]
#[serial]
fn test_load_config_explicit_missing_file_is_error() {
    env::remove_var(CONFIG_ENV_VAR);
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("absent.toml");

    let result = load_config(Some(&config_path), "lifeos-convert-test");

    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
#[serial]
fn test_load_config_from_env_var() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("env.toml");
    std::fs::write(&config_path, "input = \"env-export.csv\"\n").unwrap();
    env::set_var(CONFIG_ENV_VAR, &config_path);

    let loaded = load_config(None, "lifeos-convert-test").unwrap();

    assert_eq!(loaded.config.input, Some(PathBuf::from("env-export.csv")));
    assert_eq!(loaded.source, ConfigSource::Environment(config_path.clone()));

    // Cleanup
    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_load_config_unparsable_file_is_config_error() {
    env::remove_var(CONFIG_ENV_VAR);
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "[logging\nlevel = ").unwrap();

    let result = load_config(Some(&config_path), "lifeos-convert-test");

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_load_config_without_any_file_uses_defaults() {
    env::remove_var(CONFIG_ENV_VAR);

    // No config file is installed under this module name
    let loaded = load_config(None, "lifeos-convert-test-nonexistent-module").unwrap();

    assert!(loaded.config.input.is_none());
    assert!(loaded.config.output.is_none());
    assert_eq!(loaded.config.logging.level, TomlConfig::default().logging.level);
    assert_eq!(loaded.source, ConfigSource::CompiledDefaults);
}
