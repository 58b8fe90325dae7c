//! Integration tests for Settings layered loading.
//!
//! These tests pass explicit layer paths (temp directories only), so a global
//! config on the machine running them is never read.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use exprtree::application::ApplicationError;
use exprtree::cli::commands::init_config;
use exprtree::cli::CliError;
use exprtree::config::Settings;
use exprtree::exitcode;

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config file");
    path
}

#[test]
fn given_no_config_files_when_loading_then_returns_defaults() {
    let settings = Settings::load_layers(None, None).unwrap();

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.scenario, "nested");
    assert!(!settings.show_tree);
    assert_eq!(settings.precision, None);
}

#[test]
fn given_missing_global_file_when_loading_then_skips_it() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("exprtree.toml");

    let settings = Settings::load_layers(Some(&missing), None).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_and_explicit_files_when_loading_then_explicit_wins() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let global = write_config(
        &dir,
        "global.toml",
        "scenario = \"flat\"\nshow_tree = true\n",
    );
    let local = write_config(&dir, "local.toml", "scenario = \"quotient\"\nprecision = 3\n");

    // Act
    let settings = Settings::load_layers(Some(&global), Some(&local)).unwrap();

    // Assert
    assert_eq!(settings.scenario, "quotient");
    assert!(settings.show_tree, "unspecified values are inherited from global");
    assert_eq!(settings.precision, Some(3));
}

#[test]
fn given_missing_explicit_file_when_loading_then_fails_with_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Settings::load_layers(None, Some(&missing)).unwrap_err();

    assert!(err.to_string().contains("config file not found"));
    assert_eq!(CliError::from(err).exit_code(), exitcode::CONFIG);
}

#[test]
fn given_malformed_toml_when_loading_then_fails_with_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "bad.toml", "scenario = \n");

    let err = Settings::load_layers(None, Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { ref message } if message.starts_with("parse")));
}

#[test]
fn given_unknown_key_when_loading_then_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "typo.toml", "show_tre = true\n");

    assert!(Settings::load_layers(None, Some(&path)).is_err());
}

#[test]
fn given_excessive_precision_when_loading_then_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "precise.toml", "precision = 500\n");

    let err = Settings::load_layers(None, Some(&path)).unwrap_err();

    assert!(err.to_string().contains("precision must be at most"));
}

#[test]
fn given_settings_when_serializing_then_loads_back_identically() {
    let dir = TempDir::new().unwrap();
    let original = Settings {
        scenario: "difference".into(),
        show_tree: true,
        precision: Some(1),
    };
    let path = write_config(&dir, "round.toml", &original.to_toml().unwrap());

    let loaded = Settings::load_layers(None, Some(&path)).unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn given_fresh_location_when_initializing_config_then_writes_template_once() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("exprtree.toml");

    // Act
    init_config(&path).unwrap();
    let second = init_config(&path);

    // Assert
    assert_eq!(fs::read_to_string(&path).unwrap(), Settings::template());
    assert!(matches!(second, Err(CliError::Usage(_))));
    assert_eq!(
        Settings::load_layers(None, Some(&path)).unwrap(),
        Settings::default()
    );
}
