//! Tests for loading `hexchess.toml`.

use hexchess::Variant;
use hexchess_cli::CliConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = CliConfig::load_or_default(temp_dir.path().join("hexchess.toml"))
        .expect("Missing config should not be an error");

    assert_eq!(config, CliConfig::default());
    assert_eq!(config.log_filter(), "warn");
    assert_eq!(*config.default_variant(), Variant::Glinski);
    assert!(*config.show_labels());
    assert!(!*config.json());
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("hexchess.toml");
    fs::write(&path, "log_filter = \"hexchess=debug\"\njson = true\n")
        .expect("Failed to write config");

    let config = CliConfig::from_file(&path).expect("Failed to load config");
    assert_eq!(config.log_filter(), "hexchess=debug");
    assert!(*config.json());
    assert!(*config.show_labels());
    assert_eq!(*config.default_variant(), Variant::Glinski);
}

#[test]
fn test_variant_uses_save_file_name() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("hexchess.toml");
    fs::write(&path, "default_variant = \"testRook\"\nshow_labels = false\n")
        .expect("Failed to write config");

    let config = CliConfig::from_file(&path).expect("Failed to load config");
    assert_eq!(*config.default_variant(), Variant::TestRook);
    assert!(!*config.show_labels());
}

#[test]
fn test_malformed_file_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("hexchess.toml");
    fs::write(&path, "show_labels = \"maybe\"").expect("Failed to write config");

    let err = CliConfig::load_or_default(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
