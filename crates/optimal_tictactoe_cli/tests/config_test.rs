//! Tests for loading the front-end configuration.

use std::fs;
use std::time::Duration;
use tempfile::TempDir;

use optimal_tictactoe_cli::{AppConfig, GameMode};

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("tictactoe.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.mode(), &GameMode::Single);
    assert_eq!(config.computer_delay(), Duration::from_millis(500));
}

#[test]
fn test_from_file_reads_all_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "mode = \"multi\"\ncomputer_delay_ms = 0\n");

    let config = AppConfig::from_file(&path).expect("Valid config");
    assert_eq!(config.mode(), &GameMode::Multi);
    assert_eq!(config.computer_delay_ms(), &0);
}

#[test]
fn test_from_file_fills_missing_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "computer_delay_ms = 250\n");

    let config = AppConfig::from_file(&path).expect("Valid config");
    assert_eq!(config.mode(), &GameMode::Single);
    assert_eq!(config.computer_delay(), Duration::from_millis(250));
}

#[test]
fn test_from_file_rejects_invalid_toml() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "mode = \"tournament\"\n");

    let err = AppConfig::from_file(&path).expect_err("Unknown mode is rejected");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = AppConfig::from_file(dir.path().join("absent.toml")).expect_err("Missing file");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_overrides_win_over_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "mode = \"multi\"\ncomputer_delay_ms = 900\n");

    let config = AppConfig::from_file(&path)
        .expect("Valid config")
        .with_overrides(Some(GameMode::Single), Some(10));
    assert_eq!(config.mode(), &GameMode::Single);
    assert_eq!(config.computer_delay(), Duration::from_millis(10));

    let untouched = AppConfig::from_file(&path)
        .expect("Valid config")
        .with_overrides(None, None);
    assert_eq!(untouched.mode(), &GameMode::Multi);
}
