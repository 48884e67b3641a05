//! Unit tests for threshold configuration and graceful degradation
//!
//! Covers:
//! - Missing threshold file → defaults
//! - Malformed or invalid document → defaults
//! - Path resolution priority (CLI → env → platform default)
//! - Store reads reflect the latest saved values
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate PAYROLL_TRIAGE_CONFIG are marked with #[serial].

use payroll_common::config::{
    default_config_path, resolve_config_path, ConfigStore, ThresholdConfig, CONFIG_ENV_VAR,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let config = ThresholdConfig::load(&path);
    assert_eq!(config, ThresholdConfig::default());
}

#[test]
fn test_malformed_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("thresholds.toml");
    std::fs::write(&path, "this is = = not toml").unwrap();

    let config = ThresholdConfig::load(&path);
    assert_eq!(config, ThresholdConfig::default());
}

#[test]
fn test_wrong_value_type_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("thresholds.toml");
    std::fs::write(&path, "bottleneck_limit = \"many\"\n").unwrap();

    let config = ThresholdConfig::load(&path);
    assert_eq!(config.bottleneck_limit, 15);
}

#[test]
fn test_invalid_range_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("thresholds.toml");
    std::fs::write(&path, "zombie_months = 24\nbottleneck_limit = 4\n").unwrap();

    // Whole document is rejected, not just the bad key
    let config = ThresholdConfig::load(&path);
    assert_eq!(config, ThresholdConfig::default());
}

#[test]
fn test_store_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::new(temp_dir.path().join("thresholds.toml"));

    let mut config = ThresholdConfig::default();
    config.bottleneck_limit = 6;
    config.zombie_months = 6;
    config.vip_filter.insert("Manager".to_string());

    assert!(store.save(&config));
    assert_eq!(store.load(), config);
}

#[test]
fn test_store_reflects_latest_save() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::new(temp_dir.path().join("thresholds.toml"));

    let mut config = ThresholdConfig::default();
    config.bottleneck_limit = 10;
    assert!(store.save(&config));
    assert_eq!(store.load().bottleneck_limit, 10);

    config.bottleneck_limit = 20;
    assert!(store.save(&config));
    assert_eq!(store.load().bottleneck_limit, 20);
}

#[test]
fn test_store_save_creates_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::new(temp_dir.path().join("nested/dir/thresholds.toml"));

    assert!(store.save(&ThresholdConfig::default()));
    assert!(store.path().exists());
}

#[test]
fn test_store_save_failure_returns_false() {
    let temp_dir = TempDir::new().unwrap();
    // Parent "directory" is a regular file, so the write must fail
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();
    let store = ConfigStore::new(blocker.join("thresholds.toml"));

    assert!(!store.save(&ThresholdConfig::default()));
}

#[test]
fn test_store_refuses_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::new(temp_dir.path().join("thresholds.toml"));

    let mut valid = ThresholdConfig::default();
    valid.bottleneck_limit = 8;
    assert!(store.save(&valid));
    let before = std::fs::read_to_string(store.path()).unwrap();

    let mut invalid = ThresholdConfig::default();
    invalid.bottleneck_limit = 0;
    invalid.zombie_months = 4;
    assert!(!store.save(&invalid));

    // Document on disk is untouched and still loads
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    assert_eq!(store.load(), valid);
}

#[test]
fn test_store_refuses_invalid_config_without_creating_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::new(temp_dir.path().join("thresholds.toml"));

    let mut invalid = ThresholdConfig::default();
    invalid.zombie_months = 13;
    assert!(!store.save(&invalid));
    assert!(!store.path().exists());
}

#[test]
fn test_store_reset_restores_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::new(temp_dir.path().join("thresholds.toml"));

    let mut config = ThresholdConfig::default();
    config.min_wage = 10_030;
    assert!(store.save(&config));

    let reset = store.reset();
    assert_eq!(reset, ThresholdConfig::default());
    assert_eq!(store.load(), ThresholdConfig::default());
}

#[test]
#[serial]
fn test_resolve_cli_arg_takes_precedence() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/payroll-env.toml");

    let path = resolve_config_path(Some("/tmp/payroll-cli.toml"));
    assert_eq!(path, PathBuf::from("/tmp/payroll-cli.toml"));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_resolve_env_var() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/payroll-env.toml");

    let path = resolve_config_path(None);
    assert_eq!(path, PathBuf::from("/tmp/payroll-env.toml"));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_resolve_blank_env_var_ignored() {
    env::set_var(CONFIG_ENV_VAR, "   ");

    let path = resolve_config_path(None);
    assert_eq!(path, default_config_path());

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_resolve_default_path() {
    env::remove_var(CONFIG_ENV_VAR);

    let path = resolve_config_path(None);
    assert!(path.ends_with("thresholds.toml"));
    assert_eq!(path, default_config_path());
}
