//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use super::test_utils::TestFixture;
use crate::config::{AlaConfig, ConfigLoader, LogConfig, Validate};
use crate::error::config::ConfigError;
use crate::router::build_trie;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = AlaConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.routes.is_empty());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = AlaConfig::default();
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log = LogConfig::default();
    config.trie.wildcard_marker = "/".to_string();
    assert!(config.validate().is_err());

    config.trie.wildcard_marker = "*".to_string();
    config.trie.max_depth = 0;
    assert!(config.validate().is_err());
}

/// Test loading a route table from a TOML file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "routes.toml",
            r#"
            [trie]
            max_depth = 16

            [log]
            level = "debug"

            [[routes]]
            path = "/user/:id:[0-9]+"
            target = "user"

            [[routes]]
            path = "/files/*"
            target = "files"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.trie.max_depth, 16);
    assert_eq!(config.trie.delimiter, "/");
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.routes.len(), 2);

    let mut trie = build_trie(&config).unwrap();
    assert!(trie.matches("/user/42"));
    assert_eq!(trie.hit_data().map(String::as_str), Some("user"));
    assert!(!trie.matches("/user/bob"));
}

/// Test loading a JSON configuration file.
#[test]
fn test_load_json_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "routes.json",
            r#"{ "trie": { "delimiter": "." }, "routes": [ { "path": "a.:b", "target": "ab" } ] }"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    let mut trie = build_trie(&config).unwrap();
    assert!(trie.matches("a.x"));
    assert_eq!(trie.hit_parameter_count(), 1);
}

/// Test environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("env.toml", "[log]\nlevel = \"warn\"\n")
        .unwrap();
    fixture.set_env("TEST_ENV__LOG__LEVEL", "error");
    fixture.set_env("TEST_ENV__TRIE__MAX_DEPTH", "3");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV").load().unwrap();
    assert_eq!(config.log.level, "error");
    assert_eq!(config.trie.max_depth, 3);
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("absent.toml");
    let err = ConfigLoader::new(Some(&path), "TEST_MISSING").load().unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(p) if p == path));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("invalid.toml", "[trie\ndelimiter = /\"\n")
        .unwrap();
    assert!(ConfigLoader::new(Some(&config_path), "TEST_INVALID").load().is_err());

    let config_path = fixture.create_file("routes.ini2", "").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&config_path), "TEST_INVALID").load(),
        Err(ConfigError::ParseError(_))
    ));
}

/// Test that a generated default file loads back.
#[test]
fn test_generated_config_loads() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&AlaConfig::default()).unwrap();
    let config_path = fixture.create_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_GENERATED").load().unwrap();
    assert_eq!(config.trie, AlaConfig::default().trie);
}
