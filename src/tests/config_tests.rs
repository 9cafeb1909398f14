//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    directory::DirectoryConfig, global_config, init_global_config, ConfigLoader, ContactsConfig,
    LogConfig, Validate,
};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = ContactsConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.directory.max_record_length, 50);
    assert!(!config.directory.fold_case_in_ranking);
    assert!(!config.directory.dedup_results);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = ContactsConfig::default();

    config.directory.max_record_length = 0;
    assert!(config.validate().is_err());

    config.directory.max_record_length = 50;
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test that a zero record length is refused with the setting's name.
#[test]
fn test_zero_record_length_is_out_of_range() {
    let config = DirectoryConfig {
        max_record_length: 0,
        ..Default::default()
    };

    match config.validate() {
        Err(ConfigError::ValueOutOfRange { key, .. }) => {
            assert_eq!(key, "directory.max_record_length")
        }
        other => panic!("expected ValueOutOfRange, got {other:?}"),
    }
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "contacts.toml",
            r#"
    [directory]
    max_record_length = 30
    fold_case_in_ranking = true

    [log]
    level = "warn"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE_CONTACTS");
    let config = loader.load().unwrap();

    assert_eq!(config.directory.max_record_length, 30);
    assert!(config.directory.fold_case_in_ranking);
    assert_eq!(config.log.level, "warn");

    // Other values should be defaults
    assert!(!config.directory.dedup_results);
    assert!(!config.log.json);
}

/// Test loading a JSON configuration file.
#[test]
fn test_load_json_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("contacts.json", r#"{ "directory": { "dedup_results": true } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON_CONTACTS")
        .load()
        .unwrap();
    assert!(config.directory.dedup_results);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "contacts_env.toml",
            r#"
    [directory]
    max_record_length = 30
    "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV_CONTACTS__DIRECTORY__MAX_RECORD_LENGTH", "40");
    fixture.set_env("TEST_ENV_CONTACTS__LOG__LEVEL", "error");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV_CONTACTS");
    let config = loader.load().unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.directory.max_record_length, 40);
    assert_eq!(config.log.level, "error");
}

/// Test that loading without a file yields the defaults.
#[test]
fn test_load_without_file() {
    let config = ConfigLoader::new(None::<&str>, "TEST_NO_FILE_CONTACTS")
        .load()
        .unwrap();
    assert_eq!(config.directory.max_record_length, 50);
    assert_eq!(config.log.level, LogConfig::default().level);
}

/// Test that a missing file is reported as such.
#[test]
fn test_load_missing_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.temp_dir.path().join("absent.toml");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_MISSING_CONTACTS");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "invalid.toml",
            r#"
    [directory
    max_record_length = fifty"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID_CONTACTS");
    assert!(loader.load().is_err());
}

/// Test that a file with valid syntax but invalid values fails validation.
#[test]
fn test_load_config_failing_validation() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("bad_level.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_BAD_LEVEL_CONTACTS");
    match loader.load() {
        Err(ConfigError::InvalidLogLevel(level)) => assert_eq!(level, "loud"),
        other => panic!("expected InvalidLogLevel, got {other:?}"),
    }
}

/// Test that unsupported extensions are refused.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.create_file("contacts.ini", "").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INI_CONTACTS");
    assert!(matches!(loader.load(), Err(ConfigError::UnsupportedFormat(_))));
}

/// Test the process-wide configuration slot.
#[test]
fn test_global_config() {
    let mut config = ContactsConfig::default();
    config.directory.max_record_length = 42;
    init_global_config(config);

    // A second initialization is ignored
    init_global_config(ContactsConfig::default());

    let global = global_config().unwrap();
    assert_eq!(global.get().directory.max_record_length, 42);
}
