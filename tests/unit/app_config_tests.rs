/*!
 * Tests for application configuration functionality
 */

use std::path::PathBuf;

use passkeeper::app_config::{Config, LogLevel};
use passkeeper::errors::ConfigError;
use passkeeper::DeploymentMode;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.deployment_mode, DeploymentMode::detect());
    assert!(config.base_dir.is_none());
    assert_eq!(config.timezone, "Africa/Cairo");
    assert_eq!(config.log.level, LogLevel::Info);
    assert!(config.log.console);
    assert_eq!(config.log.file, Some(PathBuf::from("app.log")));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() {
    let json = r#"{ "deployment_mode": "packaged", "log": { "level": "debug" } }"#;

    let config: Config = serde_json::from_str(json).expect("Failed to parse config");

    assert_eq!(config.deployment_mode, DeploymentMode::Packaged);
    assert_eq!(config.timezone, "Africa/Cairo");
    assert_eq!(config.log.level, LogLevel::Debug);
    assert_eq!(config.log.file, Some(PathBuf::from("app.log")));
}

#[test]
fn test_config_deserialize_withNullLogFile_shouldDisableFileLogging() {
    let json = r#"{ "log": { "file": null } }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert!(config.log.file.is_none());
}

#[test]
fn test_config_validate_withUnknownTimezone_shouldFail() {
    let config = Config {
        timezone: "Mars/Olympus".to_string(),
        ..Config::default()
    };

    let err = config.validate().unwrap_err();

    assert!(matches!(err, ConfigError::InvalidTimezone(ref tz) if tz == "Mars/Olympus"));
}

#[test]
fn test_config_validate_withEmptyBaseDir_shouldFail() {
    let config = Config {
        base_dir: Some(PathBuf::new()),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("conf.json");

    let created = Config::load_or_create(&path).expect("Failed to create config");
    assert!(path.exists());

    let loaded = Config::load(&path).expect("Failed to reload config");
    assert_eq!(created, loaded);
}

#[test]
fn test_load_withInvalidJson_shouldReturnParseError() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("conf.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_withMissingFile_shouldReturnIoError() {
    let temp = tempfile::tempdir().unwrap();
    let result = Config::load(temp.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_applyOverrides_withAllValues_shouldReplaceLoadedSettings() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("conf.json");
    std::fs::write(
        &path,
        r#"{ "deployment_mode": "packaged", "base_dir": "/from/file", "log": { "level": "warn" } }"#,
    )
    .unwrap();
    let mut config = Config::load(&path).unwrap();

    config.apply_overrides(
        Some(LogLevel::Trace),
        Some(DeploymentMode::Source),
        Some(PathBuf::from("/from/cli")),
    );

    assert_eq!(config.log.level, LogLevel::Trace);
    assert_eq!(config.deployment_mode, DeploymentMode::Source);
    assert_eq!(config.base_dir, Some(PathBuf::from("/from/cli")));
}

#[test]
fn test_applyOverrides_withNoValues_shouldKeepLoadedSettings() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("conf.json");
    std::fs::write(
        &path,
        r#"{ "deployment_mode": "packaged", "base_dir": "/from/file", "log": { "level": "warn" } }"#,
    )
    .unwrap();
    let mut config = Config::load(&path).unwrap();
    let loaded = config.clone();

    config.apply_overrides(None, None, None);

    assert_eq!(config, loaded);
    assert_eq!(config.base_dir, Some(PathBuf::from("/from/file")));
}

#[test]
fn test_loadOrCreate_thenOverrideBaseDir_shouldResolveDatabaseUnderOverride() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("conf.json");
    let mut config = Config::load_or_create(&path).unwrap();
    assert!(path.exists());

    config.apply_overrides(None, None, Some(temp.path().join("base")));
    config.validate().unwrap();

    let location = config.database_location().unwrap();
    assert_eq!(location.path(), temp.path().join("base").join("data").join("passwords.db"));
}
