/*!
 * Tests wiring configuration, logging and the repository together
 */

use std::sync::Arc;

use log::Log;
use passkeeper::app_config::Config;
use passkeeper::logging::AppLogger;
use passkeeper::{NewPassword, Repository};

#[test]
fn test_fromConfig_withBaseDirAndLogFile_shouldLogFailuresToFile() {
    let temp = tempfile::tempdir().unwrap();
    let log_path = temp.path().join("app.log");

    let mut config = Config {
        base_dir: Some(temp.path().to_path_buf()),
        ..Config::default()
    };
    config.log.console = false;
    config.log.file = Some(log_path.clone());
    config.validate().unwrap();

    let logger: Arc<dyn Log> = Arc::new(AppLogger::from_config(&config.log).unwrap());
    let repo = Repository::from_config(&config, logger.clone()).expect("Failed to build repository");
    repo.initialize().unwrap();

    assert_eq!(repo.connections().path(), temp.path().join("data").join("passwords.db"));

    repo.add_site("gmail").unwrap();
    repo.add_site("gmail").unwrap_err();
    logger.flush();

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("[ERROR Site name already exists: 'gmail']"));
}

#[test]
fn test_fromConfig_withUtcTimezone_shouldStampInUtc() {
    let temp = tempfile::tempdir().unwrap();
    let config = Config {
        base_dir: Some(temp.path().to_path_buf()),
        timezone: "UTC".to_string(),
        ..Config::default()
    };
    let logger: Arc<dyn Log> = Arc::new(passkeeper::logging::MemoryLogger::new());

    let repo = Repository::from_config(&config, logger).unwrap();
    repo.initialize().unwrap();
    repo.add_user("alice").unwrap();
    repo.add_site("gmail").unwrap();
    repo.add_password(&NewPassword::new(1, 1, "alice", "pw")).unwrap();

    let created_at: String = repo
        .connections()
        .open()
        .unwrap()
        .query_row("SELECT created_at FROM passwords", [], |row| row.get(0))
        .unwrap();
    assert!(created_at.ends_with("+00:00"), "got {}", created_at);
}

#[test]
fn test_fromConfig_withUnknownTimezone_shouldFail() {
    let temp = tempfile::tempdir().unwrap();
    let config = Config {
        base_dir: Some(temp.path().to_path_buf()),
        timezone: "Nowhere/Null".to_string(),
        ..Config::default()
    };
    let logger: Arc<dyn Log> = Arc::new(passkeeper::logging::MemoryLogger::new());

    assert!(Repository::from_config(&config, logger).is_err());
}
