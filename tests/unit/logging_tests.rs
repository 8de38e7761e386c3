/*!
 * Tests for the logger instances
 */

use std::sync::Arc;

use log::{Level, LevelFilter, Log};
use passkeeper::app_config::{LogConfig, LogLevel};
use passkeeper::logging::{self, AppLogger, MemoryLogger};

#[test]
fn test_fromConfig_withFile_shouldCreateParentsAndAppend() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("nested").join("app.log");
    let config = LogConfig {
        level: LogLevel::Error,
        console: false,
        file: Some(path.clone()),
    };

    let logger = AppLogger::from_config(&config).expect("Failed to build logger");
    logging::emit(&logger, Level::Error, "test", format_args!("first"));
    logging::emit(&logger, Level::Warn, "test", format_args!("filtered"));
    logging::emit(&logger, Level::Error, "test", format_args!("second"));
    logger.flush();

    assert_eq!(logger.file_path(), Some(path.as_path()));
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[ERROR first]"));
    assert!(lines[1].ends_with("[ERROR second]"));
}

#[test]
fn test_enabled_shouldRespectLevel() {
    let logger = AppLogger::new(LevelFilter::Warn).without_console();
    let warn = log::Metadata::builder().level(Level::Warn).build();
    let info = log::Metadata::builder().level(Level::Info).build();

    assert!(logger.enabled(&warn));
    assert!(!logger.enabled(&info));
}

#[test]
fn test_memoryLogger_asSharedInstance_shouldCollectFromClones() {
    let logger = Arc::new(MemoryLogger::new());
    let shared: Arc<dyn Log> = logger.clone();

    logging::emit(shared.as_ref(), Level::Error, "a", format_args!("one"));
    logging::emit(shared.as_ref(), Level::Info, "b", format_args!("two"));

    assert_eq!(logger.records().len(), 2);
    assert_eq!(logger.messages_at(Level::Error), vec!["one".to_string()]);
}
