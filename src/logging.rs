/*!
 * Logger instances for the password store.
 *
 * `AppLogger` writes each record to the console and, when configured, to an
 * append-only log file. It is created explicitly and handed to the components
 * that need it; installing it as the `log` facade backend is optional.
 */

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::Mutex;

use crate::app_config::LogConfig;

/// Console and file logger
pub struct AppLogger {
    level: LevelFilter,
    console: bool,
    file: Option<Mutex<File>>,
    file_path: Option<PathBuf>,
}

impl AppLogger {
    /// Console-only logger at the given level
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            console: true,
            file: None,
            file_path: None,
        }
    }

    /// Build a logger from the logging section of the configuration
    pub fn from_config(config: &LogConfig) -> Result<Self> {
        let mut logger = Self::new(config.level.to_level_filter());
        logger.console = config.console;
        if let Some(path) = &config.file {
            logger = logger.with_file(path)?;
        }
        Ok(logger)
    }

    /// Also append every record to `path`, creating it and its parents if needed
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {:?}", path))?;

        self.file = Some(Mutex::new(file));
        self.file_path = Some(path.to_path_buf());
        Ok(self)
    }

    /// Disable console output
    pub fn without_console(mut self) -> Self {
        self.console = false;
        self
    }

    /// Path of the log file, if any
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Render a record as `YYYY-MM-DD HH:MM:SS [LEVEL message]`
    pub fn format_line(record: &Record) -> String {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        format!("{} [{} {}]", now, record.level(), record.args())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Self::format_line(record);

        if self.console {
            let color = Self::color_for_level(record.level());
            let _ = writeln!(std::io::stderr(), "{}{}\x1B[0m", color, line);
        }

        if let Some(file) = &self.file {
            let _ = writeln!(file.lock(), "{}", line);
        }
    }

    fn flush(&self) {
        if self.console {
            let _ = std::io::stderr().flush();
        }
        if let Some(file) = &self.file {
            let _ = file.lock().flush();
        }
    }
}

/// Emit one record through an explicit logger instance
pub fn emit(logger: &dyn Log, level: Level, target: &str, args: fmt::Arguments<'_>) {
    let record = Record::builder()
        .level(level)
        .target(target)
        .args(args)
        .build();

    if logger.enabled(record.metadata()) {
        logger.log(&record);
    }
}

/// Route the `log` facade to a shared logger instance.
///
/// Only the binary does this; library code writes to the instance it was given.
pub fn install_global(logger: Arc<dyn Log>, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(SharedLogger(logger)))?;
    log::set_max_level(level);
    Ok(())
}

struct SharedLogger(Arc<dyn Log>);

impl Log for SharedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.0.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        self.0.log(record)
    }

    fn flush(&self) {
        self.0.flush()
    }
}

/// Logger that keeps formatted records in memory
#[derive(Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured `(level, message)` pairs
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.lock().clone()
    }

    /// Messages captured at `level`
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Log for MemoryLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}
