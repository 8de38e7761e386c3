use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::database::paths::{DatabaseLocation, DeploymentMode};
use crate::errors::{ConfigError, StoreError};
use crate::timestamp;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Where the data directory is anchored
    #[serde(default)]
    pub deployment_mode: DeploymentMode,

    /// Explicit base directory; replaces the mode-derived one when set
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// IANA timezone for creation timestamps
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    /// Log level
    #[serde(default)]
    pub level: LogLevel,

    /// Write records to stderr
    #[serde(default = "default_true")]
    pub console: bool,

    /// Append records to this file
    #[serde(default = "default_log_file")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            console: true,
            file: default_log_file(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_timezone() -> String {
    "Africa/Cairo".to_string()
}

fn default_log_file() -> Option<PathBuf> {
    Some(PathBuf::from("app.log"))
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from `path`, writing a default file there if none exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tz()?;

        if let Some(base_dir) = &self.base_dir {
            if base_dir.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("base_dir must not be empty".to_string()));
            }
        }

        if let Some(file) = &self.log.file {
            if file.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("log.file must not be empty".to_string()));
            }
        }

        Ok(())
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(
        &mut self,
        log_level: Option<LogLevel>,
        deployment_mode: Option<DeploymentMode>,
        base_dir: Option<PathBuf>,
    ) {
        if let Some(level) = log_level {
            self.log.level = level;
        }
        if let Some(mode) = deployment_mode {
            self.deployment_mode = mode;
        }
        if let Some(base_dir) = base_dir {
            self.base_dir = Some(base_dir);
        }
    }

    /// Parsed timezone
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        timestamp::parse_timezone(&self.timezone)
            .ok_or_else(|| ConfigError::InvalidTimezone(self.timezone.clone()))
    }

    /// Resolve the database location, creating the data directory
    pub fn database_location(&self) -> Result<DatabaseLocation, StoreError> {
        match &self.base_dir {
            Some(base_dir) => DatabaseLocation::under(base_dir),
            None => DatabaseLocation::for_mode(self.deployment_mode),
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            deployment_mode: DeploymentMode::detect(),
            base_dir: None,
            timezone: default_timezone(),
            log: LogConfig::default(),
        }
    }
}
