/*!
 * Error types for the passkeeper application.
 *
 * This module contains custom error types for the storage layer and the
 * configuration layer, using the thiserror crate for ergonomic error definitions.
 */

use std::fmt;
use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

/// Entity kinds that own a uniqueness constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Site,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::User => write!(f, "User"),
            Entity::Site => write!(f, "Site"),
        }
    }
}

/// Errors that can occur when working with the password store
#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique column already holds the value
    #[error("{entity} name already exists: '{value}'")]
    Duplicate {
        /// Entity whose constraint was violated
        entity: Entity,
        /// Offending value
        value: String,
    },

    /// A foreign key (or other integrity constraint) rejected the row
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// Any other failure reported by SQLite (I/O, locking, malformed schema)
    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The database directory could not be created
    #[error("Failed to create directory {path:?}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Constraint category reported by SQLite for a failed statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    Other,
}

impl StoreError {
    /// Inspect a rusqlite error and report which constraint, if any, it violated
    pub fn constraint_kind(error: &rusqlite::Error) -> Option<ConstraintKind> {
        match error {
            rusqlite::Error::SqliteFailure(failure, _)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                let kind = match failure.extended_code {
                    rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => ConstraintKind::Unique,
                    rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => ConstraintKind::ForeignKey,
                    _ => ConstraintKind::Other,
                };
                Some(kind)
            }
            _ => None,
        }
    }

    /// True for `Duplicate` errors
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::Duplicate { .. })
    }

    /// True for `Integrity` errors
    pub fn is_integrity(&self) -> bool {
        matches!(self, StoreError::Integrity(_))
    }
}

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read or written
    #[error("Config file error {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for `Config`
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The timezone name is not in the IANA database
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    /// Any other rejected value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the password store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from configuration handling
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
