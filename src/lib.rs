/*!
 * # passkeeper - a local password store
 *
 * Keeps users, sites and per-(user, site) credentials in a SQLite database
 * next to the application.
 *
 * ## Features
 *
 * - Data directory resolved from the deployment mode (packaged binary or source checkout)
 * - Foreign-key enforcement on every connection
 * - Idempotent schema creation
 * - Insert services with duplicate/integrity/storage error classification
 * - Creation timestamps in a configurable IANA timezone (Africa/Cairo by default)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `database`: SQLite persistence:
 *   - `database::paths`: Database file location
 *   - `database::connection`: Connection factory
 *   - `database::schema`: Table definitions
 *   - `database::repository`: Insert services
 *   - `database::models`: Row types
 * - `logging`: Console and file logger instances
 * - `timestamp`: Localized ISO-8601 timestamps
 * - `errors`: Custom error types for the application
 *
 * Passwords are stored exactly as given; no hashing or encryption is applied.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod database;
pub mod errors;
pub mod logging;
pub mod timestamp;

// Re-export main types for easier usage
pub use app_config::Config;
pub use database::{DatabaseLocation, DeploymentMode, NewPassword, Repository};
pub use errors::{AppError, ConfigError, StoreError};
pub use logging::AppLogger;
pub use timestamp::now_local_iso;
