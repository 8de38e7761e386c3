/*!
 * Database module for persistent storage of users, sites and passwords.
 *
 * This module provides SQLite-based persistence for:
 * - Resolving where the database file lives
 * - Opening connections with foreign keys enforced
 * - Creating the schema
 * - Inserting users, sites and password records
 */

pub mod paths;
pub mod connection;
pub mod schema;
pub mod repository;
pub mod models;

// Re-export main types
pub use connection::{ConnectionFactory, open_connection};
pub use models::{NewPassword, PasswordRecord, SiteRecord, UserRecord};
pub use paths::{DatabaseLocation, DeploymentMode};
pub use repository::Repository;
