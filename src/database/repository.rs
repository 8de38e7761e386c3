/*!
 * Insert services for users, sites and password records.
 *
 * Each operation opens its own connection, runs one INSERT inside a
 * transaction, commits and returns the generated row id. Store failures are
 * classified into `StoreError`, reported once at ERROR level through the
 * logger the repository was built with, and returned to the caller.
 */

use std::sync::Arc;

use chrono_tz::Tz;
use log::{Level, Log, debug};
use rusqlite::{Connection, Params, params};

use super::connection::ConnectionFactory;
use super::models::NewPassword;
use super::paths::DatabaseLocation;
use super::schema;
use crate::app_config::Config;
use crate::errors::{AppError, ConstraintKind, Entity, StoreError};
use crate::logging;
use crate::timestamp;

const LOG_TARGET: &str = "passkeeper::repository";

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    /// Source of per-call connections
    factory: ConnectionFactory,
    /// Sink for failure reports
    logger: Arc<dyn Log>,
    /// Timezone for `created_at`
    timezone: Tz,
}

impl Repository {
    /// Create a repository for the given database location
    pub fn new(location: DatabaseLocation, logger: Arc<dyn Log>) -> Self {
        Self {
            factory: ConnectionFactory::new(location),
            logger,
            timezone: timestamp::DEFAULT_TIMEZONE,
        }
    }

    /// Create a repository from configuration, resolving the database location
    pub fn from_config(config: &Config, logger: Arc<dyn Log>) -> Result<Self, AppError> {
        let location = config.database_location()?;
        let timezone = config.tz()?;
        Ok(Self::new(location, logger).with_timezone(timezone))
    }

    /// Record `created_at` in another timezone
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Get the connection factory
    pub fn connections(&self) -> &ConnectionFactory {
        &self.factory
    }

    /// Create the tables if they do not exist yet
    pub fn initialize(&self) -> Result<(), StoreError> {
        self.factory.execute(schema::initialize_schema)
    }

    // =========================================================================
    // Insert Operations
    // =========================================================================

    /// Add a user; `name` must not already exist
    pub fn add_user(&self, name: &str) -> Result<i64, StoreError> {
        let id = self.insert(
            "INSERT INTO users (user_name) VALUES (?1)",
            params![name],
            |e| self.unique_failure(Entity::User, name, e),
        )?;

        debug!("Added user '{}' with id {}", name, id);
        Ok(id)
    }

    /// Add a site; `site` must not already exist
    pub fn add_site(&self, site: &str) -> Result<i64, StoreError> {
        let id = self.insert(
            "INSERT INTO sites (site_name) VALUES (?1)",
            params![site],
            |e| self.unique_failure(Entity::Site, site, e),
        )?;

        debug!("Added site '{}' with id {}", site, id);
        Ok(id)
    }

    /// Add a password record for an existing user and site.
    ///
    /// The password is stored as given.
    pub fn add_password(&self, new: &NewPassword) -> Result<i64, StoreError> {
        let created_at = timestamp::now_iso_in(self.timezone);

        let id = self.insert(
            r#"
            INSERT INTO passwords (
                user_id, site_id, username, password, created_at, description
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                new.user_id,
                new.site_id,
                new.username,
                new.password,
                created_at,
                new.description,
            ],
            |e| self.integrity_failure(e),
        )?;

        debug!(
            "Added password {} for user {} on site {}",
            id, new.user_id, new.site_id
        );
        Ok(id)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Open a connection and run a single INSERT. Failing to open propagates
    /// untouched; statement and commit failures go through `classify`.
    fn insert<P, F>(&self, sql: &str, params: P, classify: F) -> Result<i64, StoreError>
    where
        P: Params,
        F: FnOnce(rusqlite::Error) -> StoreError,
    {
        let mut conn = self.factory.open()?;
        Self::insert_row(&mut conn, sql, params).map_err(classify)
    }

    fn insert_row<P: Params>(conn: &mut Connection, sql: &str, params: P) -> rusqlite::Result<i64> {
        let tx = conn.transaction()?;
        tx.execute(sql, params)?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    fn unique_failure(&self, entity: Entity, value: &str, error: rusqlite::Error) -> StoreError {
        let classified = match StoreError::constraint_kind(&error) {
            Some(ConstraintKind::Unique) => StoreError::Duplicate {
                entity,
                value: value.to_string(),
            },
            _ => StoreError::Storage(error),
        };

        match &classified {
            StoreError::Storage(e) => self.report(format_args!(
                "Database error occurred while adding {} '{}': {}",
                entity.to_string().to_lowercase(),
                value,
                e
            )),
            _ => self.report(format_args!("{}", classified)),
        }
        classified
    }

    fn integrity_failure(&self, error: rusqlite::Error) -> StoreError {
        let classified = match StoreError::constraint_kind(&error) {
            Some(_) => StoreError::Integrity(error.to_string()),
            None => StoreError::Storage(error),
        };

        match &classified {
            StoreError::Storage(e) => self.report(format_args!(
                "Database error occurred while adding password: {}",
                e
            )),
            _ => self.report(format_args!("{}", classified)),
        }
        classified
    }

    fn report(&self, args: std::fmt::Arguments<'_>) {
        logging::emit(self.logger.as_ref(), Level::Error, LOG_TARGET, args);
    }
}
