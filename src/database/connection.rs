/*!
 * Database connection management.
 *
 * Every operation gets its own SQLite connection with foreign-key enforcement
 * switched on. Connections are owned values and close when dropped, on the
 * error path too.
 */

use std::path::Path;

use log::trace;
use rusqlite::Connection;

use super::paths::DatabaseLocation;
use crate::errors::StoreError;

/// Open a connection to the database file and enable foreign keys on it
pub fn open_connection<P: AsRef<Path>>(db_path: P) -> Result<Connection, StoreError> {
    let db_path = db_path.as_ref();
    trace!("Opening database at: {:?}", db_path);

    let conn = Connection::open(db_path)?;

    // SQLite ships with foreign keys disabled; the setting is per connection
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    Ok(conn)
}

/// Report whether foreign-key enforcement is active on a connection
pub fn foreign_keys_enabled(conn: &Connection) -> Result<bool, StoreError> {
    let enabled: i64 = conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))?;
    Ok(enabled == 1)
}

/// Hands out short-lived connections bound to one database file
#[derive(Debug, Clone)]
pub struct ConnectionFactory {
    location: DatabaseLocation,
}

impl ConnectionFactory {
    /// Create a factory for the given database location
    pub fn new(location: DatabaseLocation) -> Self {
        Self { location }
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        self.location.path()
    }

    /// Open a fresh connection with foreign keys enabled.
    ///
    /// The data directory is recreated first if it has been removed.
    pub fn open(&self) -> Result<Connection, StoreError> {
        open_connection(self.location.ensure()?)
    }

    /// Run `f` against a fresh connection, closing it afterwards
    pub fn execute<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError>,
    {
        let conn = self.open()?;
        f(&conn)
    }
}
