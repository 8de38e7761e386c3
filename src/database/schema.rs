/*!
 * Database schema definitions.
 *
 * Creates the `users`, `sites` and `passwords` tables. Every statement is
 * guarded with `IF NOT EXISTS`, so initialization can run on every start.
 */

use log::{debug, info};
use rusqlite::Connection;

use crate::errors::StoreError;

/// Tables owned by the password store, in creation order
pub const TABLES: [&str; 3] = ["users", "sites", "passwords"];

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_name TEXT NOT NULL UNIQUE
    );
"#;

const CREATE_SITES: &str = r#"
    CREATE TABLE IF NOT EXISTS sites (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        site_name TEXT NOT NULL UNIQUE
    );
"#;

// Both foreign keys cascade on delete. Nothing deletes rows today.
const CREATE_PASSWORDS: &str = r#"
    CREATE TABLE IF NOT EXISTS passwords (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        site_id INTEGER NOT NULL,
        username TEXT NOT NULL,
        password TEXT NOT NULL,
        created_at TEXT NOT NULL,
        description TEXT,
        FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
        FOREIGN KEY (site_id) REFERENCES sites(id) ON DELETE CASCADE
    );
"#;

/// Initialize the database schema
pub fn initialize_schema(conn: &Connection) -> Result<(), StoreError> {
    let existing = table_names(conn)?;
    if TABLES.iter().all(|t| existing.iter().any(|e| e == t)) {
        debug!("Database schema already present");
        return Ok(());
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(CREATE_USERS)?;
    tx.execute_batch(CREATE_SITES)?;
    tx.execute_batch(CREATE_PASSWORDS)?;
    tx.commit()?;

    info!("Database schema created successfully");
    Ok(())
}

/// Names of the user tables in the database, sorted
pub fn table_names(conn: &Connection) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(names)
}

/// Stored `CREATE` statements for the store's tables, in table order
pub fn schema_sql(conn: &Connection) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn.prepare("SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
    let mut statements = Vec::with_capacity(TABLES.len());
    for table in TABLES {
        let sql: String = stmt.query_row([table], |row| row.get(0))?;
        statements.push(sql);
    }
    Ok(statements)
}
