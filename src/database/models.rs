/*!
 * Database entity models.
 *
 * These structures map directly to database tables and provide
 * type-safe access to persisted data.
 */

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Surrogate key
    pub id: i64,
    /// Unique user name
    pub user_name: String,
}

impl UserRecord {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_name: row.get("user_name")?,
        })
    }
}

/// A row of the `sites` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRecord {
    /// Surrogate key
    pub id: i64,
    /// Unique site name
    pub site_name: String,
}

impl SiteRecord {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            site_name: row.get("site_name")?,
        })
    }
}

/// A row of the `passwords` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRecord {
    pub id: i64,
    /// Owning user (users.id)
    pub user_id: i64,
    /// Site the credential belongs to (sites.id)
    pub site_id: i64,
    /// Login name on the site, unrelated to `UserRecord::user_name`
    pub username: String,
    /// Stored exactly as given
    pub password: String,
    /// ISO-8601 timestamp with UTC offset, set once at insert
    pub created_at: String,
    pub description: Option<String>,
}

impl PasswordRecord {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            site_id: row.get("site_id")?,
            username: row.get("username")?,
            password: row.get("password")?,
            created_at: row.get("created_at")?,
            description: row.get("description")?,
        })
    }
}

/// Parameters for inserting a password record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPassword {
    pub user_id: i64,
    pub site_id: i64,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewPassword {
    /// Create insert parameters without a description
    pub fn new(
        user_id: i64,
        site_id: i64,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            site_id,
            username: username.into(),
            password: password.into(),
            description: None,
        }
    }

    /// Attach a free-form description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
