/*!
 * Database file location.
 *
 * Resolves the directory the database lives under from the deployment mode
 * and makes sure its `data/` subdirectory exists.
 */

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// Subdirectory of the base directory holding the database
pub const DATA_DIRNAME: &str = "data";

/// Database filename
pub const DB_FILENAME: &str = "passwords.db";

/// How the program is deployed, which decides where its data lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    /// Standalone binary: data sits next to the executable
    Packaged,
    /// Running from a source checkout: data sits in the crate directory
    Source,
}

impl DeploymentMode {
    /// Pick a mode for the current build. Debug builds run from a checkout.
    pub fn detect() -> Self {
        if cfg!(debug_assertions) {
            DeploymentMode::Source
        } else {
            DeploymentMode::Packaged
        }
    }
}

impl Default for DeploymentMode {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentMode::Packaged => write!(f, "packaged"),
            DeploymentMode::Source => write!(f, "source"),
        }
    }
}

/// Directory the `data/` folder is created under
pub fn resolve_base_directory(mode: DeploymentMode) -> Result<PathBuf, StoreError> {
    match mode {
        DeploymentMode::Packaged => {
            let exe = std::env::current_exe().map_err(|source| StoreError::Filesystem {
                path: PathBuf::from("<current executable>"),
                source,
            })?;
            Ok(exe
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")))
        }
        DeploymentMode::Source => Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
    }
}

/// Create `<base>/data` (and any missing ancestors) and return the database file path
pub fn resolve_database_path<P: AsRef<Path>>(base_dir: P) -> Result<PathBuf, StoreError> {
    let data_dir = base_dir.as_ref().join(DATA_DIRNAME);

    std::fs::create_dir_all(&data_dir).map_err(|source| StoreError::Filesystem {
        path: data_dir.clone(),
        source,
    })?;

    debug!("Database directory ready: {:?}", data_dir);
    Ok(data_dir.join(DB_FILENAME))
}

/// A resolved database file location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseLocation {
    base_dir: PathBuf,
    db_path: PathBuf,
}

impl DatabaseLocation {
    /// Resolve the location for a deployment mode
    pub fn for_mode(mode: DeploymentMode) -> Result<Self, StoreError> {
        let base = resolve_base_directory(mode)?;
        Self::under(base)
    }

    /// Resolve the location under an explicit base directory
    pub fn under<P: AsRef<Path>>(base_dir: P) -> Result<Self, StoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let db_path = resolve_database_path(&base_dir)?;
        Ok(Self { base_dir, db_path })
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Recreate the data directory if it went missing and return the database file path
    pub fn ensure(&self) -> Result<&Path, StoreError> {
        resolve_database_path(&self.base_dir)?;
        Ok(self.db_path.as_path())
    }
}
