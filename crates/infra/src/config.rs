//! Store configuration.

use std::path::{Path, PathBuf};

/// Environment variable naming the SQLite file.
pub const DB_PATH_ENV: &str = "SHOPCART_DB_PATH";

/// Default store file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "carts.db";

/// Where the store lives. Passed explicitly to [`crate::SqliteStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read `SHOPCART_DB_PATH`, falling back to `carts.db`.
    pub fn from_env() -> Self {
        match std::env::var(DB_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::new(path),
            _ => {
                tracing::warn!("{DB_PATH_ENV} not set; using {DEFAULT_DB_PATH}");
                Self::default()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}
