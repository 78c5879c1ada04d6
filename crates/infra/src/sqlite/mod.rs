//! SQLite-backed storage for carts and products.
//!
//! The public API is blocking. Each call builds a current-thread Tokio runtime,
//! opens a fresh connection, runs its statements and closes the connection
//! again; no pool and no state survive between calls. Do not call it from
//! inside an async runtime.
//!
//! Add/remove are a read followed by a write with no transaction around them,
//! so concurrent writers for the same username can lose updates.

mod carts;
mod products;

use std::future::Future;

use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Connection, Decode, Row, Type};
use tokio::runtime::Builder;

use shopcart_core::DomainResult;

use crate::config::StoreConfig;
use crate::error::StoreError;

const CREATE_CARTS: &str = r#"
    CREATE TABLE IF NOT EXISTS carts (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        contents TEXT,
        cost     REAL
    )
"#;

const CREATE_PRODUCTS: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        name        TEXT NOT NULL,
        description TEXT NOT NULL,
        cost        REAL NOT NULL,
        qty         INTEGER NOT NULL
    )
"#;

/// Cart and product store over one SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    config: StoreConfig,
}

impl SqliteStore {
    /// Create a store without touching the file. The schema is created by the
    /// first call that finds the file missing.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Create a store and make sure both tables exist, even if the file was
    /// created by someone else.
    pub fn open(config: StoreConfig) -> DomainResult<Self> {
        let store = Self::new(config);
        store.run("open", async {
            let mut conn = store.connect().await?;
            create_tables(&mut conn).await?;
            conn.close().await?;
            Ok::<(), StoreError>(())
        })?;
        Ok(store)
    }

    /// Open a connection, creating the file and its schema if it is new.
    pub(crate) async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        let path = self.config.path();
        let existed = path.exists();

        if !existed {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let mut conn = SqliteConnection::connect_with(&options).await?;

        if !existed {
            create_tables(&mut conn).await?;
            tracing::info!(path = %path.display(), "initialized store schema");
        }

        Ok(conn)
    }

    /// Drive one storage operation to completion on a throwaway runtime.
    fn run<T, F>(&self, operation: &'static str, fut: F) -> DomainResult<T>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(StoreError::from)?;

        rt.block_on(fut).map_err(|err| {
            tracing::error!(operation, error = %err, "store operation failed");
            err.into()
        })
    }
}

async fn create_tables(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    sqlx::query(CREATE_CARTS).execute(&mut *conn).await?;
    sqlx::query(CREATE_PRODUCTS).execute(&mut *conn).await?;
    Ok(())
}

/// Read a typed column, reporting missing or ill-typed values as decode errors.
fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, StoreError>
where
    T: Decode<'r, Sqlite> + Type<Sqlite>,
{
    row.try_get(name)
        .map_err(|e| StoreError::decode(format!("column {name}: {e}")))
}
