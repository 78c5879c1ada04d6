//! Infrastructure layer: SQLite storage, in-memory stores, configuration.

pub mod config;
pub mod error;
pub mod memory;
pub mod sqlite;


pub use config::StoreConfig;
pub use error::StoreError;
pub use memory::{InMemoryCartStore, InMemoryProductStore};
pub use sqlite::SqliteStore;
