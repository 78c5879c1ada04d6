use thiserror::Error;

use shopcart_core::DomainError;

/// Storage operation error.
///
/// These are **infrastructure errors**. They cross into the domain as
/// `DomainError::Decode` or `DomainError::Storage` at the store-trait boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Runtime startup or store directory creation failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("undecodable row: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Decode(msg) => DomainError::Decode(msg),
            other => DomainError::Storage(other.to_string()),
        }
    }
}

// Only the contents codec raises a DomainError inside the store.
impl From<DomainError> for StoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Decode(msg) => StoreError::Decode(msg),
            other => StoreError::Decode(other.to_string()),
        }
    }
}
