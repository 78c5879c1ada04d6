//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Callers match on the variant: `InvalidArgument` and `NotFound` are business
/// failures, `Decode` and `Storage` are surfaced from a store implementation.
/// A missing cart is never an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input was rejected before touching storage (missing field, negative qty).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A stored row could not be turned into a typed record.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The backing store failed (connection, statement, runtime).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
