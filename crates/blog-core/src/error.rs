//! Domain-level error types.

use thiserror::Error;

use crate::ports::StorageError;

/// Domain errors - business rule failures surfaced to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Persistence-level errors raised while loading or saving the collection.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Storage failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Store errors - returned by mutating store operations.
///
/// A store error never rolls back the in-memory collection: the mutation
/// has already been applied when the write-through fails.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to persist posts: {0}")]
    Persistence(#[from] PersistenceError),
}
