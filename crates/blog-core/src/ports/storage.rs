/// Durable key-value slot - abstraction over the storage medium (file, memory).
///
/// Calls complete synchronously; a successful `set` is visible to the next `get`.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the slot is empty.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key` as a whole.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Key-value storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
