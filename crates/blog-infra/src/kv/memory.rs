//! In-memory key-value slot - used by tests and when no data directory is configured.

use std::collections::HashMap;
use std::sync::RwLock;

use blog_core::ports::{KeyValueStore, StorageError};

/// In-memory slots using a simple HashMap behind a RwLock.
///
/// Note: Data is lost on process restart.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Operation("lock poisoned".to_string())
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut store = self.store.write().map_err(poisoned)?;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
