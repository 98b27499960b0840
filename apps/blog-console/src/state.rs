//! Application state - the wired-up post store.

use std::sync::Arc;

use blog_core::ports::KeyValueStore;
use blog_core::{KeyValuePersistence, PostStore};
use blog_infra::{
    FileKeyValueStore, InMemoryKeyValueStore, StorageBackend, StorageConfig, SystemClock,
};

/// Open the post store on the configured storage backend.
pub fn open_store(config: &StorageConfig) -> PostStore {
    let kv: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::File => {
            tracing::info!(dir = %config.data_dir.display(), "Using file storage");
            Arc::new(FileKeyValueStore::new(config.data_dir.clone()))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage - changes are lost on exit");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    let persistence = Arc::new(KeyValuePersistence::new(kv, config.key.clone()));
    PostStore::open(persistence, Arc::new(SystemClock))
}
