//! JSON persistence of the post collection in a single key-value slot.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::Post;
use crate::error::PersistenceError;
use crate::ports::{KeyValueStore, PostPersistence};

/// Slot name the collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "blog-storage";

#[derive(Deserialize)]
struct StoredPosts {
    posts: Vec<Post>,
}

#[derive(Serialize)]
struct StoredPostsRef<'a> {
    posts: &'a [Post],
}

/// Stores the collection as `{ "posts": [...] }` under one fixed key.
pub struct KeyValuePersistence {
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl KeyValuePersistence {
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn with_default_key(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::new(storage, DEFAULT_STORAGE_KEY)
    }
}

impl PostPersistence for KeyValuePersistence {
    fn load(&self) -> Result<Option<Vec<Post>>, PersistenceError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(None);
        };

        let stored: StoredPosts = serde_json::from_str(&raw)?;
        Ok(Some(stored.posts))
    }

    fn save(&self, posts: &[Post]) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(&StoredPostsRef { posts })?;
        self.storage.set(&self.key, &raw)?;
        tracing::trace!(key = %self.key, count = posts.len(), "Posts saved");
        Ok(())
    }
}
