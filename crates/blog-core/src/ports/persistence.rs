use crate::domain::Post;
use crate::error::PersistenceError;

/// Whole-collection persistence port used by the post store.
pub trait PostPersistence: Send + Sync {
    /// Load the persisted collection. `Ok(None)` means nothing was saved yet.
    fn load(&self) -> Result<Option<Vec<Post>>, PersistenceError>;

    /// Replace the persisted collection with `posts`.
    fn save(&self, posts: &[Post]) -> Result<(), PersistenceError>;
}
