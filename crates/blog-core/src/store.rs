//! Post store - the single owner of the post collection.
//!
//! Every effective mutation is applied in memory first, then written through
//! to the persistence port, then announced to subscribers. The in-memory
//! collection is authoritative: a failed write is reported to the caller but
//! the mutation stays applied.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::domain::{NewPost, Post, PostId, PostPatch};
use crate::error::StoreError;
use crate::ports::{Clock, PostPersistence};
use crate::seed;

/// Callback invoked with the new snapshot after each mutation.
pub type Listener = Box<dyn Fn(&[Post]) + Send + Sync>;

/// Handle returned by [`PostStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct PostStore {
    posts: Vec<Post>,
    persistence: Arc<dyn PostPersistence>,
    clock: Arc<dyn Clock>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl PostStore {
    /// Rehydrate the collection from `persistence`.
    ///
    /// An empty or unreadable slot is replaced by the seed collection in
    /// memory only; the slot is left untouched until the first mutation.
    /// This never fails.
    pub fn open(persistence: Arc<dyn PostPersistence>, clock: Arc<dyn Clock>) -> Self {
        let loaded = match persistence.load() {
            Ok(Some(posts)) => Some(dedupe_ids(posts)),
            Ok(None) => {
                tracing::info!("No persisted posts found, seeding default collection");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Persisted posts unreadable, resetting to seed");
                None
            }
        };

        let posts = match loaded {
            Some(posts) => {
                tracing::debug!(count = posts.len(), "Posts rehydrated");
                posts
            }
            None => seed::seed_posts(clock.now()),
        };

        Self {
            posts,
            persistence,
            clock,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current ordered snapshot, newest first.
    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Look up a post. A missing id is a normal `None`.
    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == id)
    }

    /// Create a post with a fresh id and the current time, placed at the head.
    pub fn create(&mut self, fields: NewPost) -> Result<Post, StoreError> {
        let mut id = PostId::generate();
        while self.get(&id).is_some() {
            id = PostId::generate();
        }

        let post = Post::new(id, self.clock.now(), fields);
        self.posts.insert(0, post.clone());
        tracing::debug!(post_id = %post.id, "Post created");

        self.commit()?;
        Ok(post)
    }

    /// Merge `patch` over the post with `id`.
    ///
    /// Returns the updated post, or `None` when no post has that id (no-op).
    pub fn update(&mut self, id: &PostId, patch: PostPatch) -> Result<Option<Post>, StoreError> {
        let Some(post) = self.posts.iter_mut().find(|post| &post.id == id) else {
            tracing::debug!(post_id = %id, "Update of unknown post ignored");
            return Ok(None);
        };

        post.apply(patch);
        let updated = post.clone();
        tracing::debug!(post_id = %id, "Post updated");

        self.commit()?;
        Ok(Some(updated))
    }

    /// Remove the post with `id`, returning it. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &PostId) -> Result<Option<Post>, StoreError> {
        let Some(index) = self.posts.iter().position(|post| &post.id == id) else {
            tracing::debug!(post_id = %id, "Delete of unknown post ignored");
            return Ok(None);
        };

        let removed = self.posts.remove(index);
        tracing::debug!(post_id = %id, "Post deleted");

        self.commit()?;
        Ok(Some(removed))
    }

    /// Register a listener called with the snapshot after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&[Post]) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn commit(&self) -> Result<(), StoreError> {
        let saved = self.persistence.save(&self.posts);
        if let Err(e) = &saved {
            tracing::error!(error = %e, "Failed to persist posts");
        }

        for (_, listener) in &self.listeners {
            listener(self.posts.as_slice());
        }

        saved.map_err(StoreError::from)
    }
}

impl fmt::Debug for PostStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostStore")
            .field("posts", &self.posts.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Keep the first occurrence of each id.
fn dedupe_ids(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::new();
    let before = posts.len();
    let posts: Vec<Post> = posts
        .into_iter()
        .filter(|post| seen.insert(post.id.clone()))
        .collect();

    if posts.len() != before {
        tracing::warn!(
            dropped = before - posts.len(),
            "Dropped posts with duplicate ids"
        );
    }
    posts
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::error::PersistenceError;
    use crate::ports::StorageError;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[derive(Default)]
    struct FakePersistence {
        stored: Mutex<Option<Vec<Post>>>,
        fail_saves: bool,
        unreadable: bool,
        saves: AtomicUsize,
    }

    impl PostPersistence for FakePersistence {
        fn load(&self) -> Result<Option<Vec<Post>>, PersistenceError> {
            if self.unreadable {
                return Err(StorageError::Operation("read failed".to_string()).into());
            }
            Ok(self.stored.lock().unwrap().clone())
        }

        fn save(&self, posts: &[Post]) -> Result<(), PersistenceError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            if self.fail_saves {
                return Err(StorageError::Operation("disk full".to_string()).into());
            }
            *self.stored.lock().unwrap() = Some(posts.to_vec());
            Ok(())
        }
    }

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap()))
    }

    fn post(id: &str) -> Post {
        Post::new(
            PostId::from(id),
            clock().0,
            NewPost::new("T", "C", "E", "A"),
        )
    }

    #[test]
    fn test_duplicate_ids_are_dropped_on_open() {
        let persistence = Arc::new(FakePersistence {
            stored: Mutex::new(Some(vec![post("a"), post("b"), post("a")])),
            ..FakePersistence::default()
        });

        let store = PostStore::open(persistence, clock());
        let ids: Vec<&str> = store.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_unreadable_slot_is_not_overwritten_on_open() {
        let persistence = Arc::new(FakePersistence {
            stored: Mutex::new(Some(vec![post("mine")])),
            unreadable: true,
            ..FakePersistence::default()
        });

        let store = PostStore::open(persistence.clone(), clock());

        assert_eq!(store.list()[0].id.as_str(), seed::SEED_POST_ID);
        assert_eq!(persistence.saves.load(Ordering::SeqCst), 0);
        let stored = persistence.stored.lock().unwrap().clone().unwrap();
        assert_eq!(stored[0].id.as_str(), "mine");
    }

    #[test]
    fn test_seed_is_written_on_first_mutation() {
        let persistence = Arc::new(FakePersistence::default());
        let mut store = PostStore::open(persistence.clone(), clock());
        assert_eq!(persistence.saves.load(Ordering::SeqCst), 0);

        store.create(NewPost::new("T", "C", "E", "A")).unwrap();

        let stored = persistence.stored.lock().unwrap().clone().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1].id.as_str(), seed::SEED_POST_ID);
    }

    #[test]
    fn test_failed_save_keeps_mutation_in_memory() {
        let persistence = Arc::new(FakePersistence {
            stored: Mutex::new(Some(Vec::new())),
            fail_saves: true,
            ..FakePersistence::default()
        });
        let mut store = PostStore::open(persistence, clock());

        let result = store.create(NewPost::new("T", "C", "E", "A"));

        assert!(matches!(result, Err(StoreError::Persistence(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_listeners_receive_snapshot_until_unsubscribed() {
        let persistence = Arc::new(FakePersistence::default());
        let mut store = PostStore::open(persistence, clock());
        let calls = Arc::new(AtomicUsize::new(0));
        let last_len = Arc::new(AtomicUsize::new(0));

        let subscription = {
            let calls = calls.clone();
            let last_len = last_len.clone();
            store.subscribe(move |posts| {
                calls.fetch_add(1, Ordering::SeqCst);
                last_len.store(posts.len(), Ordering::SeqCst);
            })
        };

        store.create(NewPost::new("T", "C", "E", "A")).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(last_len.load(Ordering::SeqCst), 2);

        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));

        store.create(NewPost::new("T", "C", "E", "A")).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_op_mutations_do_not_notify() {
        let persistence = Arc::new(FakePersistence::default());
        let mut store = PostStore::open(persistence, clock());
        let calls = Arc::new(AtomicUsize::new(0));
        {
            let calls = calls.clone();
            store.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        let missing = PostId::from("missing");
        assert_eq!(store.update(&missing, PostPatch::new().title("x")).unwrap(), None);
        assert_eq!(store.delete(&missing).unwrap(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
