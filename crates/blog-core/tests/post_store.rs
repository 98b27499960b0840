//! Store behaviour through the public API, backed by an in-memory slot.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use blog_core::ports::{Clock, KeyValueStore, StorageError};
use blog_core::seed::{SEED_POST_ID, seed_post};
use blog_core::{
    Category, CategoryFilter, DEFAULT_STORAGE_KEY, Document, KeyValuePersistence, NewPost,
    PostDraft, PostId, PostPatch, PostStore, filter_posts, related_to,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

#[derive(Default)]
struct MemorySlot {
    slots: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Clock that advances one second on every read.
struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap()),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut now = self.now.lock().unwrap();
        let current = *now;
        *now = current + Duration::seconds(1);
        current
    }
}

fn open(slot: &Arc<MemorySlot>) -> PostStore {
    let persistence = Arc::new(KeyValuePersistence::with_default_key(slot.clone()));
    PostStore::open(persistence, Arc::new(SteppingClock::new()))
}

fn fields(title: &str) -> NewPost {
    NewPost::new(title, "content", "excerpt", "author")
}

#[test]
fn test_empty_slot_starts_with_seed_post() {
    let slot = Arc::new(MemorySlot::default());
    let store = open(&slot);

    assert_eq!(store.len(), 1);
    let seed = &store.list()[0];
    assert_eq!(seed.id.as_str(), SEED_POST_ID);
    assert_eq!(seed.views, Some(128));
    assert_eq!(seed.category, Some(Category::Technology));
    assert_eq!(seed, &seed_post(seed.date));
}

#[test]
fn test_corrupt_slot_falls_back_to_seed() {
    let slot = Arc::new(MemorySlot::default());
    slot.set(DEFAULT_STORAGE_KEY, r#"{"posts": [{"id": 3}]}"#)
        .unwrap();

    let store = open(&slot);

    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].id.as_str(), SEED_POST_ID);
}

#[test]
fn test_created_ids_are_unique() {
    let slot = Arc::new(MemorySlot::default());
    let mut store = open(&slot);

    let ids: HashSet<PostId> = (0..200)
        .map(|i| store.create(fields(&format!("post {i}"))).unwrap().id)
        .collect();

    assert_eq!(ids.len(), 200);
    assert_eq!(store.len(), 201);
}

#[test]
fn test_newest_post_comes_first() {
    let slot = Arc::new(MemorySlot::default());
    let mut store = open(&slot);

    let a = store.create(fields("A")).unwrap();
    let b = store.create(fields("B")).unwrap();

    let titles: Vec<&str> = store.list().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "A", "Welcome to Luxe Blog"]);
    assert!(b.date > a.date);
}

#[test]
fn test_update_keeps_id_and_date() {
    let slot = Arc::new(MemorySlot::default());
    let mut store = open(&slot);
    let created = store.create(fields("Draft")).unwrap();

    let updated = store
        .update(&created.id, PostPatch::new().title("T"))
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "T");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.date, created.date);
    assert_eq!(updated.content, created.content);
    assert_eq!(store.get(&created.id), Some(&updated));
}

#[test]
fn test_update_from_edited_draft() {
    let slot = Arc::new(MemorySlot::default());
    let mut store = open(&slot);
    let id = PostId::from(SEED_POST_ID);
    let original = store.get(&id).cloned().unwrap();

    let mut draft = PostDraft::from_post(&original);
    draft.tags = "rust, , news".to_string();
    draft.category = String::new();
    store.update(&id, draft.into_patch().unwrap()).unwrap();

    let edited = store.get(&id).unwrap();
    assert_eq!(edited.tags, vec!["rust", "news"]);
    assert_eq!(edited.category, None);
    assert_eq!(edited.views, original.views);
    assert_eq!(edited.date, original.date);
}

#[test]
fn test_unknown_ids_are_no_ops() {
    let slot = Arc::new(MemorySlot::default());
    let mut store = open(&slot);
    let before = store.list().to_vec();
    let missing = PostId::from("missing");

    assert!(store.get(&missing).is_none());
    assert!(store.update(&missing, PostPatch::new().title("x")).unwrap().is_none());
    assert!(store.delete(&missing).unwrap().is_none());
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn test_delete_is_idempotent_and_keeps_order() {
    let slot = Arc::new(MemorySlot::default());
    let mut store = open(&slot);
    let a = store.create(fields("A")).unwrap();
    let b = store.create(fields("B")).unwrap();
    store.create(fields("C")).unwrap();

    assert_eq!(store.delete(&b.id).unwrap().map(|p| p.id), Some(b.id.clone()));
    let after_first = store.list().to_vec();
    assert!(store.delete(&b.id).unwrap().is_none());

    assert_eq!(store.list(), after_first.as_slice());
    let titles: Vec<&str> = store.list().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["C", "A", "Welcome to Luxe Blog"]);
    assert!(store.get(&a.id).is_some());
}

#[test]
fn test_mutations_survive_restart() {
    let slot = Arc::new(MemorySlot::default());
    let created = {
        let mut store = open(&slot);
        let created = store
            .create(fields("Persisted").with_tags(["x"]).with_category(Category::Life))
            .unwrap();
        store.delete(&PostId::from(SEED_POST_ID)).unwrap();
        created
    };

    let reopened = open(&slot);

    assert_eq!(reopened.list(), &[created][..]);
}

#[test]
fn test_deleting_everything_persists_empty_collection() {
    let slot = Arc::new(MemorySlot::default());
    {
        let mut store = open(&slot);
        store.delete(&PostId::from(SEED_POST_ID)).unwrap();
        assert!(store.is_empty());
    }

    assert!(open(&slot).is_empty());
}

#[test]
fn test_views_over_a_snapshot() {
    let slot = Arc::new(MemorySlot::default());
    let mut store = open(&slot);
    store
        .create(
            fields("Go Basics")
                .with_tags(["go"])
                .with_category(Category::Technology),
        )
        .unwrap();
    store
        .create(
            fields("Trip Log")
                .with_tags(["travel"])
                .with_category(Category::Travel),
        )
        .unwrap();

    let snapshot = store.list();
    let found = filter_posts(snapshot, "go", CategoryFilter::All);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Go Basics");

    let related = related_to(snapshot, found[0]);
    let related_titles: Vec<&str> = related.iter().map(|r| r.post.title.as_str()).collect();
    assert_eq!(related_titles, vec!["Welcome to Luxe Blog", "Trip Log"]);

    let seed = &snapshot[2];
    let blocks = Document::new(&seed.content).blocks().count();
    assert_eq!(blocks, seed.content.split('\n').count());
}
