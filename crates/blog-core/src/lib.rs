//! # Blog Core
//!
//! The domain layer of Luxe Blog: the post collection, its persistence
//! contract, and the pure algorithms derived from it (filtering, related
//! posts ranking, content rendering).
//! This crate performs no I/O itself; storage and time come in through `ports`.

pub mod domain;
pub mod error;
pub mod filter;
pub mod persistence;
pub mod ports;
pub mod related;
pub mod render;
pub mod seed;
pub mod store;

pub use domain::{Category, NewPost, Post, PostDraft, PostId, PostPatch};
pub use error::{DomainError, PersistenceError, StoreError};
pub use filter::{CategoryFilter, PostFilter, filter_posts};
pub use persistence::{DEFAULT_STORAGE_KEY, KeyValuePersistence};
pub use related::{MAX_RELATED, RankedPost, related_posts, related_to, relevance_score};
pub use render::{Block, BlockKind, Blocks, Document, classify_line};
pub use store::{PostStore, SubscriptionId};
