//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! key-value slots (file-backed and in-memory) and the system clock.

pub mod clock;
pub mod config;
pub mod kv;

pub use clock::SystemClock;
pub use config::{StorageBackend, StorageConfig};
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore};
