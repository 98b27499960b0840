//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod persistence;
mod storage;

pub use clock::Clock;
pub use persistence::PostPersistence;
pub use storage::{KeyValueStore, StorageError};
