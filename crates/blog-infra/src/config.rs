//! Storage configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use blog_core::DEFAULT_STORAGE_KEY;

/// Which key-value implementation backs the post store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory holding the slot files (file backend only).
    pub data_dir: PathBuf,
    /// Slot name the collection is persisted under.
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: PathBuf::from(".blog"),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// - `BLOG_STORAGE_BACKEND`: `file` (default) or `memory`
    /// - `BLOG_DATA_DIR`: slot directory, default `.blog`
    /// - `BLOG_STORAGE_KEY`: slot name, default `blog-storage`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let backend = match non_empty("BLOG_STORAGE_BACKEND").map(|v| v.to_lowercase()) {
            Some(v) if v == "memory" => StorageBackend::Memory,
            Some(v) if v == "file" => StorageBackend::File,
            Some(other) => {
                tracing::warn!(value = %other, "Unknown BLOG_STORAGE_BACKEND, using file");
                StorageBackend::File
            }
            None => defaults.backend,
        };

        Self {
            backend,
            data_dir: non_empty("BLOG_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            key: non_empty("BLOG_STORAGE_KEY").unwrap_or(defaults.key),
        }
    }
}
