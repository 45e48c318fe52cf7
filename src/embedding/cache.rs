//! Process-lifetime embedding cache.

use moka::sync::Cache;
use std::sync::Arc;

use crate::constants::DEFAULT_CACHE_CAPACITY;

/// Concurrent cache of embeddings keyed by trimmed input text.
///
/// Inserts are append-only per distinct key: concurrent writers for the same
/// text converge to identical values, so last-writer-wins races are benign.
/// Cloning is cheap and shares the underlying store.
#[derive(Clone)]
pub struct EmbeddingCache {
    entries: Cache<String, Arc<Vec<f32>>>,
}

impl EmbeddingCache {
    /// Creates a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a cache with a max entry capacity (LRU eviction).
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Looks up the embedding for already-trimmed text.
    pub fn get(&self, text: &str) -> Option<Arc<Vec<f32>>> {
        self.entries.get(text)
    }

    /// Stores the embedding for already-trimmed text.
    pub fn insert(&self, text: &str, embedding: Arc<Vec<f32>>) {
        self.entries.insert(text.to_string(), embedding);
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    /// Returns `true` if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all entries.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}

impl Default for EmbeddingCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EmbeddingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}
