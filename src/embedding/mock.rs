use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::client::Embedder;

/// Default dimension of mock embeddings.
pub const MOCK_EMBEDDING_DIM: usize = 32;

/// Deterministic text-keyed pseudo-embedding.
///
/// Identical text always yields the identical vector, so cosine similarity
/// of two equal texts is exactly 1.0. Values land in [0, 1) like real
/// embedding models in this domain.
pub fn deterministic_embedding(text: &str, dimension: usize) -> Vec<f32> {
    use std::hash::{DefaultHasher, Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    let mut state = hasher.finish() | 1;

    (0..dimension)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as f32) / ((1u64 << 31) as f32)
        })
        .collect()
}

/// In-memory [`Embedder`] with deterministic vectors and scriptable failure.
#[derive(Clone)]
pub struct MockEmbedder {
    dimension: usize,
    failing: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self {
            dimension: MOCK_EMBEDDING_DIM,
            failing: Arc::new(AtomicBool::new(false)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            ..Self::new()
        }
    }

    /// Makes every subsequent call return absent (provider unreachable).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    /// Number of non-empty embed calls observed.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// The vector this mock produces for `text`.
    pub fn embedding_for(&self, text: &str) -> Vec<f32> {
        deterministic_embedding(text.trim(), self.dimension)
    }
}

impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> Option<Vec<f32>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.calls.fetch_add(1, Ordering::Relaxed);

        if self.failing.load(Ordering::Relaxed) {
            return None;
        }

        Some(deterministic_embedding(trimmed, self.dimension))
    }
}
