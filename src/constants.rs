//! Shared defaults and thresholds.
//!
//! Runtime-tunable values (pair weights, blend weights, tier sizes) live in
//! [`crate::scoring::FieldPairWeights`] and [`crate::engine::MatchOptions`];
//! the constants here are their defaults plus the fixed reason thresholds.

/// Default timeout for a single embedding request, in seconds.
pub const DEFAULT_EMBED_TIMEOUT_SECS: u64 = 10;

/// Default timeout for a single deep-analysis request, in seconds.
pub const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 30;

/// Default number of Tier-2 survivors passed to the deep-analysis rerank.
pub const DEFAULT_RERANK_CANDIDATE_COUNT: usize = 10;

/// Default size of the final ranked result list.
pub const DEFAULT_RESULT_COUNT: usize = 3;

/// Deep-analysis calls per concurrently-processed batch.
pub const DEFAULT_ANALYSIS_BATCH_SIZE: usize = 3;

/// Max entries in the embedding cache.
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// A per-pair embedding similarity above this contributes a named reason.
pub const EMBEDDING_REASON_THRESHOLD: f32 = 0.3;

/// A per-pair lexical similarity above this contributes a named reason.
pub const LEXICAL_REASON_THRESHOLD: f32 = 0.2;

/// Below this total score the generic reason prompts profile completion.
pub const LOW_SCORE_THRESHOLD: f32 = 0.05;
