use crate::constants::{
    DEFAULT_ANALYSIS_BATCH_SIZE, DEFAULT_RERANK_CANDIDATE_COUNT, DEFAULT_RESULT_COUNT,
};
use crate::scoring::{BlendWeights, FieldPairWeights};

/// Tunable surface of one matching run.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOptions {
    /// Run Tier 2; when `false`, the whole pool is scored lexically (Tier 1).
    pub use_embedding: bool,
    /// Run Tier 3 over the top candidates.
    pub use_deep_analysis: bool,
    /// How many Tier-2 survivors are reranked by deep analysis.
    pub rerank_candidate_count: usize,
    /// Final truncation size of the merged ranking.
    pub result_count: usize,
    /// Deep-analysis calls issued concurrently per batch.
    pub batch_size: usize,
    pub pair_weights: FieldPairWeights,
    pub blend: BlendWeights,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            use_embedding: true,
            use_deep_analysis: true,
            rerank_candidate_count: DEFAULT_RERANK_CANDIDATE_COUNT,
            result_count: DEFAULT_RESULT_COUNT,
            batch_size: DEFAULT_ANALYSIS_BATCH_SIZE,
            pair_weights: FieldPairWeights::default(),
            blend: BlendWeights::default(),
        }
    }
}

impl MatchOptions {
    pub fn use_embedding(mut self, enabled: bool) -> Self {
        self.use_embedding = enabled;
        self
    }

    pub fn use_deep_analysis(mut self, enabled: bool) -> Self {
        self.use_deep_analysis = enabled;
        self
    }

    pub fn rerank_candidate_count(mut self, count: usize) -> Self {
        self.rerank_candidate_count = count;
        self
    }

    pub fn result_count(mut self, count: usize) -> Self {
        self.result_count = count;
        self
    }
}
