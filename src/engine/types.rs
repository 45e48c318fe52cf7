use serde::Serialize;
use thiserror::Error;

use crate::profile::Profile;
use crate::scoring::{CandidateScore, ScoreSource};

/// One entry of the final ranked output.
///
/// The single tagged result shape for all three tiers: component scores are
/// explicit optional fields decided at merge time, never inferred from field
/// presence.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub profile: Profile,
    /// Final score in [0, 1].
    pub score: f32,
    pub reasons: Vec<String>,
    pub collaboration_suggestions: Vec<String>,
    pub potential_projects: Vec<String>,
    pub source: ScoreSource,
    /// Tier-2 weighted embedding score, when Tier 2 produced one.
    pub embedding_score: Option<f32>,
    /// Deep-analysis score, when Tier 3 succeeded for this candidate.
    pub deep_score: Option<f32>,
    /// `true` only when the deep-analysis call succeeded.
    pub deep_analysis_applied: bool,
}

impl MatchResult {
    /// A Tier-1/Tier-2 result carried into the merged ranking unchanged.
    pub(crate) fn from_tier2(candidate: CandidateScore) -> Self {
        Self {
            profile: candidate.profile,
            score: candidate.score,
            reasons: candidate.reasons,
            collaboration_suggestions: Vec::new(),
            potential_projects: Vec::new(),
            source: candidate.source,
            embedding_score: candidate.embedding_score,
            deep_score: None,
            deep_analysis_applied: false,
        }
    }
}

/// Tier-2 orchestration failure; triggers the pool-wide lexical fallback.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no usable subject embeddings (provider unreachable or all fields empty)")]
    SubjectEmbeddingsUnavailable,
}
