use serde::Serialize;

use crate::profile::Profile;

/// Which tier produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreSource {
    /// Tier-1 token-frequency cosine (per-candidate or pool-wide fallback).
    Lexical,
    /// Tier-2 weighted embedding cosine.
    Embedding,
    /// Tier-2 score blended with a Tier-3 deep-analysis score.
    DeepAnalysisMerged,
}

impl ScoreSource {
    /// Stable tag string, as used in API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreSource::Lexical => "lexical",
            ScoreSource::Embedding => "embedding",
            ScoreSource::DeepAnalysisMerged => "deep-analysis-merged",
        }
    }
}

/// Per-pair similarities for one (subject, candidate) comparison.
///
/// `None` means the pair could not be computed (either side missing, or
/// embedding lengths mismatched) and must be excluded from the weighted
/// average rather than counted as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PairSimilarities {
    pub skills_to_needs: Option<f32>,
    pub interests: Option<f32>,
    pub looking_for_to_skills: Option<f32>,
    pub needs_to_skills: Option<f32>,
}

impl PairSimilarities {
    /// Returns `true` if no pair could be computed.
    pub fn is_empty(&self) -> bool {
        self.skills_to_needs.is_none()
            && self.interests.is_none()
            && self.looking_for_to_skills.is_none()
            && self.needs_to_skills.is_none()
    }
}

/// Transient per-candidate score produced by Tier 1 or Tier 2.
///
/// Created during a single matching request and consumed by the merge step;
/// never persisted.
#[derive(Debug, Clone)]
pub struct CandidateScore {
    pub profile: Profile,
    /// Renormalized weighted score in [0, 1].
    pub score: f32,
    pub reasons: Vec<String>,
    pub source: ScoreSource,
    /// Set when Tier-2 embedding scoring produced the score.
    pub embedding_score: Option<f32>,
}
