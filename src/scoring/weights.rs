//! Scoring weights.
//!
//! The defaults are empirically chosen; both sets are configuration, not
//! invariants, and can be overridden through
//! [`MatchOptions`](crate::engine::MatchOptions).

/// Default weight of the subject.skills ↔ candidate.needs pair.
pub const DEFAULT_SKILLS_TO_NEEDS_WEIGHT: f32 = 0.4;
/// Default weight of the interests ↔ interests pair.
pub const DEFAULT_INTERESTS_WEIGHT: f32 = 0.3;
/// Default weight of the subject.looking_for ↔ candidate.skills pair.
pub const DEFAULT_LOOKING_FOR_TO_SKILLS_WEIGHT: f32 = 0.2;
/// Default weight of the subject.needs ↔ candidate.skills pair.
pub const DEFAULT_NEEDS_TO_SKILLS_WEIGHT: f32 = 0.1;

/// Per-pair weights for the Tier-1/Tier-2 multi-field score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPairWeights {
    /// subject.skills ↔ candidate.needs — what the subject can offer.
    pub skills_to_needs: f32,
    /// interests ↔ interests — shared ground.
    pub interests: f32,
    /// subject.looking_for ↔ candidate.skills — what the subject wants.
    pub looking_for_to_skills: f32,
    /// subject.needs ↔ candidate.skills — what the candidate can offer.
    pub needs_to_skills: f32,
}

impl Default for FieldPairWeights {
    fn default() -> Self {
        Self {
            skills_to_needs: DEFAULT_SKILLS_TO_NEEDS_WEIGHT,
            interests: DEFAULT_INTERESTS_WEIGHT,
            looking_for_to_skills: DEFAULT_LOOKING_FOR_TO_SKILLS_WEIGHT,
            needs_to_skills: DEFAULT_NEEDS_TO_SKILLS_WEIGHT,
        }
    }
}

/// Blend of Tier-2 and Tier-3 scores for reranked candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    /// Weight of the Tier-2 (prior) score.
    pub embedding: f32,
    /// Weight of the deep-analysis score.
    pub deep: f32,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            embedding: 0.4,
            deep: 0.6,
        }
    }
}

impl BlendWeights {
    /// Final score of a successfully reranked candidate.
    pub fn combine(&self, embedding_score: f32, deep_score: f32) -> f32 {
        self.embedding * embedding_score + self.deep * deep_score
    }
}
