use serde::Deserialize;

/// Reason attached when deep analysis degrades to the prior-stage score.
pub const FALLBACK_REASON: &str = "Preliminary match based on semantic similarity";

/// Structured judgment for one (subject, candidate) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DeepAnalysis {
    /// Relevance score in [0, 1].
    pub score: f32,
    pub reasons: Vec<String>,
    pub collaboration_suggestions: Vec<String>,
    pub potential_projects: Vec<String>,
}

impl DeepAnalysis {
    /// Fallback judgment carrying the prior-stage score.
    ///
    /// Tier 3 can only add information relative to Tier 2 or be a no-op;
    /// this is the no-op.
    pub fn degraded(prior_score: f32) -> Self {
        Self {
            score: prior_score,
            reasons: vec![FALLBACK_REASON.to_string()],
            collaboration_suggestions: Vec::new(),
            potential_projects: Vec::new(),
        }
    }
}

/// Wire shape of the model's JSON reply. Every field is optional; a missing
/// score falls back to the prior-stage score at conversion time.
#[derive(Debug, Deserialize)]
pub(crate) struct RawAnalysis {
    pub match_score: Option<f32>,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub collaboration_suggestions: Vec<String>,
    #[serde(default)]
    pub potential_projects: Vec<String>,
}

impl RawAnalysis {
    pub(crate) fn into_analysis(self, prior_score: f32) -> DeepAnalysis {
        DeepAnalysis {
            score: self.match_score.unwrap_or(prior_score).clamp(0.0, 1.0),
            reasons: self.reasons,
            collaboration_suggestions: self.collaboration_suggestions,
            potential_projects: self.potential_projects,
        }
    }
}
