use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::profile::{Profile, ProfileId};

use super::client::Analyst;
use super::error::AnalysisError;
use super::types::DeepAnalysis;

/// Scriptable in-memory [`Analyst`].
#[derive(Clone, Default)]
pub struct MockAnalyst {
    /// Fixed score to return; `None` echoes the prior score.
    score: Option<f32>,
    fail_ids: HashSet<ProfileId>,
    fail_all: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

impl MockAnalyst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this fixed score for every successful call.
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }

    /// Fails every call for the given candidate ids.
    pub fn failing_for(mut self, ids: impl IntoIterator<Item = ProfileId>) -> Self {
        self.fail_ids.extend(ids);
        self
    }

    /// Makes every subsequent call fail (provider unreachable).
    pub fn set_failing(&self, failing: bool) {
        self.fail_all.store(failing, Ordering::Relaxed);
    }

    /// Number of analyze calls observed.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Analyst for MockAnalyst {
    async fn analyze(
        &self,
        _subject: &Profile,
        candidate: &Profile,
        prior_score: f32,
    ) -> Result<DeepAnalysis, AnalysisError> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        if self.fail_all.load(Ordering::Relaxed) || self.fail_ids.contains(&candidate.id) {
            return Err(AnalysisError::MalformedResponse {
                reason: "mock analyst failure".to_string(),
            });
        }

        Ok(DeepAnalysis {
            score: self.score.unwrap_or(prior_score).clamp(0.0, 1.0),
            reasons: vec![format!("Mock analysis of {}", candidate.name)],
            collaboration_suggestions: vec!["Pair on a prototype".to_string()],
            potential_projects: vec!["Joint pilot study".to_string()],
        })
    }
}
