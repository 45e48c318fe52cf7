//! Tier orchestration and merge/degrade control.
//!
//! A matching request flows through up to three tiers:
//!
//! 1. **Tier 2** scores every candidate by weighted embedding similarity,
//!    falling back to lexical scoring per candidate when one has no usable
//!    embeddings (Tier 1).
//! 2. **Tier 3** reranks the top survivors through the deep-analysis
//!    provider in sequential batches of concurrent calls, blending each
//!    candidate's prior score with the analysis score.
//! 3. **Merge** unions reranked and remaining Tier-2 results, sorts by score
//!    descending (ties keep pool order) and truncates.
//!
//! [`MatchEngine::find_matches`] is infallible: a provider failure for one
//! candidate degrades that candidate, and a Tier-2-wide failure degrades the
//! whole request to a lexical-only ranking of the pool.

pub mod options;
pub mod types;

#[cfg(test)]
mod tests;

pub use options::MatchOptions;
pub use types::{EngineError, MatchResult};

use std::cmp::Ordering;

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::analysis::{Analyst, DeepAnalysis};
use crate::constants::{EMBEDDING_REASON_THRESHOLD, LEXICAL_REASON_THRESHOLD};
use crate::embedding::Embedder;
use crate::profile::{FieldEmbeddings, Profile};
use crate::scoring::{
    CandidateScore, ScoreSource, embedding_pair_similarities, lexical_pair_similarities,
    match_reasons, weighted_score,
};
use crate::writeback::WritebackHandle;

/// Hybrid retrieval-and-rerank matching engine.
///
/// Generic over its two providers; both are injected so tests can script
/// them and callers can share clients across engines.
pub struct MatchEngine<E, A> {
    embedder: E,
    analyst: A,
    options: MatchOptions,
    writeback: Option<WritebackHandle>,
}

impl<E, A> std::fmt::Debug for MatchEngine<E, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("options", &self.options)
            .field("writeback", &self.writeback.is_some())
            .finish()
    }
}

impl<E, A> MatchEngine<E, A>
where
    E: Embedder,
    A: Analyst,
{
    pub fn new(embedder: E, analyst: A) -> Self {
        Self {
            embedder,
            analyst,
            options: MatchOptions::default(),
            writeback: None,
        }
    }

    /// Replaces the default options.
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Attaches a fire-and-forget sink for newly generated subject
    /// embeddings.
    pub fn with_writeback(mut self, handle: WritebackHandle) -> Self {
        self.writeback = Some(handle);
        self
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Ranks `pool` against `subject` using the engine's options.
    pub async fn find_matches(&self, subject: &Profile, pool: &[Profile]) -> Vec<MatchResult> {
        self.find_matches_with(subject, pool, &self.options).await
    }

    /// Ranks `pool` against `subject` with per-request options.
    ///
    /// Always returns a ranked list; every failure mode degrades quality,
    /// never availability.
    pub async fn find_matches_with(
        &self,
        subject: &Profile,
        pool: &[Profile],
        options: &MatchOptions,
    ) -> Vec<MatchResult> {
        let candidates: Vec<&Profile> =
            pool.iter().filter(|c| c.id != subject.id).collect();

        info!(
            subject = %subject.name,
            pool_size = candidates.len(),
            use_embedding = options.use_embedding,
            use_deep_analysis = options.use_deep_analysis,
            "matching request started"
        );

        if candidates.is_empty() {
            return Vec::new();
        }

        let ranked = match self.retrieval_phase(subject, &candidates, options).await {
            Ok(ranked) => ranked,
            Err(error) => {
                warn!(%error, "tier 2 unavailable, degrading to lexical-only ranking");
                return self.lexical_only_ranking(subject, &candidates, options);
            }
        };

        if !options.use_deep_analysis {
            let mut results: Vec<MatchResult> =
                ranked.into_iter().map(MatchResult::from_tier2).collect();
            results.truncate(options.result_count);
            return results;
        }

        let mut ranked = ranked;
        let rerank_count = options.rerank_candidate_count.min(ranked.len());
        let rest = ranked.split_off(rerank_count);
        debug!(
            reranked = ranked.len(),
            passthrough = rest.len(),
            "tier 3 slice selected"
        );

        let reranked = self.rerank_phase(subject, ranked, options).await;
        merge_results(reranked, rest, options)
    }

    /// Tier 2: weighted embedding scoring with per-candidate lexical
    /// fallback, sorted descending.
    async fn retrieval_phase(
        &self,
        subject: &Profile,
        candidates: &[&Profile],
        options: &MatchOptions,
    ) -> Result<Vec<CandidateScore>, EngineError> {
        if !options.use_embedding {
            debug!("tier 2 disabled, scoring pool lexically");
            return Ok(sort_descending(
                candidates
                    .iter()
                    .map(|candidate| self.lexical_candidate_score(subject, candidate, options))
                    .collect(),
            ));
        }

        let subject_embeddings = self.ensure_subject_embeddings(subject).await?;

        let scored = candidates
            .iter()
            .map(|candidate| {
                if candidate.embeddings.has_any() {
                    let sims =
                        embedding_pair_similarities(&subject_embeddings, &candidate.embeddings);
                    let score = weighted_score(&sims, &options.pair_weights);
                    let reasons = match_reasons(&sims, score, EMBEDDING_REASON_THRESHOLD);
                    CandidateScore {
                        profile: (*candidate).clone(),
                        score,
                        reasons,
                        source: ScoreSource::Embedding,
                        embedding_score: Some(score),
                    }
                } else {
                    // Tier-1 fallback for this candidate only.
                    self.lexical_candidate_score(subject, candidate, options)
                }
            })
            .collect();

        Ok(sort_descending(scored))
    }

    /// Ensures the subject has field embeddings, generating missing ones.
    ///
    /// Newly generated embeddings are handed to the writeback sink; the
    /// engine itself never writes to the profile store.
    async fn ensure_subject_embeddings(
        &self,
        subject: &Profile,
    ) -> Result<FieldEmbeddings, EngineError> {
        let existing = &subject.embeddings;
        if existing.is_complete() {
            return Ok(existing.clone());
        }

        debug!(subject = %subject.name, "generating missing subject embeddings");

        let (skills, interests, needs, looking_for) = tokio::join!(
            fill_field(&self.embedder, &existing.skills, &subject.skills),
            fill_field(&self.embedder, &existing.interests, &subject.interests),
            fill_field(&self.embedder, &existing.needs, &subject.needs),
            fill_field(&self.embedder, &existing.looking_for, &subject.looking_for),
        );

        let generated = skills.1 || interests.1 || needs.1 || looking_for.1;
        let embeddings = FieldEmbeddings {
            skills: skills.0,
            interests: interests.0,
            needs: needs.0,
            looking_for: looking_for.0,
        };

        if !embeddings.has_any() {
            return Err(EngineError::SubjectEmbeddingsUnavailable);
        }

        if generated {
            if let Some(handle) = &self.writeback {
                handle.persist(subject.id, embeddings.clone());
            }
        }

        Ok(embeddings)
    }

    /// Tier 3: sequential batches of concurrent deep-analysis calls.
    ///
    /// Results are paired with their originating candidate by position, so
    /// completion order within a batch is irrelevant. A failed call degrades
    /// that candidate to its Tier-2 score.
    async fn rerank_phase(
        &self,
        subject: &Profile,
        top: Vec<CandidateScore>,
        options: &MatchOptions,
    ) -> Vec<MatchResult> {
        let batch_size = options.batch_size.max(1);
        let mut results = Vec::with_capacity(top.len());

        for batch in top.chunks(batch_size) {
            let outcomes = join_all(batch.iter().map(|candidate| {
                self.analyst
                    .analyze(subject, &candidate.profile, candidate.score)
            }))
            .await;

            for (candidate, outcome) in batch.iter().zip(outcomes) {
                results.push(match outcome {
                    Ok(analysis) => merged_result(candidate, analysis, options),
                    Err(error) => {
                        warn!(
                            candidate = %candidate.profile.name,
                            %error,
                            "deep analysis failed, keeping tier-2 score"
                        );
                        degraded_result(candidate)
                    }
                });
            }
        }

        results
    }

    fn lexical_candidate_score(
        &self,
        subject: &Profile,
        candidate: &Profile,
        options: &MatchOptions,
    ) -> CandidateScore {
        let sims = lexical_pair_similarities(subject, candidate);
        let score = weighted_score(&sims, &options.pair_weights);
        let reasons = match_reasons(&sims, score, LEXICAL_REASON_THRESHOLD);
        CandidateScore {
            profile: candidate.clone(),
            score,
            reasons,
            source: ScoreSource::Lexical,
            embedding_score: None,
        }
    }

    /// Outermost safety net: lexical ranking of the entire pool, no cutoff
    /// and no truncation.
    fn lexical_only_ranking(
        &self,
        subject: &Profile,
        candidates: &[&Profile],
        options: &MatchOptions,
    ) -> Vec<MatchResult> {
        sort_descending(
            candidates
                .iter()
                .map(|candidate| self.lexical_candidate_score(subject, candidate, options))
                .collect(),
        )
        .into_iter()
        .map(MatchResult::from_tier2)
        .collect()
    }
}

/// Stable descending sort; candidates with equal scores keep pool order.
fn sort_descending(mut scored: Vec<CandidateScore>) -> Vec<CandidateScore> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

fn merged_result(
    candidate: &CandidateScore,
    analysis: DeepAnalysis,
    options: &MatchOptions,
) -> MatchResult {
    let score = options.blend.combine(candidate.score, analysis.score);
    debug!(
        candidate = %candidate.profile.name,
        tier2_score = candidate.score,
        deep_score = analysis.score,
        final_score = score,
        "deep analysis merged"
    );

    MatchResult {
        profile: candidate.profile.clone(),
        score,
        reasons: analysis.reasons,
        collaboration_suggestions: analysis.collaboration_suggestions,
        potential_projects: analysis.potential_projects,
        source: ScoreSource::DeepAnalysisMerged,
        embedding_score: candidate.embedding_score,
        deep_score: Some(analysis.score),
        deep_analysis_applied: true,
    }
}

fn degraded_result(candidate: &CandidateScore) -> MatchResult {
    let fallback = DeepAnalysis::degraded(candidate.score);
    MatchResult {
        profile: candidate.profile.clone(),
        score: candidate.score,
        reasons: fallback.reasons,
        collaboration_suggestions: fallback.collaboration_suggestions,
        potential_projects: fallback.potential_projects,
        source: candidate.source,
        embedding_score: candidate.embedding_score,
        deep_score: None,
        deep_analysis_applied: false,
    }
}

/// Unions reranked and passthrough results, sorts and truncates.
///
/// Every Tier-2 candidate appears exactly once: either with its blended
/// Tier-3 score or with its Tier-2 score unchanged.
fn merge_results(
    reranked: Vec<MatchResult>,
    rest: Vec<CandidateScore>,
    options: &MatchOptions,
) -> Vec<MatchResult> {
    let mut merged = reranked;
    merged.extend(rest.into_iter().map(MatchResult::from_tier2));
    merged.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    merged.truncate(options.result_count);
    merged
}

async fn fill_field<E: Embedder>(
    embedder: &E,
    existing: &Option<Vec<f32>>,
    text: &str,
) -> (Option<Vec<f32>>, bool) {
    match existing {
        Some(embedding) => (Some(embedding.clone()), false),
        None => match embedder.embed(text).await {
            Some(embedding) => (Some(embedding), true),
            None => (None, false),
        },
    }
}
