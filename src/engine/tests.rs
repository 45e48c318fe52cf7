use super::*;
use crate::analysis::{FALLBACK_REASON, MockAnalyst};
use crate::embedding::MockEmbedder;
use crate::profile::ProfileId;
use crate::scoring::ScoreSource;
use crate::store::{InMemoryProfileStore, ProfileStore};
use crate::writeback::spawn_writeback_worker;
use std::sync::Arc;
use uuid::Uuid;

fn profile(name: &str, skills: &str, interests: &str, needs: &str, looking_for: &str) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        institution: None,
        degree: None,
        major: None,
        skills: skills.to_string(),
        interests: interests.to_string(),
        needs: needs.to_string(),
        looking_for: looking_for.to_string(),
        embeddings: FieldEmbeddings::default(),
    }
}

/// Candidate whose needs-embedding has the given cosine against a subject
/// skills-embedding of [1, 0, 0].
fn candidate_with_cosine(name: &str, cosine: f32) -> Profile {
    let mut p = profile(name, "", "", "needs text", "");
    let angle = cosine.clamp(-1.0, 1.0).acos();
    p.embeddings.needs = Some(vec![angle.cos(), angle.sin(), 0.0]);
    p
}

fn subject_with_unit_skills() -> Profile {
    let mut subject = profile("Subject", "skills text", "", "", "");
    subject.embeddings = FieldEmbeddings {
        skills: Some(vec![1.0, 0.0, 0.0]),
        interests: Some(vec![0.0, 1.0, 0.0]),
        needs: Some(vec![0.0, 0.0, 1.0]),
        looking_for: Some(vec![1.0, 1.0, 0.0]),
    };
    subject
}

fn engine(options: MatchOptions) -> MatchEngine<MockEmbedder, MockAnalyst> {
    MatchEngine::new(MockEmbedder::with_dimension(3), MockAnalyst::new()).with_options(options)
}

#[tokio::test]
async fn test_empty_pool_yields_empty_ranking() {
    let subject = subject_with_unit_skills();
    let engine = engine(MatchOptions::default());
    assert!(engine.find_matches(&subject, &[]).await.is_empty());
}

#[tokio::test]
async fn test_subject_is_excluded_from_pool() {
    let subject = subject_with_unit_skills();
    let pool = vec![subject.clone()];
    let engine = engine(MatchOptions::default());
    assert!(engine.find_matches(&subject, &pool).await.is_empty());
}

#[tokio::test]
async fn test_ranking_is_descending_by_score() {
    let subject = subject_with_unit_skills();
    let pool = vec![
        candidate_with_cosine("low", 0.2),
        candidate_with_cosine("high", 0.9),
        candidate_with_cosine("mid", 0.5),
    ];
    let options = MatchOptions::default()
        .use_deep_analysis(false)
        .result_count(10);
    let results = engine(options).find_matches(&subject, &pool).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].profile.name, "high");
    assert_eq!(results[1].profile.name, "mid");
    assert_eq!(results[2].profile.name, "low");
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[tokio::test]
async fn test_result_count_truncates() {
    let subject = subject_with_unit_skills();
    let pool: Vec<Profile> = (0..6)
        .map(|i| candidate_with_cosine(&format!("c{i}"), 0.1 + 0.1 * i as f32))
        .collect();
    let options = MatchOptions::default()
        .use_deep_analysis(false)
        .result_count(3);
    let results = engine(options).find_matches(&subject, &pool).await;
    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn test_candidate_without_embeddings_falls_back_to_lexical() {
    let subject = subject_with_unit_skills();

    let embedded = candidate_with_cosine("embedded", 0.8);
    // Shares a token with the subject's skills text but has no embeddings.
    let lexical = profile("lexical", "", "", "skills text", "");

    let options = MatchOptions::default()
        .use_deep_analysis(false)
        .result_count(10);
    let results = engine(options)
        .find_matches(&subject, &[embedded, lexical])
        .await;

    assert_eq!(results.len(), 2);
    let embedded_result = results
        .iter()
        .find(|r| r.profile.name == "embedded")
        .unwrap();
    let lexical_result = results.iter().find(|r| r.profile.name == "lexical").unwrap();

    assert_eq!(embedded_result.source, ScoreSource::Embedding);
    assert!(embedded_result.embedding_score.is_some());
    assert_eq!(lexical_result.source, ScoreSource::Lexical);
    assert_eq!(lexical_result.embedding_score, None);
    assert!(lexical_result.score > 0.0, "shared tokens should score");
}

#[tokio::test]
async fn test_use_embedding_false_forces_lexical_pool() {
    let subject = subject_with_unit_skills();
    let pool = vec![candidate_with_cosine("embedded", 0.9)];
    let options = MatchOptions::default()
        .use_embedding(false)
        .use_deep_analysis(false)
        .result_count(10);
    let results = engine(options).find_matches(&subject, &pool).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].source, ScoreSource::Lexical);
}

#[tokio::test]
async fn test_deep_analysis_blends_scores() {
    let subject = subject_with_unit_skills();
    let pool = vec![candidate_with_cosine("c", 0.5)];

    let analyst = MockAnalyst::new().with_score(1.0);
    let embedder = MockEmbedder::with_dimension(3);
    let options = MatchOptions::default().result_count(10);
    let engine = MatchEngine::new(embedder, analyst).with_options(options);

    let results = engine.find_matches(&subject, &pool).await;
    assert_eq!(results.len(), 1);
    let result = &results[0];

    assert!(result.deep_analysis_applied);
    assert_eq!(result.source, ScoreSource::DeepAnalysisMerged);
    let tier2 = result.embedding_score.unwrap();
    let expected = 0.4 * tier2 + 0.6 * 1.0;
    assert!((result.score - expected).abs() < 1e-6);
    assert_eq!(result.deep_score, Some(1.0));
    assert!(!result.collaboration_suggestions.is_empty());
}

#[tokio::test]
async fn test_degrade_law_failing_analyst_matches_tier2_ranking() {
    // If deep analysis always fails, the merged ranking must be identical
    // (score and order) to the tier-2-only ranking.
    let subject = subject_with_unit_skills();
    let pool: Vec<Profile> = (0..8)
        .map(|i| candidate_with_cosine(&format!("c{i}"), 0.1 + 0.1 * i as f32))
        .collect();

    let failing = MockAnalyst::new();
    failing.set_failing(true);
    let with_failing_tier3 = MatchEngine::new(MockEmbedder::with_dimension(3), failing)
        .with_options(MatchOptions::default().result_count(8));
    let degraded = with_failing_tier3.find_matches(&subject, &pool).await;

    let tier2_only = engine(
        MatchOptions::default()
            .use_deep_analysis(false)
            .result_count(8),
    )
    .find_matches(&subject, &pool)
    .await;

    assert_eq!(degraded.len(), tier2_only.len());
    for (d, t) in degraded.iter().zip(tier2_only.iter()) {
        assert_eq!(d.profile.id, t.profile.id);
        assert!((d.score - t.score).abs() < 1e-6);
        assert!(!d.deep_analysis_applied);
        assert_eq!(d.reasons, vec![FALLBACK_REASON.to_string()]);
    }
}

#[tokio::test]
async fn test_partial_analyst_failure_degrades_only_failed_candidates() {
    let subject = subject_with_unit_skills();
    let good = candidate_with_cosine("good", 0.9);
    let bad = candidate_with_cosine("bad", 0.8);
    let bad_id = bad.id;

    let analyst = MockAnalyst::new().with_score(0.95).failing_for([bad_id]);
    let engine = MatchEngine::new(MockEmbedder::with_dimension(3), analyst)
        .with_options(MatchOptions::default().result_count(10));

    let results = engine.find_matches(&subject, &[good, bad]).await;
    assert_eq!(results.len(), 2);

    let good_result = results.iter().find(|r| r.profile.name == "good").unwrap();
    let bad_result = results.iter().find(|r| r.profile.id == bad_id).unwrap();

    assert!(good_result.deep_analysis_applied);
    assert!(!bad_result.deep_analysis_applied);
    assert!((bad_result.score - bad_result.embedding_score.unwrap()).abs() < 1e-6);
}

#[tokio::test]
async fn test_rerank_slice_limits_analyst_calls() {
    let subject = subject_with_unit_skills();
    let pool: Vec<Profile> = (0..7)
        .map(|i| candidate_with_cosine(&format!("c{i}"), 0.1 + 0.1 * i as f32))
        .collect();

    let analyst = MockAnalyst::new();
    let calls = analyst.clone();
    let engine = MatchEngine::new(MockEmbedder::with_dimension(3), analyst).with_options(
        MatchOptions::default()
            .rerank_candidate_count(4)
            .result_count(7),
    );

    let results = engine.find_matches(&subject, &pool).await;
    assert_eq!(results.len(), 7);
    assert_eq!(calls.call_count(), 4, "only the top slice is analyzed");
    assert_eq!(
        results
            .iter()
            .filter(|r| r.source == ScoreSource::DeepAnalysisMerged)
            .count(),
        4
    );
}

#[tokio::test]
async fn test_merge_completeness_no_duplicates() {
    let subject = subject_with_unit_skills();
    let pool: Vec<Profile> = (0..12)
        .map(|i| candidate_with_cosine(&format!("c{i}"), 0.05 * i as f32))
        .collect();

    let engine = engine(
        MatchOptions::default()
            .rerank_candidate_count(5)
            .result_count(12),
    );
    let results = engine.find_matches(&subject, &pool).await;

    assert_eq!(results.len(), 12);
    let mut ids: Vec<ProfileId> = results.iter().map(|r| r.profile.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 12, "every candidate appears exactly once");
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[tokio::test]
async fn test_subject_missing_embeddings_generated_and_persisted() {
    let store = Arc::new(InMemoryProfileStore::new());
    let subject = profile("Subject", "rust backend", "databases", "ui design", "frontend dev");
    let subject_id = subject.id;
    store.insert(subject.clone()).unwrap();

    let candidate = candidate_with_cosine("c", 0.5);
    let (handle, worker) = spawn_writeback_worker(store.clone());

    let embedder = MockEmbedder::with_dimension(3);
    let engine = MatchEngine::new(embedder.clone(), MockAnalyst::new())
        .with_options(MatchOptions::default().use_deep_analysis(false))
        .with_writeback(handle);

    let results = engine.find_matches(&subject, &[candidate]).await;
    assert_eq!(results.len(), 1);
    assert_eq!(embedder.call_count(), 4, "all four fields embedded");

    // Writeback lands asynchronously.
    drop(engine);
    worker.await.unwrap();
    let persisted = store.get(subject_id).unwrap();
    assert!(persisted.embeddings.is_complete());
}

#[tokio::test]
async fn test_provider_down_degrades_to_lexical_only() {
    // Subject has no stored embeddings and the provider is unreachable:
    // the whole request falls back to a lexical ranking with no truncation.
    let subject = profile("Subject", "rust systems", "", "", "");
    let pool = vec![
        profile("match", "", "", "rust systems", ""),
        profile("other", "", "", "gardening", ""),
        candidate_with_cosine("embedded", 0.99),
    ];

    let embedder = MockEmbedder::with_dimension(3);
    embedder.set_failing(true);
    let engine = MatchEngine::new(embedder, MockAnalyst::new())
        .with_options(MatchOptions::default().result_count(1));

    let results = engine.find_matches(&subject, &pool).await;
    assert_eq!(results.len(), 3, "fallback ranks the whole pool");
    assert!(results.iter().all(|r| r.source == ScoreSource::Lexical));
    assert_eq!(results[0].profile.name, "match");
}

#[tokio::test]
async fn test_stable_order_for_tied_scores() {
    let subject = subject_with_unit_skills();
    // Identical embeddings give identical scores; pool order must hold.
    let first = candidate_with_cosine("first", 0.5);
    let second = candidate_with_cosine("second", 0.5);

    let options = MatchOptions::default()
        .use_deep_analysis(false)
        .result_count(10);
    let results = engine(options).find_matches(&subject, &[first, second]).await;

    assert_eq!(results[0].profile.name, "first");
    assert_eq!(results[1].profile.name, "second");
}

#[tokio::test]
async fn test_batching_processes_all_candidates() {
    let subject = subject_with_unit_skills();
    let pool: Vec<Profile> = (0..10)
        .map(|i| candidate_with_cosine(&format!("c{i}"), 0.05 + 0.09 * i as f32))
        .collect();

    let analyst = MockAnalyst::new();
    let calls = analyst.clone();
    let engine = MatchEngine::new(MockEmbedder::with_dimension(3), analyst).with_options(
        MatchOptions::default()
            .rerank_candidate_count(10)
            .result_count(10),
    );

    let results = engine.find_matches(&subject, &pool).await;
    assert_eq!(results.len(), 10);
    assert_eq!(calls.call_count(), 10, "batches of 3 cover the whole slice");
}
