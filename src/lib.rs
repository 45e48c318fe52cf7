//! Tandem library crate (used by the server binary and integration tests).
//!
//! Tandem ranks a pool of collaborator profiles against a subject profile
//! with a three-tier pipeline: lexical similarity as the always-available
//! floor, weighted embedding similarity as the default first pass, and a
//! generative deep-analysis rerank over the top candidates. Every tier
//! degrades gracefully — the engine always returns a ranked list.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Profile`], [`FieldEmbeddings`] - The scored data model
//! - [`MatchEngine`], [`MatchOptions`], [`MatchResult`] - Orchestration
//! - [`Config`], [`ConfigError`] - Server configuration
//!
//! ## Providers
//! - [`Embedder`], [`HttpEmbedder`], [`EmbeddingCache`] - Tier-2 input
//! - [`Analyst`], [`HttpAnalyst`], [`DeepAnalysis`] - Tier-3 rerank
//!
//! ## Scoring
//! - [`cosine_similarity`], [`weighted_score`] and the reason helpers
//! - [`FieldPairWeights`], [`BlendWeights`] - Tunable weights
//!
//! ## Storage & Persistence
//! - [`ProfileStore`], [`EmbeddingWriter`], [`InMemoryProfileStore`]
//! - [`spawn_writeback_worker`], [`WritebackHandle`] - Background writes
//!
//! ## Test/Mock Support
//! Mock providers are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analysis;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod engine;
pub mod lexical;
pub mod profile;
pub mod scoring;
pub mod server;
pub mod store;
pub mod writeback;

pub use analysis::{AnalysisConfig, AnalysisError, Analyst, DeepAnalysis, HttpAnalyst};
#[cfg(any(test, feature = "mock"))]
pub use analysis::MockAnalyst;

pub use config::{Config, ConfigError};

pub use embedding::{
    Embedder, EmbeddingCache, EmbeddingConfig, EmbeddingError, HttpEmbedder, embed_profile_fields,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::{MockEmbedder, deterministic_embedding};

pub use engine::{EngineError, MatchEngine, MatchOptions, MatchResult};

pub use profile::{FieldEmbeddings, Profile, ProfileField, ProfileId, decode_embedding};

pub use scoring::{
    BlendWeights, CandidateScore, FieldPairWeights, PairSimilarities, ScoreSource,
    cosine_similarity, match_reasons, weighted_score,
};

pub use server::{ApiError, AppState, create_router};

pub use store::{EmbeddingWriter, InMemoryProfileStore, ProfileStore, ProfileUpdate, StoreError};

pub use writeback::{WritebackHandle, spawn_writeback_worker};
