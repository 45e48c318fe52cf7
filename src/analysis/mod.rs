//! Deep-analysis provider (Tier-3 rerank).
//!
//! [`Analyst`] obtains a structured relevance judgment for one
//! (subject, candidate) pair from a chat-style generative service. The trait
//! returns `Result` so the engine can both apply the degrade rule (fall back
//! to the prior-stage score) and mark the candidate as not deep-analyzed;
//! no analyst error ever reaches the engine's caller.

pub mod client;
pub mod config;
mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod prompt;
pub mod types;


pub use client::{Analyst, HttpAnalyst};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockAnalyst;
pub use types::{DeepAnalysis, FALLBACK_REASON};
