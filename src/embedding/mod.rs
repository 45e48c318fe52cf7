//! Embedding provider (Tier-2 input).
//!
//! [`Embedder`] turns a text field into a vector, or absent. Absence is the
//! only failure signal visible to callers: empty input, a timed-out request,
//! a transport error and a malformed response all come back as `None`, and
//! downstream scoring treats the field as missing data, not an error.
//!
//! The process-lifetime [`EmbeddingCache`] is an explicit instance injected
//! into the provider, never ambient global state.

pub mod cache;
pub mod client;
pub mod config;
mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use cache::EmbeddingCache;
pub use client::{Embedder, HttpEmbedder};
pub use config::EmbeddingConfig;
pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockEmbedder, deterministic_embedding};

use crate::profile::{FieldEmbeddings, Profile};

/// Embeds all four fields of a profile concurrently.
///
/// Each field call falls back to absent independently; a profile with some
/// fields embedded and others absent is a valid result.
pub async fn embed_profile_fields<E: Embedder>(embedder: &E, profile: &Profile) -> FieldEmbeddings {
    let (skills, interests, needs, looking_for) = tokio::join!(
        embedder.embed(&profile.skills),
        embedder.embed(&profile.interests),
        embedder.embed(&profile.needs),
        embedder.embed(&profile.looking_for),
    );

    FieldEmbeddings {
        skills,
        interests,
        needs,
        looking_for,
    }
}
