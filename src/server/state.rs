use std::sync::Arc;
use tracing::debug;

use crate::analysis::Analyst;
use crate::embedding::{Embedder, embed_profile_fields};
use crate::engine::MatchEngine;
use crate::profile::Profile;
use crate::store::InMemoryProfileStore;
use crate::writeback::WritebackHandle;

/// Shared handler state.
pub struct AppState<E, A> {
    pub store: Arc<InMemoryProfileStore>,
    pub engine: Arc<MatchEngine<E, A>>,
    pub embedder: E,
    pub writeback: WritebackHandle,
}

impl<E, A> AppState<E, A>
where
    E: Embedder + Clone + 'static,
    A: Analyst,
{
    pub fn new(
        store: Arc<InMemoryProfileStore>,
        engine: Arc<MatchEngine<E, A>>,
        embedder: E,
        writeback: WritebackHandle,
    ) -> Self {
        Self {
            store,
            engine,
            embedder,
            writeback,
        }
    }

    /// Embeds a profile's fields in the background and hands the result to
    /// the writeback worker. The caller's response is never blocked on this.
    pub fn schedule_embedding_refresh(&self, profile: Profile) {
        let embedder = self.embedder.clone();
        let writeback = self.writeback.clone();

        tokio::spawn(async move {
            debug!(profile_id = %profile.id, "refreshing profile embeddings");
            let embeddings = embed_profile_fields(&embedder, &profile).await;
            if embeddings.has_any() {
                writeback.persist(profile.id, embeddings);
            }
        });
    }
}
