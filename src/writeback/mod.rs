//! Background embedding persistence.
//!
//! Freshly computed embeddings are persisted without blocking the matching
//! request: [`WritebackHandle::persist`] enqueues a job on a bounded channel
//! and returns immediately; a spawned worker task drains the queue and
//! writes through an [`EmbeddingWriter`](crate::store::EmbeddingWriter).
//! A full queue drops the job with a warning — persistence is best-effort
//! by contract, the embeddings will be regenerated on the next request.

#[cfg(test)]
mod tests;

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::profile::{FieldEmbeddings, ProfileId};
use crate::store::EmbeddingWriter;

/// Queue capacity; beyond this, jobs are dropped.
pub const WRITEBACK_QUEUE_CAPACITY: usize = 256;

#[derive(Debug)]
struct WritebackJob {
    profile_id: ProfileId,
    embeddings: FieldEmbeddings,
}

/// Cheap-to-clone sender side of the writeback queue.
#[derive(Clone)]
pub struct WritebackHandle {
    tx: mpsc::Sender<WritebackJob>,
}

impl WritebackHandle {
    /// Enqueues an embedding write; never blocks.
    pub fn persist(&self, profile_id: ProfileId, embeddings: FieldEmbeddings) {
        let job = WritebackJob {
            profile_id,
            embeddings,
        };
        if let Err(error) = self.tx.try_send(job) {
            warn!(%profile_id, %error, "dropping embedding writeback job");
        }
    }
}

impl std::fmt::Debug for WritebackHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WritebackHandle").finish()
    }
}

/// Spawns the writeback worker task.
///
/// The worker runs until every [`WritebackHandle`] is dropped, then drains
/// the queue and exits.
pub fn spawn_writeback_worker<W>(writer: Arc<W>) -> (WritebackHandle, JoinHandle<()>)
where
    W: EmbeddingWriter + 'static,
{
    let (tx, mut rx) = mpsc::channel::<WritebackJob>(WRITEBACK_QUEUE_CAPACITY);

    let worker = tokio::spawn(async move {
        while let Some(job) = rx.recv().await {
            match writer.write_embeddings(job.profile_id, &job.embeddings) {
                Ok(()) => debug!(profile_id = %job.profile_id, "embeddings persisted"),
                Err(error) => {
                    warn!(profile_id = %job.profile_id, %error, "embedding writeback failed");
                }
            }
        }
    });

    (WritebackHandle { tx }, worker)
}
