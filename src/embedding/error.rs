use thiserror::Error;

/// Internal error type of the HTTP fetch path.
///
/// Never escapes the [`Embedder`](super::Embedder) trait boundary: every
/// variant is logged and converted to an absent embedding.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("embedding service returned status {status}")]
    BadStatus { status: u16 },

    #[error("malformed embedding response: {reason}")]
    MalformedResponse { reason: String },

    #[error("invalid embedder configuration: {reason}")]
    InvalidConfig { reason: String },
}
