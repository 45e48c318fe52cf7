use std::time::Duration;

use crate::constants::DEFAULT_EMBED_TIMEOUT_SECS;

/// Default embedding endpoint.
pub const DEFAULT_EMBEDDING_URL: &str = "https://api.deepseek.com/v1/embeddings";

/// Default embedding model identifier.
pub const DEFAULT_EMBEDDING_MODEL: &str = "deepseek-embedding";

/// Configuration for [`HttpEmbedder`](super::HttpEmbedder).
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    /// Endpoint URL of the embedding service.
    pub api_url: String,
    /// Static bearer credential.
    pub api_key: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl EmbeddingConfig {
    /// Creates a config with default endpoint, model and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_EMBEDDING_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_EMBED_TIMEOUT_SECS),
        }
    }

    /// Overrides the endpoint URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Overrides the model identifier.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
