use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use super::cache::EmbeddingCache;
use super::config::EmbeddingConfig;
use super::error::EmbeddingError;

/// Text → embedding provider.
///
/// `None` covers every failure mode: empty input, timeout, transport error,
/// malformed response. Callers treat absence as missing data, never as an
/// error to propagate.
pub trait Embedder: Send + Sync {
    /// Embeds one text field.
    fn embed(&self, text: &str) -> impl std::future::Future<Output = Option<Vec<f32>>> + Send;
}

/// Remote embedding client with an injected process-lifetime cache.
#[derive(Clone)]
pub struct HttpEmbedder {
    http: reqwest::Client,
    config: EmbeddingConfig,
    cache: EmbeddingCache,
}

impl std::fmt::Debug for HttpEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEmbedder")
            .field("api_url", &self.config.api_url)
            .field("model", &self.config.model)
            .field("cache", &self.cache)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl HttpEmbedder {
    /// Creates a client for `config`, sharing `cache` across requests.
    pub fn new(config: EmbeddingConfig, cache: EmbeddingCache) -> Result<Self, EmbeddingError> {
        if config.api_url.trim().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding api_url is empty".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            config,
            cache,
        })
    }

    /// Returns the injected cache.
    pub fn cache(&self) -> &EmbeddingCache {
        &self.cache
    }

    async fn fetch(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        debug!(text_len = text.len(), "requesting embedding");

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&serde_json::json!({
                "model": self.config.model,
                "input": text,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmbeddingError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body: EmbeddingResponse =
            response
                .json()
                .await
                .map_err(|e| EmbeddingError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        // The request carries a single input, so anything other than exactly
        // one vector is malformed.
        match body.data.as_slice() {
            [single] if !single.embedding.is_empty() => Ok(single.embedding.clone()),
            _ => Err(EmbeddingError::MalformedResponse {
                reason: format!("expected 1 embedding, got {}", body.data.len()),
            }),
        }
    }
}

impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Option<Vec<f32>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(cached) = self.cache.get(trimmed) {
            debug!("embedding cache hit");
            return Some(cached.as_ref().clone());
        }

        match self.fetch(trimmed).await {
            Ok(embedding) => {
                debug!(dimension = embedding.len(), "embedding generated");
                self.cache.insert(trimmed, Arc::new(embedding.clone()));
                Some(embedding)
            }
            Err(error) => {
                warn!(error = %error, "embedding request failed, treating field as absent");
                None
            }
        }
    }
}
