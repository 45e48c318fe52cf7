use std::time::Duration;

use crate::constants::DEFAULT_ANALYSIS_TIMEOUT_SECS;

/// Default chat-completions endpoint.
pub const DEFAULT_CHAT_URL: &str = "https://api.deepseek.com/v1/chat/completions";

/// Default chat model identifier.
pub const DEFAULT_CHAT_MODEL: &str = "deepseek-chat";

/// Temperature kept low to favor deterministic structured output.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Output length bound for the structured reply.
pub const DEFAULT_MAX_TOKENS: u32 = 800;

/// Configuration for [`HttpAnalyst`](super::HttpAnalyst).
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Endpoint URL of the chat service.
    pub api_url: String,
    /// Static bearer credential.
    pub api_key: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Per-request timeout.
    pub timeout: Duration,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl AnalysisConfig {
    /// Creates a config with default endpoint, model and bounds.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_CHAT_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_ANALYSIS_TIMEOUT_SECS),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
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
