//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `TANDEM_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::time::Duration;

use crate::analysis::AnalysisConfig;
use crate::analysis::config::{DEFAULT_CHAT_MODEL, DEFAULT_CHAT_URL};
use crate::constants::{
    DEFAULT_ANALYSIS_TIMEOUT_SECS, DEFAULT_CACHE_CAPACITY, DEFAULT_EMBED_TIMEOUT_SECS,
    DEFAULT_RERANK_CANDIDATE_COUNT, DEFAULT_RESULT_COUNT,
};
use crate::embedding::EmbeddingConfig;
use crate::embedding::config::{DEFAULT_EMBEDDING_MODEL, DEFAULT_EMBEDDING_URL};
use crate::engine::MatchOptions;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TANDEM_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Bearer credential for both remote providers. Without it the server
    /// runs lexical-only.
    pub api_key: Option<String>,

    /// Embedding service endpoint.
    pub embedding_url: String,

    /// Embedding model identifier.
    pub embedding_model: String,

    /// Chat (deep-analysis) service endpoint.
    pub chat_url: String,

    /// Chat model identifier.
    pub chat_model: String,

    /// Embedding request timeout, seconds. Default: `10`.
    pub embed_timeout_secs: u64,

    /// Deep-analysis request timeout, seconds. Default: `30`.
    pub analysis_timeout_secs: u64,

    /// Max entries in the embedding cache. Default: `10_000`.
    pub cache_capacity: u64,

    /// Enables Tier 2. Default: `true`.
    pub use_embedding: bool,

    /// Enables Tier 3. Default: `true`.
    pub use_deep_analysis: bool,

    /// Tier-3 slice size. Default: `10`.
    pub rerank_candidate_count: usize,

    /// Final result list size. Default: `3`.
    pub result_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            api_key: None,
            embedding_url: DEFAULT_EMBEDDING_URL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            chat_url: DEFAULT_CHAT_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            embed_timeout_secs: DEFAULT_EMBED_TIMEOUT_SECS,
            analysis_timeout_secs: DEFAULT_ANALYSIS_TIMEOUT_SECS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            use_embedding: true,
            use_deep_analysis: true,
            rerank_candidate_count: DEFAULT_RERANK_CANDIDATE_COUNT,
            result_count: DEFAULT_RESULT_COUNT,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "TANDEM_PORT";
    const ENV_BIND_ADDR: &'static str = "TANDEM_BIND_ADDR";
    const ENV_API_KEY: &'static str = "TANDEM_API_KEY";
    const ENV_EMBEDDING_URL: &'static str = "TANDEM_EMBEDDING_URL";
    const ENV_EMBEDDING_MODEL: &'static str = "TANDEM_EMBEDDING_MODEL";
    const ENV_CHAT_URL: &'static str = "TANDEM_CHAT_URL";
    const ENV_CHAT_MODEL: &'static str = "TANDEM_CHAT_MODEL";
    const ENV_EMBED_TIMEOUT_SECS: &'static str = "TANDEM_EMBED_TIMEOUT_SECS";
    const ENV_ANALYSIS_TIMEOUT_SECS: &'static str = "TANDEM_ANALYSIS_TIMEOUT_SECS";
    const ENV_CACHE_CAPACITY: &'static str = "TANDEM_CACHE_CAPACITY";
    const ENV_USE_EMBEDDING: &'static str = "TANDEM_USE_EMBEDDING";
    const ENV_USE_DEEP_ANALYSIS: &'static str = "TANDEM_USE_DEEP_ANALYSIS";
    const ENV_RERANK_CANDIDATES: &'static str = "TANDEM_RERANK_CANDIDATES";
    const ENV_RESULT_COUNT: &'static str = "TANDEM_RESULT_COUNT";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            port: Self::parse_port_from_env(defaults.port)?,
            bind_addr: Self::parse_bind_addr_from_env(defaults.bind_addr)?,
            api_key: Self::parse_optional_string_from_env(Self::ENV_API_KEY),
            embedding_url: Self::parse_string_from_env(
                Self::ENV_EMBEDDING_URL,
                defaults.embedding_url,
            ),
            embedding_model: Self::parse_string_from_env(
                Self::ENV_EMBEDDING_MODEL,
                defaults.embedding_model,
            ),
            chat_url: Self::parse_string_from_env(Self::ENV_CHAT_URL, defaults.chat_url),
            chat_model: Self::parse_string_from_env(Self::ENV_CHAT_MODEL, defaults.chat_model),
            embed_timeout_secs: Self::parse_u64_from_env(
                Self::ENV_EMBED_TIMEOUT_SECS,
                defaults.embed_timeout_secs,
            ),
            analysis_timeout_secs: Self::parse_u64_from_env(
                Self::ENV_ANALYSIS_TIMEOUT_SECS,
                defaults.analysis_timeout_secs,
            ),
            cache_capacity: Self::parse_u64_from_env(
                Self::ENV_CACHE_CAPACITY,
                defaults.cache_capacity,
            ),
            use_embedding: Self::parse_bool_from_env(
                Self::ENV_USE_EMBEDDING,
                defaults.use_embedding,
            ),
            use_deep_analysis: Self::parse_bool_from_env(
                Self::ENV_USE_DEEP_ANALYSIS,
                defaults.use_deep_analysis,
            ),
            rerank_candidate_count: Self::parse_usize_from_env(
                Self::ENV_RERANK_CANDIDATES,
                defaults.rerank_candidate_count,
            ),
            result_count: Self::parse_usize_from_env(
                Self::ENV_RESULT_COUNT,
                defaults.result_count,
            ),
        })
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.embed_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                var: Self::ENV_EMBED_TIMEOUT_SECS,
            });
        }
        if self.analysis_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                var: Self::ENV_ANALYSIS_TIMEOUT_SECS,
            });
        }
        if self.result_count == 0 {
            return Err(ConfigError::ZeroCount {
                var: Self::ENV_RESULT_COUNT,
            });
        }
        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Embedding provider config (empty credential when no API key is set).
    pub fn embedding_config(&self) -> EmbeddingConfig {
        EmbeddingConfig::new(self.api_key.clone().unwrap_or_default())
            .api_url(self.embedding_url.clone())
            .model(self.embedding_model.clone())
            .timeout(Duration::from_secs(self.embed_timeout_secs))
    }

    /// Deep-analysis provider config.
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new(self.api_key.clone().unwrap_or_default())
            .api_url(self.chat_url.clone())
            .model(self.chat_model.clone())
            .timeout(Duration::from_secs(self.analysis_timeout_secs))
    }

    /// Engine options; semantic tiers are off without an API key.
    pub fn match_options(&self) -> MatchOptions {
        let has_key = self.api_key.is_some();
        MatchOptions::default()
            .use_embedding(self.use_embedding && has_key)
            .use_deep_analysis(self.use_deep_analysis && has_key)
            .rerank_candidate_count(self.rerank_candidate_count)
            .result_count(self.result_count)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn parse_usize_from_env(var_name: &str, default: usize) -> usize {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn parse_bool_from_env(var_name: &str, default: bool) -> bool {
        env::var(var_name)
            .ok()
            .and_then(|v| match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Some(true),
                "0" | "false" | "no" | "off" => Some(false),
                _ => None,
            })
            .unwrap_or(default)
    }
}
