use serde::Deserialize;
use tracing::debug;

use crate::profile::Profile;

use super::config::AnalysisConfig;
use super::error::AnalysisError;
use super::prompt::{SYSTEM_PROMPT, build_match_prompt};
use super::types::{DeepAnalysis, RawAnalysis};

/// Structured relevance judge for one candidate pair.
///
/// Implementations return `Err` on any provider failure; the engine converts
/// that into the degrade rule (prior score, generic reason, empty lists) and
/// flags the candidate as not deep-analyzed.
pub trait Analyst: Send + Sync {
    /// Judges `candidate` against `subject`, given the prior-stage score.
    fn analyze(
        &self,
        subject: &Profile,
        candidate: &Profile,
        prior_score: f32,
    ) -> impl std::future::Future<Output = Result<DeepAnalysis, AnalysisError>> + Send;
}

/// Remote chat-completions analyst.
#[derive(Clone)]
pub struct HttpAnalyst {
    http: reqwest::Client,
    config: AnalysisConfig,
}

impl std::fmt::Debug for HttpAnalyst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAnalyst")
            .field("api_url", &self.config.api_url)
            .field("model", &self.config.model)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl HttpAnalyst {
    /// Creates a client for `config`.
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        if config.api_url.trim().is_empty() {
            return Err(AnalysisError::InvalidConfig {
                reason: "analysis api_url is empty".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    async fn fetch(
        &self,
        subject: &Profile,
        candidate: &Profile,
        prior_score: f32,
    ) -> Result<DeepAnalysis, AnalysisError> {
        let prompt = build_match_prompt(subject, candidate, prior_score);

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&serde_json::json!({
                "model": self.config.model,
                "messages": [
                    { "role": "system", "content": SYSTEM_PROMPT },
                    { "role": "user", "content": prompt },
                ],
                "temperature": self.config.temperature,
                "max_tokens": self.config.max_tokens,
                "response_format": { "type": "json_object" },
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| AnalysisError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        let content = body
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| AnalysisError::MalformedResponse {
                reason: "response carries no choices".to_string(),
            })?;

        let raw: RawAnalysis =
            serde_json::from_str(content).map_err(|e| AnalysisError::MalformedResponse {
                reason: format!("unparseable analysis payload: {e}"),
            })?;

        Ok(raw.into_analysis(prior_score))
    }
}

impl Analyst for HttpAnalyst {
    async fn analyze(
        &self,
        subject: &Profile,
        candidate: &Profile,
        prior_score: f32,
    ) -> Result<DeepAnalysis, AnalysisError> {
        debug!(
            subject = %subject.name,
            candidate = %candidate.name,
            prior_score,
            "running deep analysis"
        );

        let analysis = self.fetch(subject, candidate, prior_score).await?;

        debug!(score = analysis.score, "deep analysis complete");
        Ok(analysis)
    }
}
