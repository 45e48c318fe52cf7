use thiserror::Error;

/// Deep-analysis call failure.
///
/// Consumed by the engine's degrade rule; never surfaced to the matching
/// engine's caller.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("analysis service returned status {status}")]
    BadStatus { status: u16 },

    #[error("malformed analysis response: {reason}")]
    MalformedResponse { reason: String },

    #[error("invalid analyst configuration: {reason}")]
    InvalidConfig { reason: String },
}
