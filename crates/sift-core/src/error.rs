use crate::types::Domain;
use std::time::Duration;
use thiserror::Error;

/// Failures local to a single analysis domain.
///
/// Every variant means "this domain is unavailable for this request". The
/// orchestrator folds these into a per-domain failed outcome; they never
/// abort sibling domains or the request itself.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("analyzer backend unavailable: {0}")]
    Backend(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("score {value} out of range for domain '{domain}'")]
    ScoreOutOfRange { domain: Domain, value: f64 },

    #[error("analysis timed out after {0:?}")]
    Timeout(Duration),
}

impl AnalyzerError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Result type alias for analyzer operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
