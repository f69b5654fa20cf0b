use neuroassess_core::error::AssessError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum GroqError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t (de)serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Groq returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Groq format error: {0}")]
    Format(String),

    #[error("API key cannot be sent as an HTTP header")]
    InvalidApiKey,
}

impl From<GroqError> for AssessError {
    fn from(value: GroqError) -> Self {
        match value {
            GroqError::InvalidApiKey => AssessError::Configuration(value.to_string()),
            other => AssessError::Upstream(Box::new(other)),
        }
    }
}
