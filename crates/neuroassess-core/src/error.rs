//! Unified error type exposed by **`neuroassess-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up to the [`CompletionClient`](crate::CompletionClient).
//! The taxonomy is deliberately tiny: either the process was started without
//! what it needs, or the hosted model did not deliver an answer.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, AssessError>;

#[derive(Debug, Error)]
pub enum AssessError {
    /// Required configuration (usually the API credential) is missing or
    /// malformed. Raised before any request is attempted.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The completion provider was unreachable, answered with an error status
    /// (quota exhaustion included) or returned something unusable.
    #[error("upstream completion failed: {0}")]
    Upstream(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl AssessError {
    /// Wrap a plain message as an upstream failure.
    pub fn upstream(message: impl Into<String>) -> Self {
        AssessError::Upstream(message.into().into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, AssessError::Configuration(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, AssessError::Upstream(_))
    }
}
