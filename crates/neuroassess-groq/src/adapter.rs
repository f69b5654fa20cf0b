use std::{env, sync::Arc, time::Duration};

use neuroassess_core::error::{AssessError, Result};

use crate::client::{DEFAULT_TIMEOUT, GroqClient};

/// Environment variable holding the Groq credential.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Thin wrapper that wires the HTTP client [`GroqClient`] into a value that
/// implements [`neuroassess_core::provider::CompletionProvider`].
///
/// The type exposes no request methods of its own; plug it into a
/// [`neuroassess_core::CompletionClient`] instead.
pub struct GroqAdapter {
    pub(crate) client: Arc<GroqClient>,
}

impl GroqAdapter {
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Builder for [`GroqAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use neuroassess_groq::GroqAdapterBuilder;
///
/// let backend = GroqAdapterBuilder::new_from_env()
///     .build()
///     .expect("GROQ_API_KEY must be set");
/// ```
#[derive(Default)]
pub struct GroqAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl GroqAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `GROQ_API_KEY`
    /// environment variable.
    ///
    /// Never fails. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at another OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`AssessError::Configuration`] – if the API key is missing, blank or
    ///   not representable as a header, or the HTTP client cannot be built.
    pub fn build(self) -> Result<GroqAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AssessError::Configuration(format!("missing env variable: `{API_KEY_ENV}`"))
            })?;

        let client = GroqClient::with_timeout(
            api_key.trim(),
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            self.base_url,
        )
        .map_err(|err| AssessError::Configuration(err.to_string()))?;

        Ok(GroqAdapter {
            client: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = GroqAdapterBuilder::new().build().err().unwrap();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn blank_key_is_a_configuration_error() {
        let err = GroqAdapterBuilder::new()
            .with_api_key("   ")
            .build()
            .err()
            .unwrap();
        assert!(err.is_configuration());
    }

    #[test]
    fn key_with_control_characters_is_rejected() {
        let err = GroqAdapterBuilder::new()
            .with_api_key("gsk_\u{7}bad")
            .build()
            .err()
            .unwrap();
        assert!(err.is_configuration());
    }

    #[test]
    fn base_url_is_normalised() {
        let adapter = GroqAdapterBuilder::new()
            .with_api_key("gsk_test")
            .with_base_url("http://localhost:8080/v1/")
            .build()
            .unwrap();
        assert_eq!(adapter.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn default_base_url_points_at_groq() {
        let adapter = GroqAdapterBuilder::new()
            .with_api_key("gsk_test")
            .build()
            .unwrap();
        assert_eq!(adapter.base_url(), "https://api.groq.com/openai/v1");
    }
}
