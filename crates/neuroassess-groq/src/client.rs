use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse},
    error::GroqError,
};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Minimal HTTP client for Groq’s OpenAI-compatible *chat/completions*
/// endpoint.
///
/// * Non-streaming only (one request ▶ one response), no retries.
/// * Shares a single `reqwest::Client`, so cloning `GroqClient` is cheap.
#[derive(Clone)]
pub struct GroqClient {
    http: HttpClient,
    base: String,
    headers: HeaderMap,
}

impl GroqClient {
    /// Build a `reqwest` client with Rustls TLS and the given request timeout.
    pub fn with_timeout(
        api_key: impl AsRef<str>,
        timeout: Duration,
        base_url: Option<String>,
    ) -> Result<Self, GroqError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Self::with_http(api_key, http, base_url)
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl AsRef<str>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Result<Self, GroqError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key.as_ref()))
            .map_err(|_| GroqError::InvalidApiKey)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);

        let base = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        Ok(Self {
            http,
            base,
            headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GroqError> {
        let url = format!("{}/chat/completions", self.base);
        let resp = self
            .http
            .post(url)
            .headers(self.headers.clone())
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            #[cfg(feature = "tracing")]
            tracing::warn!(%status, "Groq rejected chat completion");
            return Err(GroqError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}
