//! Completion client bound to a single concrete [`CompletionProvider`].
//!
//! The client pins the request parameters (model, temperature, output budget)
//! once at startup, so call sites only hand over a prompt:
//!
//! ```rust,no_run
//! # use neuroassess_core::{CompletionClient, model::Model, provider::CompletionProvider};
//! # async fn run<B: CompletionProvider>(backend: B) -> neuroassess_core::error::Result<()> {
//! let client = CompletionClient::new(backend, Model::default())
//!     .with_temperature(0.7)
//!     .with_max_tokens(4096);
//!
//! let answer = client.complete("Summarise the findings.").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```
//!
//! Each call is exactly one attempt. Failures are returned unchanged so the
//! caller can leave its own state untouched and let the user resubmit.
use std::sync::Arc;

use crate::{
    error::{AssessError, Result},
    model::Model,
    provider::{CompletionParameters, CompletionProvider},
    template::IntoPrompt,
};

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// A client bound to a single provider.
///
/// Cloning is cheap: the backend lives behind an `Arc`.
pub struct CompletionClient<B> {
    backend: Arc<B>,
    model: Model,
    temperature: f64,
    max_tokens: u32,
}

impl<B> Clone for CompletionClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

impl<B> CompletionClient<B>
where
    B: CompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B, model: Model) -> Self {
        Self {
            backend: Arc::new(backend),
            model,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Send `prompt` to the provider and return the generated text.
    ///
    /// # Errors
    ///
    /// * [`AssessError::InvalidRequest`] – the rendered prompt is blank.
    /// * [`AssessError::Upstream`] – the provider failed, or answered with an
    ///   empty completion.
    pub async fn complete(&self, prompt: impl IntoPrompt) -> Result<String> {
        let prompt = prompt.into_prompt();
        if prompt.trim().is_empty() {
            return Err(AssessError::InvalidRequest("prompt is empty".into()));
        }

        let params = CompletionParameters::new(prompt, self.model.clone())
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);

        let completion = self.backend.complete(params).await?;
        if completion.text.trim().is_empty() {
            return Err(AssessError::upstream("provider returned an empty completion"));
        }

        Ok(completion.text)
    }
}

#[cfg(test)]
mod tests {
    use std::{future::Future, pin::Pin, sync::Mutex};

    use super::*;
    use crate::generic::Completion;

    struct Echo {
        seen: Mutex<Vec<CompletionParameters>>,
        reply: &'static str,
    }

    impl Echo {
        fn replying(reply: &'static str) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                reply,
            }
        }
    }

    impl CompletionProvider for Echo {
        fn complete<'p>(
            &'p self,
            params: CompletionParameters,
        ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'p>> {
            self.seen.lock().unwrap().push(params);
            let reply = self.reply;
            Box::pin(async move { Ok(Completion::new(reply)) })
        }
    }

    #[tokio::test]
    async fn forwards_fixed_parameters() {
        let client = CompletionClient::new(Echo::replying("ok"), Model::default())
            .with_temperature(0.2)
            .with_max_tokens(128);

        let answer = client.complete("hello").await.unwrap();
        assert_eq!(answer, "ok");

        let seen = client.backend().seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].prompt(), "hello");
        assert_eq!(seen[0].model(), &Model::default());
        assert_eq!(seen[0].temperature, Some(0.2));
        assert_eq!(seen[0].max_tokens, Some(128));
    }

    #[tokio::test]
    async fn defaults_match_the_assessment_settings() {
        let client = CompletionClient::new(Echo::replying("ok"), Model::default());
        assert_eq!(client.temperature(), 0.7);
        assert_eq!(client.max_tokens(), 4096);
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected_without_a_call() {
        let client = CompletionClient::new(Echo::replying("ok"), Model::default());

        let err = client.complete("  \n").await.unwrap_err();
        assert!(matches!(err, AssessError::InvalidRequest(_)));
        assert!(client.backend().seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_completion_is_an_upstream_error() {
        let client = CompletionClient::new(Echo::replying("   "), Model::default());

        let err = client.complete("hello").await.unwrap_err();
        assert!(err.is_upstream());
    }
}
