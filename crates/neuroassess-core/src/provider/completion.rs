use std::{future::Future, pin::Pin};

use crate::{error::Result, generic::Completion, model::Model};

/// A **backend** turns a fully formatted prompt into a network call to a
/// concrete provider and returns the generated text.
///
/// The trait is intentionally minimal:
///
/// * **One method** – `complete`, which performs a *single* non-streaming
///   round-trip. No retries happen at this layer.
///
/// The method returns a [`Pin<Box<dyn Future>>`] so we stay object-safe
/// without pulling in `async_trait`.
pub trait CompletionProvider: Send + Sync {
    fn complete<'p>(
        &'p self,
        params: CompletionParameters,
    ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'p>>;
}

/// Everything a provider needs for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParameters {
    pub prompt: String,
    pub model: Model,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl CompletionParameters {
    pub fn new(prompt: impl Into<String>, model: Model) -> Self {
        Self {
            prompt: prompt.into(),
            model,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}
