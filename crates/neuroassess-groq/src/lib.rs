//! Groq backend: an OpenAI-compatible chat-completions client implementing
//! [`neuroassess_core::provider::CompletionProvider`].
mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{API_KEY_ENV, GroqAdapter, GroqAdapterBuilder};
pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GroqClient};
pub mod api_v1;
mod client;
pub mod error;
