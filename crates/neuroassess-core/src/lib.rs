//! Provider-agnostic building blocks: conversation messages, the completion
//! provider seam, the completion client and the shared error type.
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod schema_util;
pub mod template;

pub use client::CompletionClient;
