//! Model identifiers.
//!
//! Pick an enum variant instead of typing literal strings such as
//! `"llama3-8b-8192"`; the provider crate maps the variant onto its own naming
//! scheme. Anything not covered by [`GroqModel`] goes through
//! [`Model::Custom`].
//!
//! ```rust
//! use neuroassess_core::model::{GroqModel, Model};
//!
//! assert_eq!(Model::from(GroqModel::Llama3_8b), Model::Groq(GroqModel::Llama3_8b));
//! assert_eq!(Model::from_id("llama3-8b-8192"), Model::Groq(GroqModel::Llama3_8b));
//! ```
use std::borrow::Cow;
use std::fmt;

/// Universal identifier for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Models hosted by Groq.
    Groq(GroqModel),
    /// Any other model name understood by the configured endpoint.
    Custom(Cow<'static, str>),
}

impl Default for Model {
    fn default() -> Self {
        Model::Groq(GroqModel::Llama3_8b)
    }
}

impl Model {
    /// Resolve a model id string, falling back to [`Model::Custom`].
    pub fn from_id(id: &str) -> Self {
        GroqModel::ALL
            .iter()
            .find(|model| model.id() == id)
            .map(|model| Model::Groq(*model))
            .unwrap_or_else(|| Model::Custom(Cow::Owned(id.to_owned())))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Groq(model) => f.write_str(model.id()),
            Model::Custom(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroqModel {
    Llama3_8b,
    Llama3_70b,
    Llama31_8bInstant,
    Llama33_70bVersatile,
    Gemma2_9b,
}

impl GroqModel {
    pub const ALL: &'static [GroqModel] = &[
        GroqModel::Llama3_8b,
        GroqModel::Llama3_70b,
        GroqModel::Llama31_8bInstant,
        GroqModel::Llama33_70bVersatile,
        GroqModel::Gemma2_9b,
    ];

    /// Model id as published by the provider.
    pub fn id(self) -> &'static str {
        match self {
            GroqModel::Llama3_8b => "llama3-8b-8192",
            GroqModel::Llama3_70b => "llama3-70b-8192",
            GroqModel::Llama31_8bInstant => "llama-3.1-8b-instant",
            GroqModel::Llama33_70bVersatile => "llama-3.3-70b-versatile",
            GroqModel::Gemma2_9b => "gemma2-9b-it",
        }
    }
}

impl From<GroqModel> for Model {
    fn from(val: GroqModel) -> Self {
        Model::Groq(val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_become_custom() {
        let model = Model::from_id("mixtral-8x7b-32768");
        assert_eq!(model, Model::Custom("mixtral-8x7b-32768".into()));
        assert_eq!(model.to_string(), "mixtral-8x7b-32768");
    }

    #[test]
    fn default_is_llama3_8b() {
        assert_eq!(Model::default().to_string(), "llama3-8b-8192");
    }
}
