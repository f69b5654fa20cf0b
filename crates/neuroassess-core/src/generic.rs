//! Provider-agnostic message and completion types.
//!
//! A conversation only ever has two speakers here: the clinician entering
//! data ("Human") and the model ("Assistant"). The role is an explicit tag on
//! every [`Message`], so rendering a transcript never has to inspect types.
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A single, immutable conversation entry.
///
/// Fields are private so a message cannot be edited once it has been placed
/// into a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Shorthand for a message typed (or submitted) by the user.
    pub fn human(content: impl Into<String>) -> Self {
        Self::new(Role::Human, content)
    }

    /// Shorthand for a message produced by the model.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Renders the transcript line form: `"<Role>: <content>"`.
impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.role, self.content)
    }
}

/// Speaker of a [`Message`].
///
/// `Display` renders the capitalised names used inside prompts (`Human`,
/// `Assistant`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Human,
    Assistant,
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Human => write!(f, "Human"),
            Role::Assistant => write!(f, "Assistant"),
        }
    }
}

/// The text returned by a provider for one prompt.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: Option<UsageReport>,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }

    pub fn with_usage(mut self, usage: UsageReport) -> Self {
        self.usage = Some(usage);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_renders_with_capitalised_role() {
        assert_eq!(Message::human("hello").to_string(), "Human: hello");
        assert_eq!(
            Message::assistant("report").to_string(),
            "Assistant: report"
        );
    }

    #[test]
    fn message_keeps_multiline_content_verbatim() {
        let msg = Message::human("line one\nline two");
        assert_eq!(msg.content(), "line one\nline two");
        assert_eq!(msg.role(), Role::Human);
        assert_eq!(msg.to_string(), "Human: line one\nline two");
    }
}
