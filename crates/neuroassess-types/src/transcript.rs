//! Append-only, in-memory conversation record.
//!
//! A [`Transcript`] only grows until it is cleared as a whole. Rendering is
//! lazy: [`Transcript::render`] hands out an iterator that formats one line
//! per message on demand, and can be cloned to walk the conversation again.
//!
//! ```rust
//! use neuroassess_core::generic::Message;
//! use neuroassess_types::transcript::Transcript;
//!
//! let mut transcript = Transcript::new();
//! transcript.append(Message::human("MMSE: 26/30"));
//! transcript.append(Message::assistant("Mild cognitive impairment."));
//!
//! assert_eq!(
//!     transcript.history(),
//!     "Human: MMSE: 26/30\nAssistant: Mild cognitive impairment."
//! );
//! ```
use std::{iter::FusedIterator, slice};

use neuroassess_core::generic::{Message, Role};
use serde::{Deserialize, Serialize};

/// Separator placed between rendered messages by [`Transcript::history`].
pub const LINE_SEPARATOR: &str = "\n";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `message` after every message already present.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Lazily render each message as `"<Role>: <content>"`, oldest first.
    pub fn render(&self) -> Rendered<'_> {
        Rendered {
            inner: self.messages.iter(),
        }
    }

    /// All rendered messages joined by newlines; empty when there are none.
    pub fn history(&self) -> String {
        self.render().collect::<Vec<_>>().join(LINE_SEPARATOR)
    }

    /// Discard every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages spoken by `role`.
    pub fn count(&self, role: Role) -> usize {
        self.messages.iter().filter(|msg| msg.role() == role).count()
    }
}

/// Iterator returned by [`Transcript::render`].
#[derive(Debug, Clone)]
pub struct Rendered<'a> {
    inner: slice::Iter<'a, Message>,
}

impl Iterator for Rendered<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(ToString::to_string)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Rendered<'_> {}

impl FusedIterator for Rendered<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transcript {
        let mut transcript = Transcript::new();
        transcript.append(Message::human("first"));
        transcript.append(Message::assistant("second"));
        transcript.append(Message::human("third"));
        transcript
    }

    #[test]
    fn render_preserves_insertion_order() {
        let lines: Vec<String> = sample().render().collect();
        assert_eq!(
            lines,
            vec!["Human: first", "Assistant: second", "Human: third"]
        );
    }

    #[test]
    fn render_can_be_restarted() {
        let transcript = sample();
        let rendered = transcript.render();

        let first_pass: Vec<String> = rendered.clone().collect();
        let second_pass: Vec<String> = rendered.collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(transcript.render().len(), 3);
    }

    #[test]
    fn empty_transcript_has_empty_history() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.history(), "");
        assert_eq!(transcript.render().next(), None);
    }

    #[test]
    fn clear_discards_everything() {
        let mut transcript = sample();
        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.last(), None);
    }

    #[test]
    fn count_by_role() {
        let transcript = sample();
        assert_eq!(transcript.count(Role::Human), 2);
        assert_eq!(transcript.count(Role::Assistant), 1);
    }
}
