//! Builder-style helper for constructing **plain-text prompt blocks**.
//!
//! Every method returns `self`, enabling call-chaining:
//!
//! ```rust
//! use neuroassess_prompt::builder::PromptBuilder;
//!
//! let block = PromptBuilder::new()
//!     .add_section("BASIC INFORMATION")
//!     .add_row([("Age", "65".to_string()), ("Gender", "Male".to_string())])
//!     .add_blank_line()
//!     .add_key_value("APOE", "ε3/ε4")
//!     .finalize();
//!
//! assert_eq!(block, "BASIC INFORMATION:\nAge: 65 | Gender: Male\n\nAPOE: ε3/ε4\n");
//! ```
//!
//! The builder performs no validation and no smart-formatting: newlines and
//! whitespace are emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Separator between the labeled values of one row.
pub const ROW_SEPARATOR: &str = " | ";

/// Separator between the selected options of a multi-select value.
pub const LIST_SEPARATOR: &str = ", ";

/// Fluent helper producing a text block, one line per call.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a section header line: `TITLE:`.
    pub fn add_section(mut self, title: impl Display) -> Self {
        let _ = writeln!(self.buffer, "{title}:");
        self
    }

    /// Add a single labeled value: `Key: Value`.
    pub fn add_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        let _ = writeln!(self.buffer, "{key}: {value}");
        self
    }

    /// Add several labeled values on one line, joined by [`ROW_SEPARATOR`].
    pub fn add_row<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Display,
        V: Display,
    {
        for (idx, (key, value)) in pairs.into_iter().enumerate() {
            if idx > 0 {
                self.buffer.push_str(ROW_SEPARATOR);
            }
            let _ = write!(self.buffer, "{key}: {value}");
        }
        self.buffer.push('\n');
        self
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

/// Join displayable items with [`LIST_SEPARATOR`]. An empty input yields an
/// empty string.
pub fn join_list<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    let mut out = String::new();
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            out.push_str(LIST_SEPARATOR);
        }
        let _ = write!(out, "{item}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_with_single_pair_has_no_separator() {
        let text = PromptBuilder::new().add_row([("Falls (6 months)", 1)]).finalize();
        assert_eq!(text, "Falls (6 months): 1\n");
    }

    #[test]
    fn join_list_handles_empty_and_many() {
        assert_eq!(join_list(Vec::<&str>::new()), "");
        assert_eq!(join_list(["Hypertension"]), "Hypertension");
        assert_eq!(join_list(["FTD", "ALS"]), "FTD, ALS");
    }
}
