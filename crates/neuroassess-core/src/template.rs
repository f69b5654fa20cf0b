//! The seam between prompt formatting and the completion client.
//!
//! Anything that can be rendered into the final prompt text implements
//! [`IntoPrompt`]. The formatted prompts live in `neuroassess-types`; plain
//! strings implement the trait too so ad-hoc prompts need no wrapper.
//!
//! ```rust
//! use neuroassess_core::template::IntoPrompt;
//!
//! struct Greeting<'a>(&'a str);
//!
//! impl IntoPrompt for Greeting<'_> {
//!     fn into_prompt(self) -> String {
//!         format!("Say hello to {}.", self.0)
//!     }
//! }
//!
//! assert_eq!(Greeting("Ada").into_prompt(), "Say hello to Ada.");
//! ```

/// Converts a value into the exact text sent to the model.
pub trait IntoPrompt {
    /// Consume `self` and return the prompt text.
    fn into_prompt(self) -> String;
}

impl IntoPrompt for String {
    fn into_prompt(self) -> String {
        self
    }
}

impl IntoPrompt for &str {
    fn into_prompt(self) -> String {
        self.to_owned()
    }
}
