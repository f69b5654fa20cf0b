//! Domain types for the progression assessment: the form record, the
//! conversation transcript, the analysis result and the two prompt templates
//! that tie them together.
pub mod outputs;
pub mod patient;
pub mod prompts;
pub mod transcript;
