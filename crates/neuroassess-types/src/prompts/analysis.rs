//! The fixed clinical-assessment instruction template.
//!
//! The template text is a contract with the hosted model and is sent exactly
//! as stored in `data/analysis.md`; only `{chat_history}` and `{human_input}`
//! are substituted.
//!
//! ```rust
//! use neuroassess_core::template::IntoPrompt;
//! use neuroassess_types::{patient::PatientRecord, prompts::AnalysisPrompt, transcript::Transcript};
//!
//! let history = Transcript::new();
//! let record = PatientRecord::default();
//!
//! let prompt = AnalysisPrompt::new(&history, &record).into_prompt();
//! assert!(prompt.contains("### Patient Data:\nBASIC INFORMATION:"));
//! ```
use neuroassess_core::template::IntoPrompt;
use neuroassess_prompt::fill::fill;

use crate::{patient::PatientRecord, transcript::Transcript};

pub const ANALYSIS_TEMPLATE: &str = include_str!("data/analysis.md");

/// Analysis prompt for one form submission.
///
/// `history` must be the analysis transcript as it was *before* this
/// submission; the submission itself travels as patient data.
#[derive(Debug, Clone)]
pub struct AnalysisPrompt {
    history: String,
    patient_data: String,
}

impl AnalysisPrompt {
    pub fn new(history: &Transcript, record: &PatientRecord) -> Self {
        Self {
            history: history.history(),
            patient_data: record.to_prompt_block(),
        }
    }

    /// The serialized record, as it should be stored in the transcript.
    pub fn patient_data(&self) -> &str {
        &self.patient_data
    }
}

impl IntoPrompt for AnalysisPrompt {
    fn into_prompt(self) -> String {
        fill(
            ANALYSIS_TEMPLATE,
            &[
                ("chat_history", self.history.as_str()),
                ("human_input", self.patient_data.as_str()),
            ],
        )
    }
}

/// Render the analysis prompt in one call.
pub fn format_analysis_prompt(history: &Transcript, record: &PatientRecord) -> String {
    AnalysisPrompt::new(history, record).into_prompt()
}
