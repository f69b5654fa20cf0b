//! Short template for follow-up questions about a finished analysis.
use neuroassess_core::template::IntoPrompt;
use neuroassess_prompt::fill::fill;

use crate::{outputs::AnalysisResult, transcript::Transcript};

pub const FOLLOWUP_TEMPLATE: &str = "\
Based on the previous analysis and conversation, please answer the following question:

Previous analysis:
{analysis}

{conversation}Question: {question}
";

const CONVERSATION_SECTION: &str = "\
Conversation so far:
{chat_history}

";

/// Stands in for the analysis when none has been produced yet.
pub const NO_ANALYSIS_PLACEHOLDER: &str = "No analysis has been performed yet.";

#[derive(Debug, Clone)]
pub struct FollowupPrompt<'a> {
    analysis: Option<&'a AnalysisResult>,
    history: &'a Transcript,
    question: &'a str,
}

impl<'a> FollowupPrompt<'a> {
    /// `history` is the follow-up conversation so far, without `question`.
    pub fn new(
        analysis: Option<&'a AnalysisResult>,
        history: &'a Transcript,
        question: &'a str,
    ) -> Self {
        Self {
            analysis,
            history,
            question,
        }
    }
}

impl IntoPrompt for FollowupPrompt<'_> {
    fn into_prompt(self) -> String {
        let analysis = self
            .analysis
            .map(AnalysisResult::as_str)
            .unwrap_or(NO_ANALYSIS_PLACEHOLDER);

        let conversation = if self.history.is_empty() {
            String::new()
        } else {
            let history = self.history.history();
            fill(CONVERSATION_SECTION, &[("chat_history", history.as_str())])
        };

        fill(
            FOLLOWUP_TEMPLATE,
            &[
                ("analysis", analysis),
                ("conversation", conversation.as_str()),
                ("question", self.question.trim()),
            ],
        )
    }
}

/// Render the follow-up prompt in one call.
pub fn format_followup_prompt(
    analysis: Option<&AnalysisResult>,
    history: &Transcript,
    question: &str,
) -> String {
    FollowupPrompt::new(analysis, history, question).into_prompt()
}
