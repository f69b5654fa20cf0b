mod analysis;
mod followup;

pub use analysis::{ANALYSIS_TEMPLATE, AnalysisPrompt, format_analysis_prompt};
pub use followup::{
    FOLLOWUP_TEMPLATE, FollowupPrompt, NO_ANALYSIS_PLACEHOLDER, format_followup_prompt,
};
