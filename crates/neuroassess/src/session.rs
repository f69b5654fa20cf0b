//! Per-user session state.
//!
//! A [`Session`] owns everything one user accumulates while working: the
//! analysis transcript, the latest [`AnalysisResult`] and the follow-up chat
//! log. Handlers receive the session explicitly; nothing is global.
//!
//! The two transcripts are kept apart on purpose:
//!
//! * the **analysis transcript** records every form submission and report and
//!   is the conversation history of the next analysis prompt;
//! * the **chat log** records follow-up questions and answers and is the
//!   conversation history of the next follow-up prompt.
//!
//! [`Session::clear_chat`] only empties the chat log. [`Session::reset`]
//! empties both and forgets the analysis.
//!
//! Every operation makes exactly one completion call. Nothing is appended
//! until the call has succeeded, so a failed call leaves the session exactly
//! as it was and the user can resubmit.
use neuroassess_core::{
    CompletionClient,
    error::{AssessError, Result},
    generic::Message,
    provider::CompletionProvider,
    template::IntoPrompt,
};
use neuroassess_types::{
    outputs::AnalysisResult,
    patient::PatientRecord,
    prompts::{AnalysisPrompt, FollowupPrompt},
    transcript::Transcript,
};
use tracing::{debug, info, warn};

pub struct Session<B> {
    client: CompletionClient<B>,
    transcript: Transcript,
    analysis: Option<AnalysisResult>,
    chat_log: Transcript,
}

impl<B> Session<B>
where
    B: CompletionProvider,
{
    pub fn new(client: CompletionClient<B>) -> Self {
        Self {
            client,
            transcript: Transcript::new(),
            analysis: None,
            chat_log: Transcript::new(),
        }
    }

    /// Analyze one form submission and store the report as the current
    /// [`AnalysisResult`].
    pub async fn analyze(&mut self, record: &PatientRecord) -> Result<&AnalysisResult> {
        let prompt = AnalysisPrompt::new(&self.transcript, record);
        let patient_data = prompt.patient_data().to_owned();

        info!(
            prior_messages = self.transcript.len(),
            model = %self.client.model(),
            "requesting progression analysis"
        );
        let report = self
            .client
            .complete(prompt.into_prompt())
            .await
            .inspect_err(|err| warn!(error = %err, "analysis failed; session unchanged"))?;

        self.transcript.append(Message::human(patient_data));
        self.transcript.append(Message::assistant(report.clone()));
        info!(
            transcript_len = self.transcript.len(),
            report_chars = report.len(),
            "analysis stored"
        );

        Ok(self.analysis.insert(AnalysisResult::new(report)))
    }

    /// Answer a follow-up question grounded in the current analysis.
    ///
    /// Works without a prior analysis as well; the prompt then says that no
    /// analysis has been performed.
    pub async fn ask(&mut self, question: &str) -> Result<&str> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AssessError::InvalidRequest("question is empty".into()));
        }

        if self.analysis.is_none() {
            debug!("follow-up asked before any analysis");
        }
        let prompt = FollowupPrompt::new(self.analysis.as_ref(), &self.chat_log, question)
            .into_prompt();

        let answer = self
            .client
            .complete(prompt)
            .await
            .inspect_err(|err| warn!(error = %err, "follow-up failed; session unchanged"))?;

        self.chat_log.append(Message::human(question));
        self.chat_log.append(Message::assistant(answer));
        debug!(chat_len = self.chat_log.len(), "follow-up stored");

        Ok(self
            .chat_log
            .last()
            .map(Message::content)
            .unwrap_or_default())
    }

    /// Empty the follow-up chat log. The analysis thread is kept.
    pub fn clear_chat(&mut self) {
        debug!(discarded = self.chat_log.len(), "chat log cleared");
        self.chat_log.clear();
    }

    /// Forget everything: both transcripts and the analysis.
    pub fn reset(&mut self) {
        info!("session reset");
        self.transcript.clear();
        self.chat_log.clear();
        self.analysis = None;
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn chat_log(&self) -> &Transcript {
        &self.chat_log
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn client(&self) -> &CompletionClient<B> {
        &self.client
    }
}
