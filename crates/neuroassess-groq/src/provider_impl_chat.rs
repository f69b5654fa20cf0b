use std::{future::Future, pin::Pin, sync::Arc};

use neuroassess_core::{
    error::Result,
    generic::{Completion, UsageReport},
    provider::{CompletionParameters, CompletionProvider},
};

use crate::{
    GroqAdapter,
    api_v1::{ChatCompletionRequest, FinishReason},
    error::GroqError,
};

impl CompletionProvider for GroqAdapter {
    fn complete<'p>(
        &'p self,
        params: CompletionParameters,
    ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'p>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::from(params);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                model = %request.model,
                prompt_chars = request.messages.iter().map(|m| m.content.len()).sum::<usize>(),
                "sending chat completion"
            );

            let mut response = client.chat_completion(request).await?;
            let usage: Option<UsageReport> = response.usage.map(Into::into);

            if response.choices.is_empty() {
                return Err(GroqError::Format("response has no choices".into()).into());
            }
            let first_choice = response.choices.swap_remove(0);

            if first_choice.finish_reason == Some(FinishReason::Length) {
                #[cfg(feature = "tracing")]
                tracing::warn!("completion hit the max token limit and is truncated");
            }

            let text = first_choice
                .message
                .content
                .filter(|text| !text.trim().is_empty())
                .ok_or_else(|| GroqError::Format("response message has no content".into()))?;

            let mut completion = Completion::new(text);
            if let Some(usage) = usage {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    prompt_tokens = usage.prompt_tokens,
                    completion_tokens = usage.completion_tokens,
                    total_tokens = usage.total_tokens,
                    "chat completion usage"
                );
                completion = completion.with_usage(usage);
            }
            Ok(completion)
        })
    }
}
