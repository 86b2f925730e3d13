//! Request handling shared by the gateway and the CLI: build the prompt,
//! make one completion call, and log the success.

use crate::activity::ActivityLog;
use crate::completion::{CompletionClient, CompletionResult};
use crate::error::CompletionError;
use crate::prompts::{GenerationRequest, PromptStyle};
use std::sync::Arc;

pub struct GenerationService {
    client: CompletionClient,
    activity: Arc<dyn ActivityLog>,
    max_field_chars: usize,
}

impl GenerationService {
    pub fn new(
        client: CompletionClient,
        activity: Arc<dyn ActivityLog>,
        max_field_chars: usize,
    ) -> Self {
        Self {
            client,
            activity,
            max_field_chars,
        }
    }

    pub fn client(&self) -> &CompletionClient {
        &self.client
    }

    pub fn activity(&self) -> &Arc<dyn ActivityLog> {
        &self.activity
    }

    /// Structured generation. A success is logged exactly once before it is
    /// returned; a failure is returned as-is and logs nothing.
    pub async fn handle(&self, request: &GenerationRequest) -> CompletionResult {
        let prompt = request.build_prompt(PromptStyle::Structured, self.max_field_chars);
        let result = self.client.complete(&prompt).await;

        if let Some(sections) = result.sections() {
            let missing: Vec<&str> = request
                .expected_sections()
                .iter()
                .copied()
                .filter(|key| !sections.contains_key(*key))
                .collect();
            if !missing.is_empty() {
                tracing::warn!(
                    kind = %request.kind(),
                    missing = ?missing,
                    "model output is missing expected sections"
                );
            }
            self.log_success(request).await;
        }

        result
    }

    /// Free-text generation for terminal display.
    pub async fn handle_narrative(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, CompletionError> {
        let prompt = request.build_prompt(PromptStyle::Narrative, self.max_field_chars);
        match self.client.complete_text(&prompt).await {
            Ok(text) => {
                self.log_success(request).await;
                Ok(text)
            }
            Err(error) => {
                tracing::error!(
                    kind = %request.kind(),
                    error = %error,
                    "narrative completion failed"
                );
                Err(error)
            }
        }
    }

    async fn log_success(&self, request: &GenerationRequest) {
        let kind = request.kind();
        let summary = request.summary();
        if let Err(error) = self.activity.record(kind, &summary).await {
            tracing::warn!(kind = %kind, error = %error, "failed to record activity");
        }
    }
}
