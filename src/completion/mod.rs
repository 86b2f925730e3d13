//! Completion client adapter: one call to the hosted model per generation,
//! with fixed generation parameters, fence stripping and JSON parsing.

mod fence;
mod result;

pub use fence::strip_code_fences;
pub use result::CompletionResult;

use crate::config::{CompletionConfig, Config};
use crate::error::CompletionError;
use crate::providers::{CompletionParams, GroqProvider, Provider};
use serde_json::Value;
use std::sync::Arc;

/// System instruction sent with every structured generation.
pub const STRUCTURED_SYSTEM_PROMPT: &str = "You are a helpful AI assistant for a marketing \
platform. You must output ONLY valid JSON. Do not include markdown formatting like ```json or \
```. Ensure the JSON is well-formed.";

/// Built once at startup and shared read-only by every handler.
#[derive(Clone)]
pub struct CompletionClient {
    provider: Arc<dyn Provider>,
    structured: CompletionParams,
    narrative: CompletionParams,
}

impl CompletionClient {
    pub fn new(provider: Arc<dyn Provider>, config: &CompletionConfig) -> Self {
        let params = |max_tokens| CompletionParams {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens,
            top_p: config.top_p,
        };
        Self {
            provider,
            structured: params(config.max_tokens),
            narrative: params(config.narrative_max_tokens),
        }
    }

    /// Client backed by the configured OpenAI-compatible endpoint.
    pub fn from_config(config: &Config) -> Self {
        let provider = GroqProvider::from_config(&config.completion, config.credential());
        Self::new(Arc::new(provider), &config.completion)
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        &self.structured.model
    }

    pub fn has_credential(&self) -> bool {
        self.provider.has_credential()
    }

    /// Structured generation. Every failure is folded into
    /// `CompletionResult::Error`; nothing is retried.
    pub async fn complete(&self, prompt: &str) -> CompletionResult {
        match self.try_complete(prompt).await {
            Ok(result) => result,
            Err(error) => {
                tracing::error!(
                    provider = self.provider.name(),
                    error = %error,
                    "structured completion failed"
                );
                error.into()
            }
        }
    }

    async fn try_complete(&self, prompt: &str) -> Result<CompletionResult, CompletionError> {
        if prompt.trim().is_empty() {
            return Err(CompletionError::EmptyPrompt);
        }
        let text = self
            .provider
            .chat_with_system(Some(STRUCTURED_SYSTEM_PROMPT), prompt, &self.structured)
            .await?;
        parse_structured(&text)
    }

    /// Free-text generation: the raw model text, no system instruction.
    pub async fn complete_text(&self, prompt: &str) -> Result<String, CompletionError> {
        if prompt.trim().is_empty() {
            return Err(CompletionError::EmptyPrompt);
        }
        self.provider
            .chat_with_system(None, prompt, &self.narrative)
            .await
    }
}

/// Strip optional code fences and parse the remainder as a JSON object.
pub fn parse_structured(text: &str) -> Result<CompletionResult, CompletionError> {
    let body = strip_code_fences(text);
    let payload: Value = serde_json::from_str(body)
        .map_err(|error| CompletionError::MalformedOutput(error.to_string()))?;
    CompletionResult::from_payload(payload)
}
