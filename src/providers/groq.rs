//! OpenAI-compatible chat completions client, pointed at Groq by default.

use super::scrub::api_error;
use super::traits::{CompletionFuture, CompletionParams, Provider};
use crate::config::{CREDENTIAL_ENV_VAR, CompletionConfig};
use crate::error::CompletionError;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const PROVIDER_NAME: &str = "Groq";

pub struct GroqProvider {
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: Option<String>,
    /// Pre-computed chat completions URL.
    chat_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl GroqProvider {
    pub fn new(base_url: &str, api_key: Option<&str>, timeout_secs: u64) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let chat_url = if base_url.ends_with("chat/completions") {
            base_url.to_string()
        } else {
            format!("{base_url}/chat/completions")
        };

        Self {
            cached_auth_header: api_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(|key| format!("Bearer {key}")),
            chat_url,
            client: super::build_provider_client_with_timeout(timeout_secs),
        }
    }

    pub fn from_config(config: &CompletionConfig, api_key: Option<&str>) -> Self {
        Self::new(&config.base_url, api_key, config.timeout_secs)
    }

    fn build_request<'a>(
        system_prompt: Option<&'a str>,
        message: &'a str,
        params: &'a CompletionParams,
    ) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_prompt {
            messages.push(Message {
                role: "system",
                content: system,
            });
        }
        messages.push(Message {
            role: "user",
            content: message,
        });

        ChatRequest {
            model: &params.model,
            messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
            stream: false,
        }
    }

    fn extract_text(response: ChatResponse) -> Result<String, CompletionError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                CompletionError::MalformedOutput(format!("no content in {PROVIDER_NAME} response"))
            })
    }

    async fn call_api(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        params: &CompletionParams,
    ) -> Result<String, CompletionError> {
        let auth_header =
            self.cached_auth_header
                .as_deref()
                .ok_or(CompletionError::CredentialMissing {
                    env_var: CREDENTIAL_ENV_VAR,
                })?;

        let request = Self::build_request(system_prompt, message, params);
        let response = self
            .client
            .post(&self.chat_url)
            .header("Authorization", auth_header)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::transport(PROVIDER_NAME, e))?;

        if !response.status().is_success() {
            return Err(api_error(PROVIDER_NAME, response).await);
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::transport(PROVIDER_NAME, e))?;
        Self::extract_text(chat_response)
    }
}

impl Provider for GroqProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn has_credential(&self) -> bool {
        self.cached_auth_header.is_some()
    }

    fn chat_with_system<'a>(
        &'a self,
        system_prompt: Option<&'a str>,
        message: &'a str,
        params: &'a CompletionParams,
    ) -> CompletionFuture<'a> {
        Box::pin(self.call_api(system_prompt, message, params))
    }
}
