use crate::error::CompletionError;
use std::future::Future;
use std::pin::Pin;

/// Generation parameters sent with every completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

pub type CompletionFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, CompletionError>> + Send + 'a>>;

/// A hosted chat-completion endpoint.
///
/// Implementations make exactly one outbound call per invocation and return
/// the raw text of the first choice. Interpretation of that text belongs to
/// the caller.
pub trait Provider: Send + Sync {
    /// Provider identifier used in logs and error messages (e.g. "Groq").
    fn name(&self) -> &str;

    /// Whether a credential was configured at construction time.
    fn has_credential(&self) -> bool;

    fn chat_with_system<'a>(
        &'a self,
        system_prompt: Option<&'a str>,
        message: &'a str,
        params: &'a CompletionParams,
    ) -> CompletionFuture<'a>;
}
