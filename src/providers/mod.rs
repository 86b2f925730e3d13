pub mod groq;
pub mod http_client;
pub mod scrub;
pub mod traits;

#[cfg(test)]
pub(crate) mod scripted;

pub use groq::GroqProvider;
pub use http_client::build_provider_client_with_timeout;
pub use scrub::{api_error, sanitize_api_error, scrub_secret_patterns};
pub use traits::{CompletionFuture, CompletionParams, Provider};
