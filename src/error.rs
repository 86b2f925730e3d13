use std::path::PathBuf;
use thiserror::Error;

// ─── Completion errors ───────────────────────────────────────────────────────

/// Failures of a single completion call.
///
/// All of these are terminal for the call that produced them; nothing in the
/// crate retries. At the request-handler boundary they collapse into
/// `CompletionResult::Error` carrying the `Display` text.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("{env_var} not found in environment variables.")]
    CredentialMissing { env_var: &'static str },

    #[error("prompt must not be empty")]
    EmptyPrompt,

    #[error("{provider} request failed: {message}")]
    Transport { provider: String, message: String },

    #[error("{provider} API error ({status}): {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("malformed model output: {0}")]
    MalformedOutput(String),
}

impl CompletionError {
    /// Wrap a transport failure. reqwest embeds the request URL in its
    /// `Display` output, so it is stripped first.
    pub fn transport(provider: &str, error: reqwest::Error) -> Self {
        Self::Transport {
            provider: provider.to_string(),
            message: error.without_url().to_string(),
        }
    }
}

// ─── Activity log errors ─────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ActivityLogError {
    #[error("activity log database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("activity log row is invalid: {0}")]
    InvalidRow(String),

    #[error("activity log unavailable: {0}")]
    Unavailable(String),
}

// ─── Archive errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("archive file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("archive file {path} is not a JSON array of records: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
