use crate::error::CompletionError;
use std::borrow::Cow;

const MAX_API_ERROR_CHARS: usize = 200;
const REDACTED: &str = "[REDACTED]";

/// Prefixes that start a bare credential (Groq, OpenAI-style, Hugging Face).
const KEY_PREFIXES: [&str; 4] = ["gsk_", "sk-", "hf_", "xai-"];

/// Markers whose following token is a credential.
const KEY_MARKERS: [&str; 6] = [
    "Authorization: Bearer ",
    "authorization: bearer ",
    "Bearer ",
    "api_key=",
    "\"api_key\":\"",
    "\"token\":\"",
];

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+' | '/' | '=')
}

fn key_end(input: &str, from: usize) -> usize {
    input[from..]
        .char_indices()
        .find(|(_, c)| !is_key_char(*c))
        .map_or(input.len(), |(i, _)| from + i)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_')
}

/// True when `at` does not sit in the middle of a word.
fn at_word_start(text: &str, at: usize) -> bool {
    !text[..at].chars().next_back().is_some_and(is_word_char)
}

/// Replace the token after every occurrence of `marker`, keeping the marker
/// itself when `keep_marker` is set. Bare key prefixes (`keep_marker` unset)
/// only match at the start of a word.
fn redact_after(text: &mut String, marker: &str, keep_marker: bool) {
    let mut from = 0;
    while let Some(rel) = text[from..].find(marker) {
        let start = from + rel;
        let value_start = start + marker.len();
        let end = key_end(text, value_start);
        if end == value_start || (!keep_marker && !at_word_start(text, start)) {
            from = value_start;
            continue;
        }
        let replace_from = if keep_marker { value_start } else { start };
        text.replace_range(replace_from..end, REDACTED);
        from = replace_from + REDACTED.len();
    }
}

/// Redact credential-looking substrings from text that may be logged or
/// returned to a caller.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    let suspicious = KEY_PREFIXES
        .iter()
        .chain(KEY_MARKERS.iter())
        .any(|pattern| input.contains(pattern));
    if !suspicious {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for marker in KEY_MARKERS {
        redact_after(&mut scrubbed, marker, true);
    }
    for prefix in KEY_PREFIXES {
        redact_after(&mut scrubbed, prefix, false);
    }
    Cow::Owned(scrubbed)
}

/// Sanitize API error text by scrubbing secrets and truncating length.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);
    match scrubbed.char_indices().nth(MAX_API_ERROR_CHARS) {
        Some((idx, _)) => format!("{}...", &scrubbed[..idx]),
        None => scrubbed.into_owned(),
    }
}

/// Build a sanitized provider error from a failed HTTP response.
pub async fn api_error(provider: &str, response: reqwest::Response) -> CompletionError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read provider error body>".to_string());
    CompletionError::Api {
        provider: provider.to_string(),
        status,
        message: sanitize_api_error(&body),
    }
}
