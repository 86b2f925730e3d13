use crate::error::CompletionError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Outcome of one structured generation: the model's sections, or an error.
/// Never both.
///
/// Serializes to the wire shape callers already consume: the section mapping
/// itself on success, `{"error": "<message>"}` on failure. An object the
/// model returned with its own `error` key is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CompletionResult {
    Success(Map<String, Value>),
    Reported(Map<String, Value>),
    Error { error: String },
}

impl CompletionResult {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn sections(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Success(sections) => Some(sections),
            Self::Reported(_) | Self::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Reported(payload) => Some(
                payload
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("model reported an error"),
            ),
            Self::Error { error } => Some(error),
        }
    }

    /// Interpret a parsed model payload.
    ///
    /// Only a JSON object is a valid answer. An object carrying a top-level
    /// `error` key is the model (or an upstream proxy) reporting failure and
    /// is kept whole, sibling keys included.
    pub fn from_payload(payload: Value) -> Result<Self, CompletionError> {
        match payload {
            Value::Object(sections) if sections.contains_key("error") => {
                Ok(Self::Reported(sections))
            }
            Value::Object(sections) => Ok(Self::Success(sections)),
            other => Err(CompletionError::MalformedOutput(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl From<CompletionError> for CompletionResult {
    fn from(error: CompletionError) -> Self {
        Self::error(error.to_string())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
