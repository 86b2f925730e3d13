//! In-process provider for unit tests: replays a fixed reply and records
//! every call it receives.

use super::traits::{CompletionFuture, CompletionParams, Provider};
use crate::error::CompletionError;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub system_prompt: Option<String>,
    pub message: String,
    pub params: CompletionParams,
}

enum Script {
    Reply(String),
    Fail(Box<dyn Fn() -> CompletionError + Send + Sync>),
}

pub(crate) struct ScriptedProvider {
    script: Script,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: impl Fn() -> CompletionError + Send + Sync + 'static) -> Self {
        Self {
            script: Script::Fail(Box::new(error)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "Scripted"
    }

    fn has_credential(&self) -> bool {
        true
    }

    fn chat_with_system<'a>(
        &'a self,
        system_prompt: Option<&'a str>,
        message: &'a str,
        params: &'a CompletionParams,
    ) -> CompletionFuture<'a> {
        self.calls.lock().unwrap().push(RecordedCall {
            system_prompt: system_prompt.map(str::to_string),
            message: message.to_string(),
            params: params.clone(),
        });
        let outcome = match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail(error) => Err(error()),
        };
        Box::pin(async move { outcome })
    }
}
