use super::{ActivityEntry, ActivityLog, DashboardStats};
use crate::error::ActivityLogError;
use crate::prompts::ContentKind;
use std::future::Future;
use std::pin::Pin;

/// Stand-in used when the log store could not be opened. Every call fails
/// with the original open error, so generation keeps working and only the
/// dashboard reports the problem.
pub struct UnavailableActivityLog {
    reason: String,
}

impl UnavailableActivityLog {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> ActivityLogError {
        ActivityLogError::Unavailable(self.reason.clone())
    }
}

impl ActivityLog for UnavailableActivityLog {
    fn record<'a>(
        &'a self,
        _kind: ContentKind,
        _summary: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ActivityEntry, ActivityLogError>> + Send + 'a>> {
        Box::pin(async move { Err(self.error()) })
    }

    fn stats<'a>(
        &'a self,
        _recent_limit: u32,
    ) -> Pin<Box<dyn Future<Output = Result<DashboardStats, ActivityLogError>> + Send + 'a>> {
        Box::pin(async move { Err(self.error()) })
    }
}
