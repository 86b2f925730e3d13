//! Append-only log of successful generations and the dashboard aggregates
//! computed from it.

mod sqlite;
mod types;
mod unavailable;

pub use sqlite::SqliteActivityLog;
pub use types::{ActivityEntry, DashboardStats, RecentActivity, TIMESTAMP_FORMAT};
pub use unavailable::UnavailableActivityLog;

use crate::error::ActivityLogError;
use crate::prompts::ContentKind;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;

/// Async activity log contract.
///
/// Safe to call from concurrent handlers; every `record` produces exactly
/// one entry with a distinct id.
pub trait ActivityLog: Send + Sync {
    fn record<'a>(
        &'a self,
        kind: ContentKind,
        summary: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ActivityEntry, ActivityLogError>> + Send + 'a>>;

    fn stats<'a>(
        &'a self,
        recent_limit: u32,
    ) -> Pin<Box<dyn Future<Output = Result<DashboardStats, ActivityLogError>> + Send + 'a>>;
}

/// Open the SQLite log at `db_path`. A store that cannot be opened is
/// reported once and replaced by [`UnavailableActivityLog`].
pub async fn open_activity_log(db_path: &Path) -> Arc<dyn ActivityLog> {
    match SqliteActivityLog::open(db_path).await {
        Ok(log) => Arc::new(log),
        Err(error) => {
            tracing::warn!(
                path = %db_path.display(),
                error = %format!("{error:#}"),
                "activity log unavailable; generations will not be recorded"
            );
            Arc::new(UnavailableActivityLog::new(format!("{error:#}")))
        }
    }
}
