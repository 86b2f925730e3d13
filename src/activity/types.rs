use crate::prompts::ContentKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// Timestamp layout stored in the activity log (UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One successful generation as stored in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub id: i64,
    pub kind: ContentKind,
    pub summary: String,
    pub timestamp: String,
}

/// A row of the dashboard's recent activity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentActivity {
    pub tool_type: String,
    pub input_summary: String,
    pub timestamp: String,
}

/// Aggregate view served by `/dashboard_stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_generated: u64,
    /// Count per kind label. Kinds with no entries are absent.
    pub usage_breakdown: BTreeMap<String, u64>,
    /// Newest first.
    pub recent_activity: Vec<RecentActivity>,
}
