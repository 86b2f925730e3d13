use super::ActivityLog;
use super::types::{ActivityEntry, DashboardStats, RecentActivity, TIMESTAMP_FORMAT};
use crate::error::ActivityLogError;
use crate::prompts::ContentKind;
use anyhow::Context;
use chrono::Utc;
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

/// SQLite-backed activity log using an sqlx async pool.
pub struct SqliteActivityLog {
    pool: SqlitePool,
}

impl SqliteActivityLog {
    /// Open (creating if needed) the log database at `db_path`.
    pub async fn open(db_path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create activity log directory: {}", parent.display())
            })?;
        }

        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect(&url)
            .await
            .with_context(|| format!("Failed to open activity log: {}", db_path.display()))?;

        Ok(Self::new(pool).await?)
    }

    /// Wrap an existing pool and create the table if it does not exist.
    /// Existing rows are kept.
    pub async fn new(pool: SqlitePool) -> Result<Self, ActivityLogError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS activity_log (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 tool_type TEXT NOT NULL,
                 input_summary TEXT,
                 timestamp TEXT NOT NULL
             )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn count_to_u64(value: i64) -> Result<u64, ActivityLogError> {
    u64::try_from(value)
        .map_err(|_| ActivityLogError::InvalidRow(format!("negative count {value}")))
}

fn map_recent_row(row: &SqliteRow) -> Result<RecentActivity, ActivityLogError> {
    let input_summary: Option<String> = row.try_get("input_summary")?;
    Ok(RecentActivity {
        tool_type: row.try_get("tool_type")?,
        input_summary: input_summary.unwrap_or_default(),
        timestamp: row.try_get("timestamp")?,
    })
}

impl ActivityLog for SqliteActivityLog {
    fn record<'a>(
        &'a self,
        kind: ContentKind,
        summary: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ActivityEntry, ActivityLogError>> + Send + 'a>> {
        Box::pin(async move {
            let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
            let result = sqlx::query(
                "INSERT INTO activity_log (tool_type, input_summary, timestamp)
                 VALUES ($1, $2, $3)",
            )
            .bind(kind.to_string())
            .bind(summary)
            .bind(&timestamp)
            .execute(&self.pool)
            .await?;

            Ok(ActivityEntry {
                id: result.last_insert_rowid(),
                kind,
                summary: summary.to_string(),
                timestamp,
            })
        })
    }

    fn stats<'a>(
        &'a self,
        recent_limit: u32,
    ) -> Pin<Box<dyn Future<Output = Result<DashboardStats, ActivityLogError>> + Send + 'a>> {
        Box::pin(async move {
            // One read transaction so the three views agree with each other.
            let mut tx = self.pool.begin().await?;

            let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM activity_log")
                .fetch_one(&mut *tx)
                .await?;

            let breakdown_rows = sqlx::query(
                "SELECT tool_type, COUNT(*) AS uses
                 FROM activity_log
                 GROUP BY tool_type",
            )
            .fetch_all(&mut *tx)
            .await?;

            let recent_rows = sqlx::query(
                "SELECT tool_type, input_summary, timestamp
                 FROM activity_log
                 ORDER BY id DESC
                 LIMIT $1",
            )
            .bind(i64::from(recent_limit))
            .fetch_all(&mut *tx)
            .await?;

            tx.commit().await?;

            let mut stats = DashboardStats {
                total_generated: count_to_u64(total)?,
                ..DashboardStats::default()
            };
            for row in &breakdown_rows {
                let tool_type: String = row.try_get("tool_type")?;
                let uses: i64 = row.try_get("uses")?;
                stats.usage_breakdown.insert(tool_type, count_to_u64(uses)?);
            }
            stats.recent_activity = recent_rows
                .iter()
                .map(map_recent_row)
                .collect::<Result<_, _>>()?;

            Ok(stats)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    async fn log() -> SqliteActivityLog {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteActivityLog::new(pool).await.unwrap()
    }

    #[tokio::test]
    async fn empty_log_reports_zero() {
        let log = log().await;
        let stats = log.stats(5).await.unwrap();

        assert_eq!(stats.total_generated, 0);
        assert!(stats.usage_breakdown.is_empty());
        assert!(stats.recent_activity.is_empty());
    }

    #[tokio::test]
    async fn record_assigns_increasing_ids_and_formatted_timestamp() {
        let log = log().await;
        let first = log
            .record(ContentKind::Campaign, "Espresso Maker (Direct Sales)")
            .await
            .unwrap();
        let second = log.record(ContentKind::Pitch, "CRM - Email").await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.kind, ContentKind::Campaign);
        assert!(
            chrono::NaiveDateTime::parse_from_str(&first.timestamp, TIMESTAMP_FORMAT).is_ok(),
            "unexpected timestamp {}",
            first.timestamp
        );
    }

    #[tokio::test]
    async fn stats_breakdown_sums_to_total() {
        let log = log().await;
        log.record(ContentKind::Campaign, "a (b)").await.unwrap();
        log.record(ContentKind::Campaign, "c (d)").await.unwrap();
        log.record(ContentKind::LeadScore, "Ada ($5000)").await.unwrap();

        let stats = log.stats(5).await.unwrap();
        assert_eq!(stats.total_generated, 3);
        assert_eq!(stats.usage_breakdown.get("Campaign"), Some(&2));
        assert_eq!(stats.usage_breakdown.get("Lead Score"), Some(&1));
        assert!(!stats.usage_breakdown.contains_key("Pitch"));
        assert_eq!(stats.usage_breakdown.values().sum::<u64>(), stats.total_generated);
    }

    #[tokio::test]
    async fn recent_activity_is_newest_first_and_limited() {
        let log = log().await;
        for n in 0..7 {
            log.record(ContentKind::Pitch, &format!("item {n}"))
                .await
                .unwrap();
        }

        let stats = log.stats(5).await.unwrap();
        let summaries: Vec<_> = stats
            .recent_activity
            .iter()
            .map(|row| row.input_summary.as_str())
            .collect();
        assert_eq!(summaries, ["item 6", "item 5", "item 4", "item 3", "item 2"]);
        assert!(stats.recent_activity.iter().all(|row| row.tool_type == "Pitch"));
    }

    #[tokio::test]
    async fn concurrent_records_are_all_counted() {
        let log = Arc::new(log().await);
        let mut handles = Vec::new();
        for n in 0..10 {
            let log = Arc::clone(&log);
            handles.push(tokio::spawn(async move {
                log.record(ContentKind::Campaign, &format!("p{n} (g)"))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
        assert_eq!(log.stats(5).await.unwrap().total_generated, 10);
    }

    #[tokio::test]
    async fn open_creates_file_and_keeps_rows_across_reopen() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("marketmind.db");

        let log = SqliteActivityLog::open(&path).await.unwrap();
        log.record(ContentKind::Pitch, "kept").await.unwrap();
        log.pool().close().await;

        let reopened = SqliteActivityLog::open(&path).await.unwrap();
        let stats = reopened.stats(5).await.unwrap();
        assert_eq!(stats.total_generated, 1);
        assert_eq!(stats.recent_activity[0].input_summary, "kept");
    }
}
