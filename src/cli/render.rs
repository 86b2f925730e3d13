//! Plain-text views shared by the interactive menu and the one-shot
//! commands.

use crate::activity::DashboardStats;
use crate::archive::ArchivedItem;
use crate::prompts::ContentKind;
use crate::utils::text::title_case_key;
use serde_json::Value;
use std::fmt::Write;

pub const RULE_WIDTH: usize = 60;

/// Numbered listing of saved items, inputs only.
pub fn saved_listing(kind: ContentKind, items: &[ArchivedItem]) -> String {
    let title = kind.plural_title();
    if items.is_empty() {
        return format!("No saved {} found.", title.to_lowercase());
    }

    let mut out = String::new();
    let _ = writeln!(out, "SAVED {} ({} items)", title.to_uppercase(), items.len());
    for (number, item) in items.iter().enumerate() {
        let _ = writeln!(out, "\n--- Item {} ---", number + 1);
        for (key, value) in &item.fields {
            let _ = writeln!(out, "{}: {}", title_case_key(key), display_value(value));
        }
    }
    out
}

/// Message for a 1-based item number outside the listing.
pub fn out_of_range(kind: ContentKind, number: usize, len: usize) -> String {
    format!(
        "No saved item #{number} in {} ({len} saved).",
        kind.plural_title().to_lowercase()
    )
}

pub fn stats_table(stats: &DashboardStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total generated: {}", stats.total_generated);
    if !stats.usage_breakdown.is_empty() {
        let _ = writeln!(out, "\nUsage by tool:");
        for (kind, count) in &stats.usage_breakdown {
            let _ = writeln!(out, "  {kind:<12} {count:>6}");
        }
    }
    if !stats.recent_activity.is_empty() {
        let _ = writeln!(out, "\nRecent activity:");
        for row in &stats.recent_activity {
            let _ = writeln!(
                out,
                "  {}  {:<12} {}",
                row.timestamp, row.tool_type, row.input_summary
            );
        }
    }
    out
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::RecentActivity;
    use serde_json::json;

    fn item(fields: Value, result: &str) -> ArchivedItem {
        ArchivedItem {
            fields: fields.as_object().unwrap().clone(),
            result: result.into(),
        }
    }

    #[test]
    fn listing_title_cases_keys_and_skips_result() {
        let items = [item(
            json!({"product": "CRM", "pain_points": "Slow follow-up"}),
            "Dear buyer...",
        )];
        let text = saved_listing(ContentKind::Pitch, &items);

        assert!(text.starts_with("SAVED PITCHES (1 items)"));
        assert!(text.contains("--- Item 1 ---"));
        assert!(text.contains("Pain Points: Slow follow-up"));
        assert!(!text.contains("Dear buyer"));
    }

    #[test]
    fn empty_listing_says_so() {
        assert_eq!(
            saved_listing(ContentKind::LeadScore, &[]),
            "No saved lead scores found."
        );
    }

    #[test]
    fn stats_table_lists_kinds_and_recent_rows() {
        let mut stats = DashboardStats {
            total_generated: 3,
            ..DashboardStats::default()
        };
        stats.usage_breakdown.insert("Campaign".into(), 2);
        stats.usage_breakdown.insert("Pitch".into(), 1);
        stats.recent_activity.push(RecentActivity {
            tool_type: "Pitch".into(),
            input_summary: "CRM - Email".into(),
            timestamp: "2026-10-15 09:30:00".into(),
        });

        let text = stats_table(&stats);
        assert!(text.starts_with("Total generated: 3"));
        assert!(text.contains("Campaign"));
        assert!(text.contains("2026-10-15 09:30:00  Pitch"));
        assert!(text.contains("CRM - Email"));
    }

    #[test]
    fn out_of_range_names_the_count() {
        assert_eq!(
            out_of_range(ContentKind::Campaign, 4, 2),
            "No saved item #4 in campaigns (2 saved)."
        );
    }
}
