//! Shared formatting helpers for table cells and the print mode.
//!
//! Pure string formatting only; no ratatui styles live here.

use chrono::{DateTime, Utc};

/// Shown in place of an absent optional value.
pub const PLACEHOLDER: &str = "—";

/// Format a registration date as `March 10, 2024` (UTC).
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%B %-d, %Y").to_string()
}

/// Format a full timestamp as `2024-03-10 10:30 UTC`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Truncate `s` to at most `max` characters, ending with `…` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}
