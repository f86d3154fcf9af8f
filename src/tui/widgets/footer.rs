//! Footer bar: record counts, sync label, last sync time, key hints.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::fmt::format_timestamp;
use crate::tui::style::{Styles, Theme};

const HINTS: &[(&str, &str)] = &[
    ("/", "search"),
    ("t", "type"),
    ("o", "sort"),
    ("c", "columns"),
    ("r", "sync"),
    ("q", "quit"),
];

pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    shown: usize,
    total: usize,
    rejected: usize,
    loaded_at: Option<DateTime<Utc>>,
) {
    let chunks = Layout::horizontal([
        Constraint::Length(34), // Counts
        Constraint::Length(22), // Sync label
        Constraint::Length(30), // Last sync
        Constraint::Min(10),    // Hints
    ])
    .split(area);

    // Records dropped at the store boundary are only discoverable here.
    let mut counts = vec![Span::styled(
        format!(" Records: {} / {}", shown, total),
        Styles::help(),
    )];
    if rejected > 0 {
        counts.push(Span::styled(format!(" ({} rejected)", rejected), Styles::error()));
    }
    let counts = Paragraph::new(Line::from(counts));
    frame.render_widget(counts, chunks[0]);

    let sync = Paragraph::new(Line::from(vec![
        Span::styled("● ", Styles::stat_value(Theme::PROFESSIONAL)),
        Span::styled("Live Sync Enabled", Styles::help()),
    ]));
    frame.render_widget(sync, chunks[1]);

    let synced = match loaded_at {
        Some(ts) => format!("Synced {}", format_timestamp(&ts)),
        None => "Not synced".to_string(),
    };
    frame.render_widget(Paragraph::new(synced).style(Styles::help()), chunks[2]);

    let hints: Vec<Span> = HINTS
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Styles::help_key()),
                Span::styled(format!(":{} ", label), Styles::help()),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(hints)), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::{contains, draw};
    use chrono::TimeZone;

    #[test]
    fn test_footer_counts_and_sync_time() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 18, 9, 5, 0).unwrap();
        let rows = draw(140, 1, |f| render_footer(f, f.area(), 3, 12, 0, Some(ts)));
        assert!(contains(&rows, "Records: 3 / 12"));
        assert!(contains(&rows, "Live Sync Enabled"));
        assert!(contains(&rows, "Synced 2024-03-18 09:05 UTC"));
        assert!(!contains(&rows, "rejected"));
    }

    #[test]
    fn test_footer_reports_rejected_records() {
        let rows = draw(140, 1, |f| render_footer(f, f.area(), 3, 12, 2, None));
        assert!(contains(&rows, "Records: 3 / 12 (2 rejected)"));
    }

    #[test]
    fn test_footer_before_first_sync() {
        let rows = draw(140, 1, |f| render_footer(f, f.area(), 0, 0, 0, None));
        assert!(contains(&rows, "Not synced"));
    }
}
