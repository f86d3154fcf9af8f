//! Stat cards: total, students, professionals.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Color;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::style::{Styles, Theme};
use crate::view::Stats;

/// Renders the three count cards. Counts show as `…` while loading.
pub fn render_stats(frame: &mut Frame, area: Rect, stats: &Stats, loading: bool) {
    let chunks = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    let cards = [
        ("Total Registrations", stats.total, Theme::TOTAL),
        ("Students", stats.students, Theme::STUDENT),
        ("Professionals", stats.professionals, Theme::PROFESSIONAL),
    ];
    for ((label, count, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        render_card(frame, *chunk, label, count, color, loading);
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    count: usize,
    color: Color,
    loading: bool,
) {
    let value = if loading {
        Span::styled("…", Styles::skeleton())
    } else {
        Span::styled(count.to_string(), Styles::stat_value(color))
    };
    let block = Block::default()
        .title(Span::styled(format!(" {} ", label), Styles::dim()))
        .borders(Borders::ALL)
        .border_style(Styles::dim());
    let paragraph = Paragraph::new(Line::from(value))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::{contains, draw};

    #[test]
    fn test_cards_show_counts() {
        let stats = Stats {
            total: 12,
            students: 5,
            professionals: 7,
        };
        let rows = draw(90, 3, |f| render_stats(f, f.area(), &stats, false));
        assert!(contains(&rows, "Total Registrations"));
        assert!(contains(&rows, "12"));
        assert!(contains(&rows, "5"));
        assert!(contains(&rows, "7"));
    }

    #[test]
    fn test_cards_while_loading() {
        let rows = draw(90, 3, |f| render_stats(f, f.area(), &Stats::default(), true));
        assert!(contains(&rows, "…"));
        assert!(!contains(&rows, "0"));
    }
}
