//! Help popup widget with key bindings and column descriptions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

use super::centered;

const BINDINGS: &[(&str, &str)] = &[
    ("/", "Search name or email (Enter keeps, Esc clears)"),
    ("t", "Cycle type filter: All, Student, Professional"),
    ("1 2 3", "Show all, students only, professionals only"),
    ("o", "Toggle sort: newest first / oldest first"),
    ("c", "Column menu (p phone, o organization, d date)"),
    ("x", "Clear search and type filter"),
    ("y", "Copy email of the selected registration"),
    ("Y", "Copy phone of the selected registration"),
    ("r", "Re-sync from the registration store"),
    ("↑↓ j k", "Move selection"),
    ("PgUp PgDn", "Move selection by a page"),
    ("Home End", "First / last registration"),
    ("?", "Toggle this help"),
    ("q", "Quit (with confirmation), Ctrl-C quits at once"),
];

const COLUMNS: &[(&str, &str)] = &[
    ("NAME", "Registrant's full name"),
    ("EMAIL", "Contact email, searched together with the name"),
    ("TYPE", "Student or Professional"),
    ("ORGANIZATION", "Company, shown for professionals only"),
    ("CONTACT", "Phone number, if provided"),
    ("REGISTERED ON", "Registration date (UTC)"),
];

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 80);
    let popup_height = (area.height * 80 / 100).clamp(10, 30);
    let popup_area = centered(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let content = help_lines();
    let content_lines = content.len();

    let block = Block::default()
        .title(" Registrations Help ")
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    // Clamp scroll to valid range
    let visible_height = chunks[0].height as usize;
    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Styles::default());
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Styles::help()),
        Span::styled("?", Styles::help_key()),
        Span::styled(" or ", Styles::help()),
        Span::styled("Esc", Styles::help_key()),
        Span::styled(" to close, ", Styles::help()),
        Span::styled("↑↓", Styles::help_key()),
        Span::styled(" to scroll", Styles::help()),
        Span::styled(scroll_info, Styles::help()),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Keys", Styles::help_key()))];
    lines.extend(BINDINGS.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", key), Styles::help_key()),
            Span::raw(*desc),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Columns", Styles::help_key())));
    lines.extend(COLUMNS.iter().map(|(name, desc)| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", name), Styles::dim()),
            Span::raw(*desc),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Counts at the top always cover the whole collection, not the filtered rows.",
        Styles::help(),
    )));
    lines
}
