//! Header widget showing title, source, and search or status.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Min(20),    // Title
        Constraint::Length(32), // Source
        Constraint::Length(40), // Search/Status
    ])
    .split(area);

    let title = Paragraph::new(format!(" {}", state.title)).style(Styles::header());
    frame.render_widget(title, chunks[0]);

    let source = Paragraph::new(format!("src: {}", state.source_label)).style(Styles::header());
    frame.render_widget(source, chunks[1]);

    let (right_content, right_style) = if let Some(msg) = &state.status_message {
        (msg.text.clone(), Styles::status())
    } else {
        match state.input_mode {
            InputMode::Search => (
                format!("Search: {}█", state.view.search),
                Styles::search_input(),
            ),
            InputMode::Normal if !state.view.search.is_empty() => {
                (format!("/{}", state.view.search), Styles::header())
            }
            InputMode::Normal => ("? help".to_string(), Styles::header()),
        }
    };
    let right = Paragraph::new(right_content).style(right_style);
    frame.render_widget(right, chunks[2]);
}
