//! Blocking overlay shown when the collection could not be loaded.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

use super::centered;

pub fn render_error_overlay(frame: &mut Frame, area: Rect, message: &str, source: &str) {
    let popup_width = (area.width * 70 / 100).clamp(40, 90);
    let popup_area = centered(area, popup_width, 10);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(" Connection Error ", Styles::error()))
        .borders(Borders::ALL)
        .border_style(Styles::error());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content = vec![
        Line::from(Span::styled(
            "Failed to connect to the registration store.",
            Styles::error(),
        )),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(Span::styled(format!("source: {}", source), Styles::dim())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" or ", Styles::help()),
            Span::styled("r", Styles::help_key()),
            Span::styled(" → retry   ", Styles::help()),
            Span::styled("q", Styles::help_key()),
            Span::styled(" → quit", Styles::help()),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
