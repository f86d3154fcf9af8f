//! Column visibility menu.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;
use crate::view::{Column, ColumnVisibility};

use super::centered;

fn hotkey(column: Column) -> char {
    match column {
        Column::Phone => 'p',
        Column::Company => 'o',
        Column::Date => 'd',
    }
}

pub fn render_columns(frame: &mut Frame, area: Rect, columns: &ColumnVisibility, cursor: usize) {
    let popup_area = centered(area, 36, Column::all().len() as u16 + 4);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Columns ")
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines: Vec<Line> = Column::all()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let mark = if columns.is_visible(*column) { "[x]" } else { "[ ]" };
            let style = if i == cursor {
                Styles::selected()
            } else {
                Styles::default()
            };
            Line::from(vec![
                Span::styled(format!(" {} ", hotkey(*column)), Styles::help_key()),
                Span::styled(format!("{} {}", mark, column.label()), style),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Space: toggle  Esc: close",
        Styles::help(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
