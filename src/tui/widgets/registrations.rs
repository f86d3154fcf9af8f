//! Registrations table widget.
//! Thin TUI wrapper over [`crate::view::registrations::build_registrations_view`].

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table};

use crate::fmt::truncate;
use crate::model::RecordId;
use crate::tui::state::RegistrationsTableState;
use crate::tui::style::Styles;
use crate::view::registrations::build_registrations_view;
use crate::view::{DerivedView, ViewState};

const SKELETON_ROWS: usize = 5;

pub fn render_registrations(
    frame: &mut Frame,
    area: Rect,
    view: &DerivedView<'_>,
    view_state: &ViewState,
    loading: bool,
    table: &mut RegistrationsTableState,
) {
    frame.render_widget(Clear, area);

    if loading {
        render_skeleton(frame, area);
        return;
    }

    let vm = build_registrations_view(view, view_state);

    // Resolve selection
    let row_ids: Vec<RecordId> = vm.rows.iter().map(|r| r.id.clone()).collect();
    table.resolve_selection(&row_ids);

    if vm.rows.is_empty() {
        let hint = if view_state.is_filtered() {
            vec![
                Line::from("No registrations match the current search or filter."),
                Line::from(vec![
                    Span::raw("Press "),
                    Span::styled("x", Styles::help_key()),
                    Span::raw(" to clear filters."),
                ]),
            ]
        } else {
            vec![Line::from("No registrations yet.")]
        };
        let msg = Paragraph::new(hint)
            .alignment(Alignment::Center)
            .style(Styles::dim())
            .block(Block::default().title(vm.title).borders(Borders::ALL));
        frame.render_widget(msg, area);
        return;
    }

    // Header
    let header_cells: Vec<Span> = vm
        .headers
        .iter()
        .map(|h| Span::styled(h.clone(), Styles::table_header()))
        .collect();
    let header = Row::new(header_cells).style(Styles::table_header());

    // Widths: the last column takes the remaining space.
    let last = vm.widths.len().saturating_sub(1);
    let widths: Vec<Constraint> = vm
        .widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            if i == last {
                Constraint::Min(w)
            } else {
                Constraint::Length(w)
            }
        })
        .collect();

    // Rows
    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|vr| {
            let style = Styles::from_class(vr.style);
            let cells = vr.cells.iter().enumerate().map(|(i, c)| {
                let text = if i == last {
                    c.text.clone()
                } else {
                    truncate(&c.text, vm.widths[i] as usize)
                };
                match c.style {
                    Some(s) => Span::styled(text, Styles::from_class(s)),
                    None => Span::raw(text),
                }
            });
            Row::new(cells).style(style)
        })
        .collect();

    let table_widget = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(vm.title)
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .column_spacing(1)
        .row_highlight_style(Styles::selected());

    frame.render_stateful_widget(table_widget, area, &mut table.ratatui_state);
}

/// Placeholder bars shown while the collection is in flight.
fn render_skeleton(frame: &mut Frame, area: Rect) {
    let bar = "░".repeat(area.width.saturating_sub(4) as usize);
    let mut lines = vec![Line::from("")];
    for _ in 0..SKELETON_ROWS {
        lines.push(Line::from(Span::styled(bar.clone(), Styles::skeleton())));
        lines.push(Line::from(""));
    }
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title("Registrations (syncing…)")
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}
