//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::view::project;

use super::state::{AppState, PopupState};
use super::widgets::{
    render_columns, render_error_overlay, render_footer, render_header, render_help,
    render_quit_confirm, render_registrations, render_stats,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(3), // Stat cards
        Constraint::Min(5),    // Registrations
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_header(frame, chunks[0], state);

    // Records are empty unless the session is ready, so nothing is projected
    // while loading or after a failure.
    let view = project(state.session.records(), &state.view);
    let loading = state.session.is_loading();

    render_stats(frame, chunks[1], &view.stats, loading);
    render_registrations(
        frame,
        chunks[2],
        &view,
        &state.view,
        loading,
        &mut state.table,
    );
    render_footer(
        frame,
        chunks[3],
        view.rows.len(),
        view.stats.total,
        state.session.rejected().len(),
        state.session.loaded_at(),
    );

    if let Some(message) = state.session.error() {
        render_error_overlay(frame, area, message, &state.source_label);
    }

    // Popups (rendered last to overlay everything)
    match &mut state.popup {
        PopupState::None => {}
        PopupState::Help { scroll } => render_help(frame, area, scroll),
        PopupState::Columns { cursor } => render_columns(frame, area, &state.view.columns, *cursor),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
    }
}
