//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Registration, RegistrationType};
use crate::view::{Column, TypeFilter};

use super::state::{AppState, InputMode, PAGE_SIZE, PopupState};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Re-fetch the collection.
    Reload,
    /// Put `text` on the clipboard and confirm with `what`.
    Copy { what: &'static str, text: String },
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if is_ctrl_c(&key) {
        return KeyAction::Quit;
    }
    match state.popup {
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::Help { .. } => return handle_help(state, key),
        PopupState::Columns { .. } => return handle_columns(state, key),
        PopupState::None => {}
    }
    if state.session.error().is_some() {
        return handle_error_overlay(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Search => handle_search_mode(state, key),
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let PopupState::Help { scroll } = state.popup else {
        return KeyAction::None;
    };
    let scroll = match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.popup = PopupState::None;
            return KeyAction::None;
        }
        KeyCode::Up | KeyCode::Char('k') => scroll.saturating_sub(1),
        // Clamped during render
        KeyCode::Down | KeyCode::Char('j') => scroll.saturating_add(1),
        KeyCode::PageUp => scroll.saturating_sub(PAGE_SIZE),
        KeyCode::PageDown => scroll.saturating_add(PAGE_SIZE),
        KeyCode::Home => 0,
        _ => scroll,
    };
    state.popup = PopupState::Help { scroll };
    KeyAction::None
}

fn handle_columns(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let PopupState::Columns { cursor } = state.popup else {
        return KeyAction::None;
    };
    let columns = Column::all();
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('q') => {
            state.popup = PopupState::None;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.popup = PopupState::Columns {
                cursor: cursor.saturating_sub(1),
            };
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.popup = PopupState::Columns {
                cursor: (cursor + 1).min(columns.len() - 1),
            };
        }
        KeyCode::Char(' ') => {
            if let Some(column) = columns.get(cursor) {
                state.toggle_column(*column);
            }
        }
        KeyCode::Char('p') => state.toggle_column(Column::Phone),
        KeyCode::Char('o') => state.toggle_column(Column::Company),
        KeyCode::Char('d') => state.toggle_column(Column::Date),
        _ => {}
    }
    KeyAction::None
}

/// Keys accepted while the blocking error overlay is shown.
fn handle_error_overlay(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Reload,
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('?') => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }
        KeyCode::Char('c') => {
            state.popup = PopupState::Columns { cursor: 0 };
            KeyAction::None
        }
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Reload,

        // Filters
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Search;
            KeyAction::None
        }
        KeyCode::Char('t') => {
            state.view.type_filter = state.view.type_filter.next();
            KeyAction::None
        }
        KeyCode::Char('1') => {
            state.view.type_filter = TypeFilter::All;
            KeyAction::None
        }
        KeyCode::Char('2') => {
            state.view.type_filter = TypeFilter::Only(RegistrationType::Student);
            KeyAction::None
        }
        KeyCode::Char('3') => {
            state.view.type_filter = TypeFilter::Only(RegistrationType::Professional);
            KeyAction::None
        }
        KeyCode::Char('o') => {
            state.view.sort_order = state.view.sort_order.toggle();
            KeyAction::None
        }
        KeyCode::Char('x') => {
            if state.view.is_filtered() {
                state.view.clear_filters();
                state.set_status("Filters cleared");
            }
            KeyAction::None
        }

        // Clipboard
        KeyCode::Char('y') => copy_selected(state, "Email", |r| Some(r.email.as_str())),
        KeyCode::Char('Y') => copy_selected(state, "Phone", |r| r.phone.as_deref()),

        // Row navigation
        KeyCode::Up | KeyCode::Char('k') => {
            state.table.select_up();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.table.select_down();
            KeyAction::None
        }
        KeyCode::PageUp => {
            state.table.page_up(PAGE_SIZE);
            KeyAction::None
        }
        KeyCode::PageDown => {
            state.table.page_down(PAGE_SIZE);
            KeyAction::None
        }
        KeyCode::Home => {
            state.table.home();
            KeyAction::None
        }
        KeyCode::End => {
            state.table.end();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Handles keys while typing a search; every edit re-filters immediately.
fn handle_search_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => state.input_mode = InputMode::Normal,
        KeyCode::Esc => {
            state.view.search.clear();
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.view.search.pop();
        }
        KeyCode::Char(c) => state.view.search.push(c),
        _ => {}
    }
    KeyAction::None
}

fn copy_selected(
    state: &mut AppState,
    what: &'static str,
    field: impl Fn(&Registration) -> Option<&str>,
) -> KeyAction {
    let Some(record) = state.selected_record() else {
        state.set_status("No registration selected");
        return KeyAction::None;
    };
    match field(record).map(str::to_string) {
        Some(text) => KeyAction::Copy { what, text },
        None => {
            state.set_status(format!("{} not provided", what));
            KeyAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{FixtureSource, RecordSource};
    use crate::view::{SortOrder, ViewState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ready_state() -> AppState {
        let mut state = AppState::new("Admin", "sample data", ViewState::default());
        let generation = state.session.begin_load().unwrap();
        let report = FixtureSource::sample().fetch_all();
        state.session.finish_load(generation, report);
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let mut state = ready_state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(state.popup, PopupState::None);

        handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut state = ready_state();
        state.input_mode = InputMode::Search;
        state.popup = PopupState::Help { scroll: 0 };
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_search_edits_are_live() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('/')));
        assert_eq!(state.input_mode, InputMode::Search);

        // Letters that are bindings in normal mode go to the search box.
        type_text(&mut state, "tqo");
        assert_eq!(state.view.search, "tqo");
        assert_eq!(state.popup, PopupState::None);

        handle_key(&mut state, key(KeyCode::Backspace));
        assert_eq!(state.view.search, "tq");

        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.view.search, "tq");
    }

    #[test]
    fn test_escape_clears_search() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('/')));
        type_text(&mut state, "alex");
        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.view.search.is_empty());
    }

    #[test]
    fn test_type_filter_keys() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('t')));
        assert_eq!(
            state.view.type_filter,
            TypeFilter::Only(RegistrationType::Student)
        );
        handle_key(&mut state, key(KeyCode::Char('t')));
        assert_eq!(
            state.view.type_filter,
            TypeFilter::Only(RegistrationType::Professional)
        );
        handle_key(&mut state, key(KeyCode::Char('t')));
        assert_eq!(state.view.type_filter, TypeFilter::All);

        handle_key(&mut state, key(KeyCode::Char('3')));
        assert_eq!(
            state.view.type_filter,
            TypeFilter::Only(RegistrationType::Professional)
        );
        handle_key(&mut state, key(KeyCode::Char('1')));
        assert_eq!(state.view.type_filter, TypeFilter::All);
    }

    #[test]
    fn test_sort_toggle_and_clear_filters() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('o')));
        assert_eq!(state.view.sort_order, SortOrder::Oldest);

        state.view.search = "tech".to_string();
        handle_key(&mut state, key(KeyCode::Char('2')));
        handle_key(&mut state, key(KeyCode::Char('x')));
        assert!(!state.view.is_filtered());
        // Sort order is not a filter.
        assert_eq!(state.view.sort_order, SortOrder::Oldest);
    }

    #[test]
    fn test_column_menu_toggles() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('c')));
        assert_eq!(state.popup, PopupState::Columns { cursor: 0 });

        // Letters toggle directly.
        handle_key(&mut state, key(KeyCode::Char('d')));
        assert!(!state.view.columns.date);

        // Space toggles the highlighted entry.
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Char(' ')));
        let highlighted = Column::all()[1];
        assert!(!state.view.columns.is_visible(highlighted));

        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn test_help_popup_scrolls_and_closes() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('?')));
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.popup, PopupState::Help { scroll: 2 });
        // Normal-mode bindings are blocked while help is open.
        handle_key(&mut state, key(KeyCode::Char('t')));
        assert_eq!(state.view.type_filter, TypeFilter::All);
        handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn test_copy_requires_selection() {
        let mut state = ready_state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('y'))), KeyAction::None);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_copy_email_of_selected_record() {
        let mut state = ready_state();
        let email = state.session.records()[0].email.clone();
        state.table.tracked_id = Some(state.session.records()[0].id.clone());

        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('y'))),
            KeyAction::Copy {
                what: "Email",
                text: email
            }
        );
    }

    #[test]
    fn test_copy_missing_phone_reports_status() {
        let mut state = ready_state();
        // Marcus Johnson has no phone on file.
        let record = state
            .session
            .records()
            .iter()
            .find(|r| r.id.as_str() == "3")
            .unwrap();
        assert!(record.phone.is_none());
        state.table.tracked_id = Some(record.id.clone());
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('Y'))), KeyAction::None);
        assert_eq!(
            state.status_message.as_ref().map(|m| m.text.as_str()),
            Some("Phone not provided")
        );
    }

    #[test]
    fn test_error_overlay_offers_reload() {
        let mut state = AppState::new("Admin", "http://localhost:5000", ViewState::default());
        let generation = state.session.begin_load().unwrap();
        state.session.finish_load(
            generation,
            Err(crate::provider::ConnectionError::Status { code: 503 }),
        );

        // Filter keys are swallowed by the overlay.
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('t'))), KeyAction::None);
        assert_eq!(state.view.type_filter, TypeFilter::All);

        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), KeyAction::Reload);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('r'))), KeyAction::Reload);
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(state.popup, PopupState::QuitConfirm);
    }

    #[test]
    fn test_navigation_clears_tracking() {
        let mut state = ready_state();
        state.table.tracked_id = Some(state.session.records()[0].id.clone());
        handle_key(&mut state, key(KeyCode::End));
        assert_eq!(state.table.tracked_id, None);
        assert_eq!(state.table.selected, usize::MAX);
    }
}
