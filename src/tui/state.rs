//! Application state management.

use std::time::{Duration, Instant};

use ratatui::widgets::TableState as RatatuiTableState;

use crate::model::{RecordId, Registration};
use crate::session::Session;
use crate::view::{Column, ViewState};

/// How long a toast stays in the header.
pub const STATUS_TTL: Duration = Duration::from_secs(3);

/// Rows moved by PageUp/PageDown.
pub const PAGE_SIZE: usize = 10;

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search box; every keystroke re-filters.
    Search,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Column visibility menu with the highlighted entry.
    Columns { cursor: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Temporary message shown in the header (copy confirmations, hints).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

/// Selection state of the registrations table.
#[derive(Debug, Default)]
pub struct RegistrationsTableState {
    pub selected: usize,
    /// Follows the selected record across filter and sort changes.
    pub tracked_id: Option<RecordId>,
    pub ratatui_state: RatatuiTableState,
}

impl RegistrationsTableState {
    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.tracked_id = None;
    }

    pub fn select_down(&mut self) {
        self.selected = self.selected.saturating_add(1);
        self.tracked_id = None;
    }

    pub fn page_up(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
        self.tracked_id = None;
    }

    pub fn page_down(&mut self, n: usize) {
        self.selected = self.selected.saturating_add(n);
        self.tracked_id = None;
    }

    pub fn home(&mut self) {
        self.selected = 0;
        self.tracked_id = None;
    }

    pub fn end(&mut self) {
        self.selected = usize::MAX;
        self.tracked_id = None;
    }

    /// Resolves selection after filtering/sorting: applies the tracked id,
    /// clamps the selected index, and syncs ratatui state.
    /// `row_ids` is the ordered list of ids in the current view.
    pub fn resolve_selection(&mut self, row_ids: &[RecordId]) {
        if let Some(tracked) = &self.tracked_id {
            if let Some(idx) = row_ids.iter().position(|id| id == tracked) {
                self.selected = idx;
            } else {
                self.tracked_id = None;
            }
        }

        if !row_ids.is_empty() {
            self.selected = self.selected.min(row_ids.len() - 1);
            self.tracked_id = Some(row_ids[self.selected].clone());
            self.ratatui_state.select(Some(self.selected));
        } else {
            self.selected = 0;
            self.tracked_id = None;
            self.ratatui_state.select(None);
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    /// Header title.
    pub title: String,
    /// Where records come from, for the header.
    pub source_label: String,
    /// Records and load lifecycle.
    pub session: Session,
    /// Projector inputs: search, type filter, sort order, columns.
    pub view: ViewState,
    /// Input mode.
    pub input_mode: InputMode,
    /// Active popup state. Only one popup can be open at a time.
    pub popup: PopupState,
    /// Registrations table selection.
    pub table: RegistrationsTableState,
    /// Temporary status message shown in the header.
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    pub fn new(title: impl Into<String>, source_label: impl Into<String>, view: ViewState) -> Self {
        Self {
            title: title.into(),
            source_label: source_label.into(),
            session: Session::new(),
            view,
            input_mode: InputMode::Normal,
            popup: PopupState::None,
            table: RegistrationsTableState::default(),
            status_message: None,
        }
    }

    /// Shows `text` in the header for [`STATUS_TTL`].
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            expires_at: Instant::now() + STATUS_TTL,
        });
    }

    /// Drops the status message once it has expired.
    pub fn expire_status(&mut self, now: Instant) {
        if self
            .status_message
            .as_ref()
            .is_some_and(|m| m.expires_at <= now)
        {
            self.status_message = None;
        }
    }

    /// The record under the cursor, if the session is ready and it is visible.
    pub fn selected_record(&self) -> Option<&Registration> {
        let id = self.table.tracked_id.as_ref()?;
        self.session.records().iter().find(|r| &r.id == id)
    }

    /// Toggles a column and reports it in the header.
    pub fn toggle_column(&mut self, column: Column) {
        self.view.columns.toggle(column);
        let state = if self.view.columns.is_visible(column) {
            "shown"
        } else {
            "hidden"
        };
        self.set_status(format!("{} {}", column.label(), state));
    }
}
