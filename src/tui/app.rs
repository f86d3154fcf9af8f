//! Main TUI application.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use crate::provider::RecordSource;
use crate::view::ViewState;

use super::clipboard::copy_to_clipboard;
use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Startup options for the dashboard.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub title: String,
    /// Initial search, type filter, sort order and columns.
    pub view: ViewState,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            title: "Registrations Admin".to_string(),
            view: ViewState::default(),
        }
    }
}

/// Main TUI application.
pub struct App {
    source: Arc<dyn RecordSource + Send + Sync>,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App reading from `source`.
    pub fn new(source: Arc<dyn RecordSource + Send + Sync>, options: AppOptions) -> Self {
        let state = AppState::new(options.title, source.describe(), options.view);
        Self {
            source,
            state,
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Initial fetch
        self.start_load(events.sender());

        let result = self.event_loop(&mut terminal, &events);

        // Restore terminal even if the loop failed
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &EventHandler,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) => self.state.expire_status(Instant::now()),
                Ok(Event::Key(key)) => {
                    let action = handle_key(&mut self.state, key);
                    self.dispatch(action, terminal.backend_mut(), events.sender())?;
                }
                Ok(Event::Resize) => {}
                Ok(Event::Loaded { generation, result }) => {
                    self.state.session.finish_load(generation, result);
                }
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Carries out a key action. Clipboard sequences are written to `out`.
    fn dispatch<W: Write>(
        &mut self,
        action: KeyAction,
        out: &mut W,
        tx: Sender<Event>,
    ) -> io::Result<()> {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Reload => self.start_load(tx),
            KeyAction::Copy { what, text } => {
                copy_to_clipboard(out, &text)?;
                self.state.set_status(format!("{} copied", what));
            }
            KeyAction::None => {}
        }
        Ok(())
    }

    /// Starts a fetch on a worker thread unless one is already in flight.
    fn start_load(&mut self, tx: Sender<Event>) {
        let Some(generation) = self.state.session.begin_load() else {
            self.state.set_status("Sync already in progress");
            return;
        };
        info!(generation, source = %self.state.source_label, "syncing registrations");

        let source = Arc::clone(&self.source);
        thread::spawn(move || {
            let result = source.fetch_all();
            if tx.send(Event::Loaded { generation, result }).is_err() {
                warn!(generation, "event loop gone before load finished");
            }
        });
    }
}
