//! Terminal dashboard over a [`RecordSource`](crate::provider::RecordSource).

mod app;
mod clipboard;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::{App, AppOptions};
pub use state::AppState;
