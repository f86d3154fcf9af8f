//! TUI widgets for regdash.

mod columns;
mod error;
mod footer;
mod header;
mod help;
mod quit_confirm;
mod registrations;
mod stats;

use ratatui::layout::Rect;

pub use columns::render_columns;
pub use error::render_error_overlay;
pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use quit_confirm::render_quit_confirm;
pub use registrations::render_registrations;
pub use stats::render_stats;

/// Rect centered in `area`, clamped to its size.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
