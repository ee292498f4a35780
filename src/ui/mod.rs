//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod records;
mod terminal;
mod widgets;

pub use terminal::TerminalGuard;
pub use widgets::render_scrollable_list;

use crate::app::App;
use components::{render_discard_dialog, render_error_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);
    records::draw(frame, main_area, app);
    layout::draw_status_bar(frame, app);

    // Overlays, innermost last
    if let Some(wizard) = app.state.creation.as_ref().filter(|w| w.is_open()) {
        forms::draw_creation_dialog(frame, wizard);
        if let Some(pending) = wizard.pending_discard() {
            render_discard_dialog(frame, pending);
        }
    } else if let Some(error) = app.state.errors.front() {
        render_error_dialog(frame, error, app.state.errors.len() - 1);
    }
}
