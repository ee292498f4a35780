//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, render_sidebar_button, BUTTON_HEIGHT};
pub use dialog::{centered_rect, render_discard_dialog, render_error_dialog};
