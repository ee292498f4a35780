//! Dialog components for TUI

mod base;
mod discard_dialog;
mod error_dialog;

pub use base::centered_rect;
pub use discard_dialog::render_discard_dialog;
pub use error_dialog::render_error_dialog;
