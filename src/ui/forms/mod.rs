//! Form rendering module
//!
//! This module contains UI components for rendering the creation dialog:
//! - `field_renderer`: Field rendering and grid packing
//! - `type_selector`: Type selection step
//! - `creation_dialog`: Dialog frame, header, form step and footer

mod creation_dialog;
mod field_renderer;
mod type_selector;

pub use creation_dialog::draw_creation_dialog;
