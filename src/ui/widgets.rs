//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a list that scrolls to keep `selected_index` visible
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}
