//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::entities::RecordKind;
use crate::platform::{CLOSE_SHORTCUT, SAVE_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with one button per record kind
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(RecordKind::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, kind) in RecordKind::ALL.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            idx + 1,
            kind.plural(),
            app.state.count_for(*kind),
            *kind == app.state.selected_kind,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.selected_kind.plural()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        view_hints(app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    if !app.state.errors.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} error(s)", app.state.errors.len()),
            Style::default().fg(Color::Red),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

/// Keyboard hints for the current view
fn view_hints(view: View) -> String {
    match view {
        View::Records => "j/k:nav  Tab/1-6:kind  n:new  q:quit".to_string(),
        View::Create => format!("{SAVE_SHORTCUT}:save  Esc:back  {CLOSE_SHORTCUT}:close"),
    }
}
