//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the oldest queued error, noting how many more are waiting
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, remaining: usize) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];
    if remaining > 0 {
        hint.push(Span::styled(
            format!(" ({remaining} more)"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
