//! Unsaved changes prompt shown over the creation dialog

use super::base::centered_rect;
use crate::state::PendingDiscard;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the Discard/Cancel prompt for a held back close or back action
pub fn render_discard_dialog(frame: &mut Frame, pending: &PendingDiscard) {
    let dialog_area = centered_rect(frame.area(), 50, 11);

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            "Unsaved Changes",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "You have unsaved changes. Discard them and {}?",
                pending.action.label()
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    // Cancel first so the safe option is the default
    let options = [(false, "Cancel", Color::White), (true, "Discard", Color::Red)];
    for (is_discard, label, color) in options {
        let is_selected = pending.discard_selected == is_discard;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        content.push(Line::from(Span::styled(format!("{prefix}{label}"), style)));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("d", Style::default().fg(Color::Cyan)),
        Span::styled(" discard  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::new().bg(Color::Black).fg(Color::White));

    frame.render_widget(dialog, dialog_area);
}
