//! Field rendering utilities for forms

use crate::state::{ControlInput, FieldControl};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field takes on screen, borders included
pub fn field_height(control: &FieldControl) -> u16 {
    control.content_rows() + 2
}

/// Pack controls into grid rows of at most two columns
///
/// Full-width controls always get a row of their own.
pub fn grid_rows(controls: &[FieldControl]) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut half: Option<usize> = None;

    for (idx, control) in controls.iter().enumerate() {
        if control.span >= 2 {
            if let Some(open) = half.take() {
                rows.push(vec![open]);
            }
            rows.push(vec![idx]);
        } else if let Some(open) = half.take() {
            rows.push(vec![open, idx]);
        } else {
            half = Some(idx);
        }
    }
    if let Some(open) = half {
        rows.push(vec![open]);
    }
    rows
}

/// Draw a form field from its control description
pub fn draw_field(frame: &mut Frame, area: Rect, control: &FieldControl, is_active: bool) {
    let accent = if !control.is_editable() {
        Color::DarkGray
    } else if is_active {
        Color::Cyan
    } else {
        Color::Gray
    };
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = vec![Span::styled(
        format!(" {}", control.label),
        Style::default().fg(accent),
    )];
    if control.required {
        title.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    if !control.is_editable() {
        title.push(Span::styled(
            " (locked)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    title.push(Span::raw(" "));

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = Paragraph::new(field_lines(control, is_active)).wrap(Wrap { trim: false });
    frame.render_widget(content.block(block), area);
}

/// Lines drawn inside the field border
fn field_lines(control: &FieldControl, is_active: bool) -> Vec<Line<'static>> {
    let cursor_style = Style::default().fg(Color::Cyan);
    let value_style = if control.is_editable() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value = control.display_value();

    if let ControlInput::Select { .. } = control.input {
        let arrow_style = if is_active {
            cursor_style
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let shown = if value.is_empty() {
            Span::styled(
                control.placeholder.clone().unwrap_or_else(|| "Select...".to_string()),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::styled(value, value_style)
        };
        return vec![Line::from(vec![
            Span::styled("◂ ", arrow_style),
            shown,
            Span::styled(" ▸", arrow_style),
        ])];
    }

    let cursor = is_active && control.is_editable();
    let mut lines: Vec<Line> = if value.is_empty() {
        let placeholder = control.placeholder.clone().unwrap_or_default();
        vec![Line::from(Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else if control.is_multiline() {
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(value.clone(), value_style))]
    };

    if cursor {
        // Cursor goes after the value, or before the placeholder
        if value.is_empty() {
            lines[0].spans.insert(0, Span::styled("▌", cursor_style));
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled("▌", cursor_style));
        }
    }

    if matches!(control.input, ControlInput::Date(_)) && !value.is_empty() {
        let hint = if control.is_complete_date() {
            Span::styled("  ✓", Style::default().fg(Color::Green))
        } else {
            Span::styled("  YYYY-MM-DD", Style::default().fg(Color::Yellow))
        };
        if let Some(last) = lines.last_mut() {
            last.spans.push(hint);
        }
    }

    lines
}

/// Draw help text at the bottom of the form
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {action}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
