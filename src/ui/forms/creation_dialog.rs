//! Two-step creation dialog drawn over the records view

use super::field_renderer::{draw_field, draw_help_text, field_height, grid_rows};
use super::type_selector::draw_type_selection;
use crate::platform::{CLOSE_SHORTCUT, SAVE_SHORTCUT};
use crate::state::{CreationWizard, WizardStep, CATEGORY_KEY};
use crate::ui::components::{centered_rect, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::str::FromStr;

const DIALOG_WIDTH: u16 = 96;
const DIALOG_HEIGHT: u16 = 40;

/// Accent color for the avatar, falling back to cyan for unknown names
fn avatar_color(name: &str) -> Color {
    Color::from_str(name).unwrap_or(Color::Cyan)
}

/// Index of the first grid row to draw so that `active_row` fits in `available` rows
fn first_visible_row(heights: &[u16], active_row: usize, available: u16) -> usize {
    let mut start = active_row.min(heights.len().saturating_sub(1));
    let mut used = heights.get(start).copied().unwrap_or(0);
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }
    start
}

/// Draw the creation dialog
pub fn draw_creation_dialog(frame: &mut Frame, wizard: &CreationWizard) {
    let config = wizard.config();
    let accent = avatar_color(&config.avatar_color);
    let area = centered_rect(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" New {} ", config.record_kind_label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_height = 2 + u16::from(config.header_content.is_some());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Step body
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1), // Help
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_header(frame, chunks[0], wizard, accent);

    match wizard.step() {
        WizardStep::TypeSelection => {
            draw_type_selection(frame, chunks[2], wizard);
            draw_help_text(
                frame,
                chunks[4],
                &[
                    ("↑↓", "select"),
                    ("Enter", "choose"),
                    ("type", "filter"),
                    ("Esc", "close"),
                ],
            );
        }
        WizardStep::FormEditing => {
            draw_form(frame, chunks[2], wizard);
            draw_footer(frame, chunks[3], wizard);
            draw_help_text(
                frame,
                chunks[4],
                &[
                    ("Tab", "next"),
                    ("←→", "options"),
                    (SAVE_SHORTCUT, "save"),
                    ("Esc", "back"),
                    (CLOSE_SHORTCUT, "close"),
                ],
            );
        }
    }
}

fn draw_header(frame: &mut Frame, area: Rect, wizard: &CreationWizard, accent: Color) {
    let config = wizard.config();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", config.avatar_letter),
                Style::default()
                    .bg(accent)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                config.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            config.description.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(content) = &config.header_content {
        lines.push(Line::from(Span::styled(
            content.as_str(),
            Style::default().fg(Color::Yellow),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_form(frame: &mut Frame, area: Rect, wizard: &CreationWizard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    if let Some(selected) = wizard.selected_type() {
        let mut spans = vec![
            Span::styled("Type: ", Style::default().fg(Color::DarkGray)),
            Span::styled(selected.name.as_str(), Style::default().fg(Color::Cyan)),
        ];
        let category = wizard.values().text(CATEGORY_KEY);
        if !category.is_empty() {
            spans.push(Span::styled(
                format!(" · {category}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    }

    let controls = wizard.controls();
    let rows = grid_rows(&controls);
    let heights: Vec<u16> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|&i| field_height(&controls[i]))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let active_row = rows
        .iter()
        .position(|row| row.contains(&wizard.active_field()))
        .unwrap_or(0);

    let body = chunks[1];
    let start = first_visible_row(&heights, active_row, body.height);
    for (row_idx, row_area) in row_areas(&heights, start, body) {
        let row = &rows[row_idx];
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row_area);

        for (slot, &idx) in row.iter().enumerate() {
            let control = &controls[idx];
            let cell = if control.span >= 2 {
                row_area
            } else {
                columns[slot]
            };
            let cell = Rect {
                height: field_height(control).min(row_area.height),
                ..cell
            };
            draw_field(frame, cell, control, idx == wizard.active_field());
        }
    }
}

/// Areas of the grid rows drawn from `start` on, stacked inside `body`
///
/// Rows that do not fit are left out, except the first one, which is
/// clipped so the active field is always drawn.
fn row_areas(heights: &[u16], start: usize, body: Rect) -> Vec<(usize, Rect)> {
    let bottom = body.y + body.height;
    let mut areas = Vec::new();
    let mut y = body.y;
    for (idx, &height) in heights.iter().enumerate().skip(start) {
        let height = if areas.is_empty() {
            height.min(bottom - y)
        } else if y + height > bottom {
            break;
        } else {
            height
        };
        if height == 0 {
            break;
        }
        areas.push((idx, Rect::new(body.x, y, body.width, height)));
        y += height;
    }
    areas
}

fn draw_footer(frame: &mut Frame, area: Rect, wizard: &CreationWizard) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(10), // Back
            Constraint::Length(10), // Save
        ])
        .split(area);

    let missing = wizard.missing_required();
    if !missing.is_empty() {
        let text = Paragraph::new(Line::from(vec![
            Span::styled("Required: ", Style::default().fg(Color::Red)),
            Span::styled(missing.join(", "), Style::default().fg(Color::DarkGray)),
        ]))
        .wrap(Wrap { trim: true });
        frame.render_widget(
            text,
            Rect {
                y: chunks[0].y + 1,
                height: chunks[0].height.saturating_sub(1),
                ..chunks[0]
            },
        );
    }

    render_button(frame, chunks[1], "Back", false, true);
    render_button(frame, chunks[2], "Save", true, missing.is_empty());
}
