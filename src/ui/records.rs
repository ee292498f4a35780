//! Records list and detail views

use super::render_scrollable_list;
use crate::app::App;
use crate::state::{StoredRecord, CATEGORY_KEY, TYPE_KEY};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the records of the selected kind with the selected record's details
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_list(frame, chunks[0], app);
    draw_detail(frame, chunks[1], app.state.selected_record());
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let kind = app.state.selected_kind;
    let block = Block::default()
        .title(format!(" {} ", kind.plural()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let records = &app.state.records;
    if records.is_empty() {
        let content = Paragraph::new(format!(
            "No {} yet.\nPress 'n' to add one.",
            kind.plural().to_lowercase()
        ))
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(record.display_name(), style.add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {}", record.type_name()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    render_scrollable_list(frame, area, List::new(items).block(block), app.state.selected_index);
}

fn draw_detail(frame: &mut Frame, area: Rect, record: Option<&StoredRecord>) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(record) = record else {
        frame.render_widget(block, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            record.display_name(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} · created {}",
                record.type_name(),
                record.created_at.format("%Y-%m-%d %H:%M")
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (key, value) in record.values.iter() {
        if key == TYPE_KEY || key == CATEGORY_KEY || value.is_blank() {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{key}: "), Style::default().fg(Color::Yellow)),
            Span::raw(value.display()),
        ]));
    }

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(detail, area);
}
