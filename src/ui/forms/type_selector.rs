//! Type selection step of the creation dialog

use crate::state::{CreationType, CreationWizard};
use crate::ui::render_scrollable_list;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Group heading used for custom types
const CUSTOM_GROUP: &str = "Custom";

/// One row of the type list: a group heading or a selectable type
#[derive(Debug, PartialEq)]
enum TypeRow<'a> {
    Heading(&'a str),
    Type { index: usize, ty: &'a CreationType },
}

/// Insert a heading whenever the category changes
fn type_rows<'a>(types: &[&'a CreationType]) -> Vec<TypeRow<'a>> {
    let mut rows = Vec::new();
    let mut current: Option<&str> = None;
    for (index, ty) in types.iter().enumerate() {
        let group = if ty.is_custom {
            Some(CUSTOM_GROUP)
        } else {
            ty.category.as_deref()
        };
        if let Some(name) = group.filter(|g| current != Some(*g)) {
            rows.push(TypeRow::Heading(name));
        }
        current = group;
        rows.push(TypeRow::Type { index, ty });
    }
    rows
}

/// Draw the filter line and the grouped list of types
pub fn draw_type_selection(frame: &mut Frame, area: Rect, wizard: &CreationWizard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Question
            Constraint::Length(3), // Filter
            Constraint::Min(0),    // Types
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        &wizard.config().type_selection_title,
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, chunks[0]);

    let filter = wizard.type_filter();
    let filter_line = if filter.is_empty() {
        Line::from(vec![
            Span::styled("▌", Style::default().fg(Color::Cyan)),
            Span::styled(
                "Type to filter",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw(filter),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ])
    };
    let filter_widget = Paragraph::new(filter_line).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(filter_widget, chunks[1]);

    let visible = wizard.visible_types();
    if visible.is_empty() {
        let empty = Paragraph::new(format!("No types match \"{filter}\"."))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, chunks[2]);
        return;
    }

    let highlighted = wizard.highlighted_type().map(|t| t.id.as_str());
    let rows = type_rows(&visible);
    let mut selected_row = 0;
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(row, entry)| match entry {
            TypeRow::Heading(name) => ListItem::new(Line::from(Span::styled(
                name.to_uppercase(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ))),
            TypeRow::Type { index, ty } => {
                let is_selected = highlighted == Some(ty.id.as_str());
                if is_selected {
                    selected_row = row;
                }
                let prefix = if is_selected { "▸ " } else { "  " };
                let name_style = if is_selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let mut spans = vec![
                    Span::styled(prefix, name_style),
                    Span::styled(format!("{}. ", index + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(ty.name.clone(), name_style),
                ];
                if ty.is_custom {
                    spans.push(Span::styled(" (custom)", Style::default().fg(Color::Magenta)));
                }
                spans.push(Span::styled(
                    format!("  {}", ty.description),
                    Style::default().fg(Color::DarkGray),
                ));
                ListItem::new(Line::from(spans))
            }
        })
        .collect();

    render_scrollable_list(frame, chunks[2], List::new(items), selected_row);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_follow_category_changes() {
        let types = [
            CreationType::new("a", "A", "").in_category("Operating"),
            CreationType::new("b", "B", "").in_category("Operating"),
            CreationType::new("c", "C", "").in_category("Advisor"),
            CreationType::new("d", "D", "").custom(),
        ];
        let refs: Vec<&CreationType> = types.iter().collect();
        let rows = type_rows(&refs);

        let headings: Vec<&str> = rows
            .iter()
            .filter_map(|r| match r {
                TypeRow::Heading(h) => Some(*h),
                TypeRow::Type { .. } => None,
            })
            .collect();
        assert_eq!(headings, vec!["Operating", "Advisor", "Custom"]);
        assert_eq!(rows.len(), 7);
    }

    #[test]
    fn test_uncategorized_types_have_no_heading() {
        let types = [CreationType::new("a", "A", ""), CreationType::new("b", "B", "")];
        let refs: Vec<&CreationType> = types.iter().collect();
        let rows = type_rows(&refs);
        assert!(rows.iter().all(|r| matches!(r, TypeRow::Type { .. })));
    }
}
