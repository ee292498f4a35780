//! Application state definitions

use super::forms::{CreationWizard, FormValues};
use crate::entities::RecordKind;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use uuid::Uuid;

/// Errors kept for display at most at once
const MAX_ERRORS: usize = 5;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Records,
    /// A creation dialog is open over the records list
    Create,
}

/// A record the store has accepted
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub id: Uuid,
    pub kind: RecordKind,
    pub created_at: DateTime<Utc>,
    pub values: FormValues,
}

impl StoredRecord {
    /// Name shown in lists, taken from the first populated title field
    pub fn display_name(&self) -> String {
        self.kind
            .title_fields()
            .iter()
            .map(|id| self.values.text(id))
            .find(|s| !s.is_empty())
            .map(|s| s.lines().next().unwrap_or_default().to_string())
            .unwrap_or_else(|| format!("Untitled {}", self.kind.label()))
    }

    /// Creation type name the record was made from
    pub fn type_name(&self) -> String {
        self.values.text(super::forms::TYPE_KEY)
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    pub current_view: View,
    pub selected_kind: RecordKind,

    // Data
    pub records: Vec<StoredRecord>,
    pub counts: Vec<(RecordKind, usize)>,

    // Selection
    pub selected_index: usize,

    /// Creation dialog, present while it is open
    pub creation: Option<CreationWizard>,

    // UI state
    pub status_message: Option<String>,
    pub errors: VecDeque<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let max = self.records.len();
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn selected_record(&self) -> Option<&StoredRecord> {
        self.records.get(self.selected_index)
    }

    pub fn count_for(&self, kind: RecordKind) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Queue an error for the status bar, dropping the oldest when full
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        if self.errors.len() == MAX_ERRORS {
            self.errors.pop_front();
        }
        self.errors.push_back(message);
    }

    pub fn dismiss_error(&mut self) -> Option<String> {
        self.errors.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldValue;

    fn record(kind: RecordKind, pairs: &[(&str, &str)]) -> StoredRecord {
        StoredRecord {
            id: Uuid::new_v4(),
            kind,
            created_at: Utc::now(),
            values: pairs
                .iter()
                .map(|(k, v)| (*k, FieldValue::from(*v)))
                .collect(),
        }
    }

    mod stored_record {
        use super::*;

        #[test]
        fn test_display_name_uses_kind_title_field() {
            let r = record(RecordKind::Person, &[("fullName", "Jane Doe"), ("type", "Advisor")]);
            assert_eq!(r.display_name(), "Jane Doe");
            assert_eq!(r.type_name(), "Advisor");
        }

        #[test]
        fn test_display_name_falls_back_to_next_field() {
            let r = record(RecordKind::Note, &[("title", ""), ("content", "First\nSecond")]);
            assert_eq!(r.display_name(), "First");
        }

        #[test]
        fn test_display_name_untitled() {
            let r = record(RecordKind::File, &[]);
            assert_eq!(r.display_name(), "Untitled File");
        }
    }

    mod app_state {
        use super::*;

        #[test]
        fn test_selection_stays_in_bounds() {
            let mut state = AppState::default();
            state.move_selection_down();
            assert_eq!(state.selected_index, 0);

            state.records = vec![
                record(RecordKind::Company, &[("name", "A")]),
                record(RecordKind::Company, &[("name", "B")]),
            ];
            state.move_selection_down();
            state.move_selection_down();
            assert_eq!(state.selected_index, 1);
            assert_eq!(state.selected_record().unwrap().display_name(), "B");
            state.move_selection_up();
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_error_queue_is_bounded() {
            let mut state = AppState::default();
            for i in 0..7 {
                state.push_error(format!("error {i}"));
            }
            assert_eq!(state.errors.len(), MAX_ERRORS);
            assert_eq!(state.dismiss_error().as_deref(), Some("error 2"));
        }

        #[test]
        fn test_count_for_missing_kind_is_zero() {
            let state = AppState {
                counts: vec![(RecordKind::Company, 3)],
                ..Default::default()
            };
            assert_eq!(state.count_for(RecordKind::Company), 3);
            assert_eq!(state.count_for(RecordKind::File), 0);
        }

        #[test]
        fn test_default_view_is_records() {
            let state = AppState::default();
            assert_eq!(state.current_view, View::Records);
            assert!(state.creation.is_none());
        }
    }
}
