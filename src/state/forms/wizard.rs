//! Two-step record creation wizard
//!
//! A [`CreationWizard`] is parameterized by a declarative [`WizardConfig`]:
//! the user first picks a [`CreationType`], then fills in the configured
//! fields. Leaving the form with unsaved changes goes through the
//! [`DirtyStateGuard`]. Saving hands the collected [`FormValues`] back to the
//! caller, which owns persistence.

use super::control::{FieldControl, FieldEdit};
use super::creation_type::CreationType;
use super::field::{FieldDescriptor, FieldValue};
use super::form_values::{FormValues, CATEGORY_KEY, TYPE_KEY};
use super::guard::{DirtyStateGuard, DiscardAction, PendingDiscard};
use super::type_picker::TypePicker;
use std::collections::HashSet;
use thiserror::Error;

/// Derives initial values from the selected creation type
pub type TypeSelectHook = fn(&CreationType) -> FormValues;

/// Declarative parameters of a creation dialog
#[derive(Debug, Clone)]
pub struct WizardConfig {
    pub title: String,
    pub description: String,
    pub record_kind_label: String,
    pub avatar_letter: char,
    /// Styling token resolved by the UI
    pub avatar_color: String,
    pub types: Vec<CreationType>,
    pub type_selection_title: String,
    pub form_fields: Vec<FieldDescriptor>,
    pub required_fields: Vec<String>,
    /// Note shown above the form fields
    pub header_content: Option<String>,
    pub on_type_select: TypeSelectHook,
}

/// Rejected wizard configurations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("field id `{0}` is declared more than once")]
    DuplicateField(String),
    #[error("no creation types configured for {0}")]
    NoTypes(String),
}

/// Operations invoked in a step that does not allow them
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("the dialog is not open")]
    NotOpen,
    #[error("no creation type has been selected")]
    NoTypeSelected,
    #[error("a creation type is already selected")]
    TypeAlreadySelected,
    #[error("unknown creation type `{0}`")]
    UnknownType(String),
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("required fields are missing: {}", .0.join(", "))]
    MissingRequired(Vec<String>),
}

/// Current step of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    TypeSelection,
    FormEditing,
}

/// Externally visible outcome of a wizard transition
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    /// The dialog was closed without saving
    Closed,
}

/// Session state of one creation dialog
#[derive(Debug, Clone)]
pub struct CreationWizard {
    config: WizardConfig,
    is_open: bool,
    selected_type: Option<CreationType>,
    values: FormValues,
    guard: DirtyStateGuard,
    active_field: usize,
    type_picker: TypePicker,
}

impl CreationWizard {
    pub fn new(config: WizardConfig) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for field in &config.form_fields {
            if !seen.insert(field.id.as_str()) {
                return Err(ConfigError::DuplicateField(field.id.clone()));
            }
        }
        if config.types.is_empty() {
            return Err(ConfigError::NoTypes(config.record_kind_label.clone()));
        }

        let values = FormValues::from_defaults(&config.form_fields);
        Ok(Self {
            config,
            is_open: false,
            selected_type: None,
            values,
            guard: DirtyStateGuard::default(),
            active_field: 0,
            type_picker: TypePicker::default(),
        })
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn step(&self) -> WizardStep {
        if self.selected_type.is_some() {
            WizardStep::FormEditing
        } else {
            WizardStep::TypeSelection
        }
    }

    pub fn selected_type(&self) -> Option<&CreationType> {
        self.selected_type.as_ref()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn is_dirty(&self) -> bool {
        self.guard.is_dirty()
    }

    pub fn pending_discard(&self) -> Option<&PendingDiscard> {
        self.guard.pending()
    }

    /// Open the dialog on a fresh session
    pub fn open(&mut self) {
        self.reset();
        self.is_open = true;
        tracing::debug!("Opened {} creation dialog", self.config.record_kind_label);
    }

    fn reset(&mut self) {
        self.selected_type = None;
        self.values = FormValues::from_defaults(&self.config.form_fields);
        self.guard.reset();
        self.active_field = 0;
        self.type_picker = TypePicker::default();
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.is_open {
            Ok(())
        } else {
            Err(WizardError::NotOpen)
        }
    }

    fn ensure_editing(&self) -> Result<(), WizardError> {
        self.ensure_open()?;
        if self.selected_type.is_none() {
            return Err(WizardError::NoTypeSelected);
        }
        Ok(())
    }

    /// Choose a creation type and move on to the form
    pub fn select_type(&mut self, type_id: &str) -> Result<(), WizardError> {
        self.ensure_open()?;
        if self.selected_type.is_some() {
            return Err(WizardError::TypeAlreadySelected);
        }
        let creation_type = self
            .config
            .types
            .iter()
            .find(|t| t.id == type_id)
            .cloned()
            .ok_or_else(|| WizardError::UnknownType(type_id.to_string()))?;

        let mut values = FormValues::from_defaults(&self.config.form_fields);
        let mut hooked = (self.config.on_type_select)(&creation_type);
        hooked.retain(|id| self.descriptor(id).is_some());
        values.overlay(hooked);
        values.set(TYPE_KEY, FieldValue::from(creation_type.name.as_str()));
        if let Some(category) = &creation_type.category {
            values.set(CATEGORY_KEY, FieldValue::from(category.as_str()));
        }

        tracing::debug!(
            "Selected {} type `{}`",
            self.config.record_kind_label,
            creation_type.id
        );
        self.values = values;
        self.selected_type = Some(creation_type);
        self.active_field = self.first_editable_field();
        self.guard.mark_dirty();
        Ok(())
    }

    pub fn type_filter(&self) -> &str {
        &self.type_picker.filter
    }

    /// Types offered for the current filter, in display order
    pub fn visible_types(&self) -> Vec<&CreationType> {
        self.type_picker.visible(&self.config.types)
    }

    pub fn highlighted_type(&self) -> Option<&CreationType> {
        self.type_picker.highlighted(&self.config.types)
    }

    pub fn highlight_next_type(&mut self) {
        self.type_picker.move_down(&self.config.types);
    }

    pub fn highlight_prev_type(&mut self) {
        self.type_picker.move_up();
    }

    pub fn push_type_filter(&mut self, c: char) {
        self.type_picker.push_filter(c);
    }

    pub fn pop_type_filter(&mut self) {
        self.type_picker.pop_filter();
    }

    pub fn clear_type_filter(&mut self) {
        self.type_picker = TypePicker::default();
    }

    /// Select whichever type is highlighted in the picker
    pub fn select_highlighted_type(&mut self) -> Result<(), WizardError> {
        let type_id = self
            .type_picker
            .highlighted(&self.config.types)
            .map(|t| t.id.clone())
            .ok_or_else(|| WizardError::UnknownType(self.type_picker.filter.clone()))?;
        self.select_type(&type_id)
    }

    /// Record a new value for `field_id`
    pub fn input_change(&mut self, field_id: &str, value: FieldValue) -> Result<(), WizardError> {
        self.ensure_editing()?;
        if !self.config.form_fields.iter().any(|f| f.id == field_id) {
            return Err(WizardError::UnknownField(field_id.to_string()));
        }
        self.values.set(field_id, value);
        self.guard.mark_dirty();
        Ok(())
    }

    /// Go back to type selection, asking first when there are unsaved changes
    pub fn request_back(&mut self) -> Result<(), WizardError> {
        self.ensure_editing()?;
        if let Some(action) = self.guard.request(DiscardAction::Back) {
            self.perform(action);
        }
        Ok(())
    }

    /// Close the dialog, asking first when there are unsaved changes
    pub fn request_close(&mut self) -> Option<WizardEvent> {
        if !self.is_open {
            return None;
        }
        let action = self.guard.request(DiscardAction::Close)?;
        self.perform(action)
    }

    /// Discard the edits and carry out the held back action
    pub fn confirm_discard(&mut self) -> Option<WizardEvent> {
        let action = self.guard.confirm()?;
        tracing::debug!("Discarded unsaved {} edits", self.config.record_kind_label);
        self.perform(action)
    }

    /// Keep editing; the form is left untouched
    pub fn cancel_discard(&mut self) {
        self.guard.cancel();
    }

    pub fn toggle_discard_selection(&mut self) {
        self.guard.toggle_selection();
    }

    fn perform(&mut self, action: DiscardAction) -> Option<WizardEvent> {
        self.reset();
        match action {
            DiscardAction::Back => None,
            DiscardAction::Close => {
                self.is_open = false;
                Some(WizardEvent::Closed)
            }
        }
    }

    /// True when every required field holds a non-empty value
    pub fn is_form_valid(&self) -> bool {
        self.values
            .missing(&self.config.required_fields)
            .is_empty()
    }

    /// Labels of required fields that still block saving
    pub fn missing_required(&self) -> Vec<String> {
        self.values
            .missing(&self.config.required_fields)
            .into_iter()
            .map(|id| {
                self.descriptor(id)
                    .map(|f| f.label.clone())
                    .unwrap_or_else(|| id.to_string())
            })
            .collect()
    }

    /// Finish the wizard, returning the record and closing the dialog
    pub fn save(&mut self) -> Result<FormValues, WizardError> {
        self.ensure_editing()?;
        if !self.is_form_valid() {
            return Err(WizardError::MissingRequired(self.missing_required()));
        }
        let record = std::mem::take(&mut self.values);
        tracing::debug!(
            "Saving {} with {} values",
            self.config.record_kind_label,
            record.len()
        );
        self.reset();
        self.is_open = false;
        Ok(record)
    }

    pub fn descriptor(&self, id: &str) -> Option<&FieldDescriptor> {
        self.config.form_fields.iter().find(|f| f.id == id)
    }

    /// Controls for every field, in declaration order
    pub fn controls(&self) -> Vec<FieldControl> {
        self.config
            .form_fields
            .iter()
            .map(|f| FieldControl::from_descriptor(f, self.values.get(&f.id)))
            .collect()
    }

    pub fn active_field(&self) -> usize {
        self.active_field
    }

    pub fn active_control(&self) -> Option<FieldControl> {
        self.config
            .form_fields
            .get(self.active_field)
            .map(|f| FieldControl::from_descriptor(f, self.values.get(&f.id)))
    }

    /// Apply a keystroke to the focused field
    ///
    /// Returns `Ok(true)` when the edit changed the form.
    pub fn edit_active(&mut self, edit: FieldEdit) -> Result<bool, WizardError> {
        self.ensure_editing()?;
        let Some(control) = self.active_control() else {
            return Ok(false);
        };
        match control.apply(edit) {
            Some(value) => {
                self.input_change(&control.id, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn first_editable_field(&self) -> usize {
        self.controls()
            .iter()
            .position(FieldControl::is_editable)
            .unwrap_or(0)
    }

    pub fn next_field(&mut self) {
        let count = self.config.form_fields.len();
        if count > 0 {
            self.active_field = (self.active_field + 1) % count;
        }
    }

    pub fn prev_field(&mut self) {
        let count = self.config.form_fields.len();
        if count == 0 {
            return;
        }
        if self.active_field == 0 {
            self.active_field = count - 1;
        } else {
            self.active_field -= 1;
        }
    }
}
