//! Form field descriptors and value objects

use serde::{Deserialize, Serialize};

/// Which control a field is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Select,
    Number,
    Date,
    Readonly,
}

/// A choice offered by a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

impl From<&str> for SelectOption {
    fn from(value: &str) -> Self {
        Self::new(value, value)
    }
}

impl From<(&str, &str)> for SelectOption {
    fn from((value, label): (&str, &str)) -> Self {
        Self::new(value, label)
    }
}

/// Type-safe field values
///
/// Serialized untagged so a record reads as a plain JSON object.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// True for values that do not satisfy a required field
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Number(_) => false,
        }
    }

    /// Text representation used by controls and list rows
    pub fn display(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// Declarative description of one form input
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: Option<String>,
    pub required: bool,
    pub options: Vec<SelectOption>,
    pub default_value: Option<FieldValue>,
    pub rows: Option<u16>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    /// Number of grid columns (1 or 2) the field occupies
    pub grid_column_span: Option<u16>,
}

impl FieldDescriptor {
    fn new(id: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            placeholder: None,
            required: false,
            options: Vec::new(),
            default_value: None,
            rows: None,
            min: None,
            max: None,
            step: None,
            grid_column_span: None,
        }
    }

    /// Create a single-line text field
    pub fn text(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Text)
    }

    /// Create a multi-line text field
    pub fn textarea(id: &str, label: &str, rows: u16) -> Self {
        Self::new(id, label, FieldKind::Textarea).rows(rows)
    }

    /// Create a select field from bare strings or value/label pairs
    pub fn select<I, O>(id: &str, label: &str, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<SelectOption>,
    {
        let mut field = Self::new(id, label, FieldKind::Select);
        field.options = options.into_iter().map(Into::into).collect();
        field
    }

    pub fn number(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Number)
    }

    /// Create a date field holding an ISO `YYYY-MM-DD` string
    pub fn date(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Date).placeholder("YYYY-MM-DD")
    }

    /// Create a display-only field showing `value`
    pub fn readonly(id: &str, label: &str, value: impl Into<FieldValue>) -> Self {
        Self::new(id, label, FieldKind::Readonly).default_value(value)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Make the field span both grid columns
    pub fn full_width(mut self) -> Self {
        self.grid_column_span = Some(2);
        self
    }

    pub fn column_span(&self) -> u16 {
        self.grid_column_span.unwrap_or(1).clamp(1, 2)
    }

    /// Label of the option whose value equals `value`
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}
