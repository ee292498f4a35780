//! Editable control descriptions derived from field descriptors

use super::field::{FieldDescriptor, FieldKind, FieldValue, SelectOption};
use chrono::NaiveDate;

/// Longest text a date control accepts (`YYYY-MM-DD`)
const DATE_LEN: usize = 10;

/// One keystroke-level edit applied to a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    Newline,
    Clear,
    NextOption,
    PrevOption,
    StepUp,
    StepDown,
}

/// Kind-specific part of a control
#[derive(Debug, Clone, PartialEq)]
pub enum ControlInput {
    ReadOnly(String),
    TextArea {
        value: String,
        rows: u16,
    },
    Select {
        options: Vec<SelectOption>,
        selected: Option<usize>,
    },
    Number {
        value: String,
        min: Option<f64>,
        max: Option<f64>,
        step: f64,
    },
    Date(String),
    Text(String),
}

/// What the form shows for one field given its current value
#[derive(Debug, Clone, PartialEq)]
pub struct FieldControl {
    pub id: String,
    pub label: String,
    pub required: bool,
    pub placeholder: Option<String>,
    pub span: u16,
    pub input: ControlInput,
}

impl FieldControl {
    pub fn from_descriptor(field: &FieldDescriptor, value: Option<&FieldValue>) -> Self {
        let text = value.map(FieldValue::display).unwrap_or_default();
        let input = match field.kind {
            FieldKind::Readonly => ControlInput::ReadOnly(text),
            FieldKind::Textarea => ControlInput::TextArea {
                value: text,
                rows: field.rows.unwrap_or(3).max(1),
            },
            FieldKind::Select => ControlInput::Select {
                selected: field.options.iter().position(|o| o.value == text),
                options: field.options.clone(),
            },
            FieldKind::Number => ControlInput::Number {
                value: text,
                min: field.min,
                max: field.max,
                step: field.step.filter(|s| *s > 0.0).unwrap_or(1.0),
            },
            FieldKind::Date => ControlInput::Date(text),
            FieldKind::Text => ControlInput::Text(text),
        };

        Self {
            id: field.id.clone(),
            label: field.label.clone(),
            required: field.required,
            placeholder: field.placeholder.clone(),
            span: field.column_span(),
            input,
        }
    }

    pub fn is_editable(&self) -> bool {
        !matches!(self.input, ControlInput::ReadOnly(_))
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.input, ControlInput::TextArea { .. })
    }

    /// Rows of content the control needs when drawn
    pub fn content_rows(&self) -> u16 {
        match &self.input {
            ControlInput::TextArea { rows, .. } => *rows,
            _ => 1,
        }
    }

    /// Text shown inside the control
    pub fn display_value(&self) -> String {
        match &self.input {
            ControlInput::ReadOnly(v)
            | ControlInput::TextArea { value: v, .. }
            | ControlInput::Number { value: v, .. }
            | ControlInput::Date(v)
            | ControlInput::Text(v) => v.clone(),
            ControlInput::Select { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(|o| o.label.clone())
                .unwrap_or_default(),
        }
    }

    /// Whether a date control holds a complete, valid ISO date
    pub fn is_complete_date(&self) -> bool {
        match &self.input {
            ControlInput::Date(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d").is_ok(),
            _ => false,
        }
    }

    /// Value to emit as an input change for `edit`, or `None` when ignored
    pub fn apply(&self, edit: FieldEdit) -> Option<FieldValue> {
        match &self.input {
            ControlInput::ReadOnly(_) => None,
            ControlInput::Text(value) => edit_text(value, edit, false),
            ControlInput::TextArea { value, .. } => edit_text(value, edit, true),
            ControlInput::Select { options, selected } => edit_select(options, *selected, edit),
            ControlInput::Number {
                value,
                min,
                max,
                step,
            } => edit_number(value, *min, *max, *step, edit),
            ControlInput::Date(value) => edit_date(value, edit),
        }
    }
}

fn edit_text(value: &str, edit: FieldEdit, multiline: bool) -> Option<FieldValue> {
    let mut next = value.to_string();
    match edit {
        FieldEdit::Insert(c) if !c.is_control() => next.push(c),
        FieldEdit::Newline if multiline => next.push('\n'),
        FieldEdit::Backspace => {
            next.pop()?;
        }
        FieldEdit::Clear => next.clear(),
        _ => return None,
    }
    Some(FieldValue::Text(next))
}

fn edit_select(
    options: &[SelectOption],
    selected: Option<usize>,
    edit: FieldEdit,
) -> Option<FieldValue> {
    if options.is_empty() {
        return None;
    }
    let last = options.len() - 1;
    let index = match (edit, selected) {
        (FieldEdit::NextOption, None) => 0,
        (FieldEdit::NextOption, Some(i)) => {
            if i >= last {
                0
            } else {
                i + 1
            }
        }
        (FieldEdit::PrevOption, None) | (FieldEdit::PrevOption, Some(0)) => last,
        (FieldEdit::PrevOption, Some(i)) => i - 1,
        (FieldEdit::Clear, _) => return Some(FieldValue::Empty),
        _ => return None,
    };
    Some(FieldValue::Text(options[index].value.clone()))
}

/// Typed text becomes a number once it parses back to the same text;
/// partial input such as `-` or `12.` stays text so typing can continue
fn number_value(text: String) -> FieldValue {
    if text.is_empty() {
        return FieldValue::Empty;
    }
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() && FieldValue::Number(n).display() == text => {
            FieldValue::Number(n)
        }
        _ => FieldValue::Text(text),
    }
}

fn edit_number(
    value: &str,
    min: Option<f64>,
    max: Option<f64>,
    step: f64,
    edit: FieldEdit,
) -> Option<FieldValue> {
    let mut next = value.to_string();
    match edit {
        FieldEdit::Insert(c) if c.is_ascii_digit() => next.push(c),
        FieldEdit::Insert('-') if next.is_empty() => next.push('-'),
        FieldEdit::Insert('.') if !next.contains('.') => next.push('.'),
        FieldEdit::Backspace => {
            next.pop()?;
        }
        FieldEdit::Clear => next.clear(),
        FieldEdit::StepUp | FieldEdit::StepDown => {
            let current = value.parse::<f64>().ok().or(min).unwrap_or(0.0);
            let mut stepped = if edit == FieldEdit::StepUp {
                current + step
            } else {
                current - step
            };
            if let Some(min) = min {
                stepped = stepped.max(min);
            }
            if let Some(max) = max {
                stepped = stepped.min(max);
            }
            return Some(FieldValue::Number(stepped));
        }
        _ => return None,
    }
    Some(number_value(next))
}

fn edit_date(value: &str, edit: FieldEdit) -> Option<FieldValue> {
    let mut next = value.to_string();
    match edit {
        FieldEdit::Insert(c) if (c.is_ascii_digit() || c == '-') && next.len() < DATE_LEN => {
            next.push(c)
        }
        FieldEdit::Backspace => {
            next.pop()?;
        }
        FieldEdit::Clear => next.clear(),
        _ => return None,
    }
    Some(FieldValue::Text(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(field: &FieldDescriptor, value: Option<FieldValue>) -> FieldControl {
        FieldControl::from_descriptor(field, value.as_ref())
    }

    mod mapping {
        use super::*;

        #[test]
        fn test_same_input_same_control() {
            let field = FieldDescriptor::text("name", "Name").placeholder("Acme Holdings");
            let value = Some(FieldValue::from("Acme"));
            assert_eq!(control(&field, value.clone()), control(&field, value));
        }

        #[test]
        fn test_each_kind_maps_to_its_branch() {
            let cases = [
                (FieldDescriptor::text("a", "A"), "Text"),
                (FieldDescriptor::textarea("a", "A", 4), "TextArea"),
                (FieldDescriptor::select("a", "A", ["x"]), "Select"),
                (FieldDescriptor::number("a", "A"), "Number"),
                (FieldDescriptor::date("a", "A"), "Date"),
                (FieldDescriptor::readonly("a", "A", "v"), "ReadOnly"),
            ];
            for (field, expected) in cases {
                let c = control(&field, None);
                let actual = match c.input {
                    ControlInput::Text(_) => "Text",
                    ControlInput::TextArea { .. } => "TextArea",
                    ControlInput::Select { .. } => "Select",
                    ControlInput::Number { .. } => "Number",
                    ControlInput::Date(_) => "Date",
                    ControlInput::ReadOnly(_) => "ReadOnly",
                };
                assert_eq!(actual, expected);
            }
        }

        #[test]
        fn test_textarea_rows_only_affect_height() {
            let c = control(&FieldDescriptor::textarea("notes", "Notes", 5), None);
            assert_eq!(c.content_rows(), 5);
            assert!(c.is_multiline());
        }

        #[test]
        fn test_select_display_uses_label() {
            let field = FieldDescriptor::select("risk", "Risk", [("low", "Low risk")]);
            let c = control(&field, Some(FieldValue::from("low")));
            assert_eq!(c.display_value(), "Low risk");
        }

        #[test]
        fn test_required_marker_is_carried() {
            let c = control(&FieldDescriptor::text("name", "Name").required(), None);
            assert!(c.required);
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_readonly_ignores_edits() {
            let c = control(&FieldDescriptor::readonly("owner", "Owner", "Office"), None);
            assert!(!c.is_editable());
            assert_eq!(c.apply(FieldEdit::Insert('x')), None);
            assert_eq!(c.apply(FieldEdit::Clear), None);
        }

        #[test]
        fn test_text_insert_and_backspace() {
            let field = FieldDescriptor::text("name", "Name");
            let c = control(&field, Some(FieldValue::from("Ac")));
            assert_eq!(c.apply(FieldEdit::Insert('m')), Some(FieldValue::from("Acm")));
            assert_eq!(c.apply(FieldEdit::Backspace), Some(FieldValue::from("A")));
            assert_eq!(c.apply(FieldEdit::Newline), None);
        }

        #[test]
        fn test_backspace_on_empty_text_is_ignored() {
            let c = control(&FieldDescriptor::text("name", "Name"), None);
            assert_eq!(c.apply(FieldEdit::Backspace), None);
        }

        #[test]
        fn test_textarea_accepts_newline() {
            let field = FieldDescriptor::textarea("notes", "Notes", 3);
            let c = control(&field, Some(FieldValue::from("line")));
            assert_eq!(c.apply(FieldEdit::Newline), Some(FieldValue::from("line\n")));
        }

        #[test]
        fn test_select_cycles_with_wrap() {
            let field = FieldDescriptor::select("stage", "Stage", ["Lead", "Won", "Lost"]);
            let c = control(&field, None);
            assert_eq!(c.apply(FieldEdit::NextOption), Some(FieldValue::from("Lead")));
            assert_eq!(c.apply(FieldEdit::PrevOption), Some(FieldValue::from("Lost")));

            let c = control(&field, Some(FieldValue::from("Lost")));
            assert_eq!(c.apply(FieldEdit::NextOption), Some(FieldValue::from("Lead")));
            assert_eq!(c.apply(FieldEdit::Insert('x')), None);
        }

        #[test]
        fn test_select_emits_option_value_not_label() {
            let field = FieldDescriptor::select("risk", "Risk", [("low", "Low risk")]);
            let c = control(&field, None);
            assert_eq!(c.apply(FieldEdit::NextOption), Some(FieldValue::from("low")));
        }

        #[test]
        fn test_number_parses_and_keeps_partial_input() {
            let field = FieldDescriptor::number("amount", "Amount");
            let c = control(&field, None);
            assert_eq!(c.apply(FieldEdit::Insert('-')), Some(FieldValue::from("-")));
            assert_eq!(c.apply(FieldEdit::Insert('7')), Some(FieldValue::Number(7.0)));
            assert_eq!(c.apply(FieldEdit::Insert('a')), None);

            let c = control(&field, Some(FieldValue::Number(12.0)));
            assert_eq!(c.apply(FieldEdit::Insert('.')), Some(FieldValue::from("12.")));
            assert_eq!(c.apply(FieldEdit::Backspace), Some(FieldValue::Number(1.0)));
        }

        #[test]
        fn test_number_decimal_completes_after_point() {
            let field = FieldDescriptor::number("amount", "Amount");
            let c = control(&field, Some(FieldValue::from("12.")));
            assert_eq!(c.apply(FieldEdit::Insert('5')), Some(FieldValue::Number(12.5)));
        }

        #[test]
        fn test_number_clearing_last_digit_is_empty() {
            let field = FieldDescriptor::number("amount", "Amount");
            let c = control(&field, Some(FieldValue::Number(5.0)));
            assert_eq!(c.apply(FieldEdit::Backspace), Some(FieldValue::Empty));
        }

        #[test]
        fn test_number_step_clamps_to_bounds() {
            let field = FieldDescriptor::number("probability", "Probability")
                .bounds(Some(0.0), Some(100.0))
                .step(10.0);
            let c = control(&field, Some(FieldValue::Number(95.0)));
            assert_eq!(c.apply(FieldEdit::StepUp), Some(FieldValue::Number(100.0)));

            let c = control(&field, None);
            assert_eq!(c.apply(FieldEdit::StepDown), Some(FieldValue::Number(0.0)));
        }

        #[test]
        fn test_number_typing_is_not_bounded() {
            let field = FieldDescriptor::number("p", "P").bounds(Some(0.0), Some(100.0));
            let c = control(&field, Some(FieldValue::Number(99.0)));
            assert_eq!(c.apply(FieldEdit::Insert('9')), Some(FieldValue::Number(999.0)));
        }

        #[test]
        fn test_date_accepts_iso_characters_only() {
            let field = FieldDescriptor::date("close", "Close date");
            let c = control(&field, Some(FieldValue::from("2024-03-0")));
            assert_eq!(
                c.apply(FieldEdit::Insert('1')),
                Some(FieldValue::from("2024-03-01"))
            );
            assert_eq!(c.apply(FieldEdit::Insert('/')), None);

            let full = control(&field, Some(FieldValue::from("2024-03-01")));
            assert!(full.is_complete_date());
            assert_eq!(full.apply(FieldEdit::Insert('1')), None);
        }

        #[test]
        fn test_incomplete_date_is_reported() {
            let field = FieldDescriptor::date("close", "Close date");
            assert!(!control(&field, Some(FieldValue::from("2024-02-30"))).is_complete_date());
        }
    }
}
