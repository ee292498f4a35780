//! Note creation dialog

use crate::state::{CreationType, FieldDescriptor, FieldValue, FormValues, WizardConfig};

fn types() -> Vec<CreationType> {
    vec![
        CreationType::new("meeting", "Meeting Notes", "Summary of a meeting")
            .in_category("Interaction"),
        CreationType::new("call", "Call Log", "Notes from a phone or video call")
            .in_category("Interaction"),
        CreationType::new("memo", "Investment Memo", "Analysis supporting a decision")
            .in_category("Investment")
            .with_extra("visibility", "Advisors"),
        CreationType::new("reminder", "Personal Reminder", "Something to follow up on")
            .in_category("Personal"),
    ]
}

fn fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text("title", "Title").required(),
        FieldDescriptor::text("linkedRecord", "Linked Record").placeholder("Company, person or deal"),
        FieldDescriptor::select("visibility", "Visibility", ["Private", "Family", "Advisors"])
            .default_value("Private"),
        FieldDescriptor::textarea("content", "Content", 8)
            .required()
            .full_width(),
    ]
}

/// Titles start from the template name, dated in the user's local calendar
fn on_type_select(creation_type: &CreationType) -> FormValues {
    let today = chrono::Local::now().date_naive();
    let mut values: FormValues = [(
        "title",
        FieldValue::Text(format!("{} - {}", creation_type.name, today.format("%Y-%m-%d"))),
    )]
    .into_iter()
    .collect();
    if let Some(visibility) = creation_type.extra("visibility") {
        values.set("visibility", FieldValue::from(visibility));
    }
    values
}

pub fn config() -> WizardConfig {
    WizardConfig {
        title: "Add Note".to_string(),
        description: "Capture meeting notes, memos and reminders".to_string(),
        record_kind_label: "Note".to_string(),
        avatar_letter: 'N',
        avatar_color: "cyan".to_string(),
        types: types(),
        type_selection_title: "Pick a note template".to_string(),
        form_fields: fields(),
        required_fields: vec!["title".to_string(), "content".to_string()],
        header_content: None,
        on_type_select,
    }
}
