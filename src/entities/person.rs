//! Person creation dialog

use crate::state::{CreationType, FieldDescriptor, FieldValue, FormValues, WizardConfig};

const RELATIONSHIPS: [&str; 7] = [
    "Family Member",
    "Advisor",
    "Executive",
    "Attorney",
    "Accountant",
    "Banker",
    "Other",
];

fn types() -> Vec<CreationType> {
    vec![
        CreationType::new("family", "Family Member", "A member of the family")
            .in_category("Family"),
        CreationType::new("advisor", "Advisor", "Wealth, investment or estate advisor")
            .in_category("Professional"),
        CreationType::new("executive", "Executive", "Leader at a portfolio company")
            .in_category("Professional"),
        CreationType::new("attorney", "Attorney", "Outside or in-house counsel")
            .in_category("Service Provider"),
        CreationType::new("accountant", "Accountant", "CPA or tax preparer")
            .in_category("Service Provider"),
        CreationType::new("banker", "Banker", "Private banker or relationship manager")
            .in_category("Service Provider"),
        CreationType::new("other", "Other", "Any other contact").custom(),
    ]
}

fn fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text("fullName", "Full Name")
            .required()
            .placeholder("Jane Doe"),
        FieldDescriptor::text("email", "Email").placeholder("jane@example.com"),
        FieldDescriptor::text("phone", "Phone"),
        FieldDescriptor::text("jobTitle", "Title"),
        FieldDescriptor::text("company", "Company"),
        FieldDescriptor::select("relationship", "Relationship", RELATIONSHIPS),
        FieldDescriptor::date("birthday", "Birthday"),
        FieldDescriptor::textarea("notes", "Notes", 3).full_width(),
    ]
}

/// The chosen type doubles as the relationship to the family
fn on_type_select(creation_type: &CreationType) -> FormValues {
    if RELATIONSHIPS.contains(&creation_type.name.as_str()) {
        [(
            "relationship",
            FieldValue::from(creation_type.name.as_str()),
        )]
        .into_iter()
        .collect()
    } else {
        FormValues::default()
    }
}

pub fn config() -> WizardConfig {
    WizardConfig {
        title: "Add Person".to_string(),
        description: "Add a family member, advisor or other contact".to_string(),
        record_kind_label: "Person".to_string(),
        avatar_letter: 'P',
        avatar_color: "green".to_string(),
        types: types(),
        type_selection_title: "Who are you adding?".to_string(),
        form_fields: fields(),
        required_fields: vec!["fullName".to_string()],
        header_content: None,
        on_type_select,
    }
}
