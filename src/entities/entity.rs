//! Legal entity creation dialog

use crate::state::{CreationType, FieldDescriptor, FieldValue, FormValues, WizardConfig};

const JURISDICTIONS: [&str; 7] = [
    "Delaware",
    "Wyoming",
    "Nevada",
    "New York",
    "South Dakota",
    "Cayman Islands",
    "Other",
];

fn types() -> Vec<CreationType> {
    vec![
        CreationType::new("llc", "LLC", "Limited liability company")
            .in_category("Operating Entity")
            .with_extra("jurisdiction", "Delaware"),
        CreationType::new(
            "holding",
            "Holding Company",
            "Parent company holding family assets",
        )
        .in_category("Operating Entity")
        .with_extra("jurisdiction", "Delaware"),
        CreationType::new("lp", "Limited Partnership", "Fund or investment partnership")
            .in_category("Investment Vehicle")
            .with_extra("jurisdiction", "Delaware"),
        CreationType::new("revocable-trust", "Revocable Trust", "Living trust")
            .in_category("Trust"),
        CreationType::new(
            "irrevocable-trust",
            "Irrevocable Trust",
            "Dynasty, GRAT or other irrevocable trust",
        )
        .in_category("Trust")
        .with_extra("jurisdiction", "South Dakota"),
        CreationType::new("foundation", "Private Foundation", "Charitable foundation")
            .in_category("Philanthropy"),
        CreationType::new("series-llc", "Series LLC", "LLC with segregated series")
            .in_category("Operating Entity")
            .with_extra("jurisdiction", "Wyoming")
            .custom(),
    ]
}

fn fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text("name", "Legal Name")
            .required()
            .placeholder("Doe Family Holdings LLC"),
        FieldDescriptor::readonly("entityType", "Entity Type", FieldValue::Empty),
        FieldDescriptor::select("jurisdiction", "Jurisdiction", JURISDICTIONS).required(),
        FieldDescriptor::text("taxId", "Tax ID").placeholder("XX-XXXXXXX"),
        FieldDescriptor::date("formationDate", "Formation Date"),
        FieldDescriptor::select("status", "Status", ["Active", "Pending", "Dissolved"])
            .default_value("Active"),
        FieldDescriptor::textarea("purpose", "Purpose", 3).full_width(),
    ]
}

fn on_type_select(creation_type: &CreationType) -> FormValues {
    let mut values: FormValues = [(
        "entityType",
        FieldValue::from(creation_type.name.as_str()),
    )]
    .into_iter()
    .collect();
    if let Some(jurisdiction) = creation_type.extra("jurisdiction") {
        values.set("jurisdiction", FieldValue::from(jurisdiction));
    }
    values
}

pub fn config() -> WizardConfig {
    WizardConfig {
        title: "Add Entity".to_string(),
        description: "Register a trust, partnership or company in the family structure"
            .to_string(),
        record_kind_label: "Entity".to_string(),
        avatar_letter: 'E',
        avatar_color: "magenta".to_string(),
        types: types(),
        type_selection_title: "Choose an entity type".to_string(),
        form_fields: fields(),
        required_fields: vec!["name".to_string(), "jurisdiction".to_string()],
        header_content: None,
        on_type_select,
    }
}
