//! File reference creation dialog

use crate::state::{CreationType, FieldDescriptor, FieldValue, FormValues, WizardConfig};

fn types() -> Vec<CreationType> {
    vec![
        CreationType::new("legal", "Legal Document", "Operating agreement, trust deed, contract")
            .in_category("Legal"),
        CreationType::new("tax-return", "Tax Return", "Federal or state return")
            .in_category("Tax"),
        CreationType::new("k1", "Schedule K-1", "Partnership income statement")
            .in_category("Tax"),
        CreationType::new("statement", "Financial Statement", "Balance sheet, P&L or audit")
            .in_category("Financial"),
        CreationType::new("capital-call", "Capital Call Notice", "Request for committed capital")
            .in_category("Financial"),
        CreationType::new("other", "Other", "Any other document").custom(),
    ]
}

fn fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text("fileName", "File Name")
            .required()
            .placeholder("2024 Operating Agreement.pdf"),
        FieldDescriptor::readonly("documentType", "Document Type", FieldValue::Empty),
        FieldDescriptor::number("year", "Year").bounds(Some(1900.0), Some(2100.0)),
        FieldDescriptor::text("relatedTo", "Related To"),
        FieldDescriptor::select(
            "storageLocation",
            "Stored In",
            [
                ("data-room", "Data Room"),
                ("shared-drive", "Shared Drive"),
                ("vault", "Physical Vault"),
            ],
        )
        .default_value("data-room"),
        FieldDescriptor::textarea("description", "Description", 3).full_width(),
    ]
}

fn on_type_select(creation_type: &CreationType) -> FormValues {
    [(
        "documentType",
        FieldValue::from(creation_type.name.as_str()),
    )]
    .into_iter()
    .collect()
}

pub fn config() -> WizardConfig {
    WizardConfig {
        title: "Add File".to_string(),
        description: "Record where an important document lives".to_string(),
        record_kind_label: "File".to_string(),
        avatar_letter: 'F',
        avatar_color: "red".to_string(),
        types: types(),
        type_selection_title: "What kind of document?".to_string(),
        form_fields: fields(),
        required_fields: vec!["fileName".to_string()],
        header_content: Some(
            "Only a reference is stored. Keep the document itself in its storage location."
                .to_string(),
        ),
        on_type_select,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_follows_selection() {
        let k1 = types().into_iter().find(|t| t.id == "k1").unwrap();
        assert_eq!(on_type_select(&k1).text("documentType"), "Schedule K-1");
    }

    #[test]
    fn test_storage_default_is_an_option_value() {
        let storage = fields()
            .into_iter()
            .find(|f| f.id == "storageLocation")
            .unwrap();
        assert_eq!(storage.option_label("data-room"), Some("Data Room"));
    }
}
