//! Company creation dialog

use crate::state::{CreationType, FieldDescriptor, FieldValue, FormValues, WizardConfig};

const INDUSTRIES: [&str; 8] = [
    "Technology",
    "Healthcare",
    "Financial Services",
    "Real Estate",
    "Consumer",
    "Industrials",
    "Energy",
    "Other",
];

fn types() -> Vec<CreationType> {
    vec![
        CreationType::new("private", "Private Company", "Privately held operating business")
            .in_category("Operating"),
        CreationType::new("public", "Public Company", "Listed company tracked for holdings")
            .in_category("Operating"),
        CreationType::new(
            "family-business",
            "Family Business",
            "Business owned and run by the family",
        )
        .in_category("Operating"),
        CreationType::new("investment-firm", "Investment Firm", "Asset manager or GP")
            .in_category("Investment")
            .with_extra("industry", "Financial Services"),
        CreationType::new(
            "service-provider",
            "Service Provider",
            "Law firm, accountant, bank or other vendor",
        )
        .in_category("Advisor")
        .with_extra("relationship", "Vendor"),
    ]
}

fn fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text("name", "Company Name")
            .required()
            .placeholder("Acme Holdings"),
        FieldDescriptor::select("industry", "Industry", INDUSTRIES),
        FieldDescriptor::text("website", "Website").placeholder("https://"),
        FieldDescriptor::text("headquarters", "Headquarters").placeholder("City, Country"),
        FieldDescriptor::number("founded", "Founded")
            .bounds(Some(1800.0), Some(2100.0))
            .placeholder("1998"),
        FieldDescriptor::number("employees", "Employees").bounds(Some(0.0), None),
        FieldDescriptor::select(
            "relationship",
            "Relationship",
            ["Portfolio Company", "Prospect", "Vendor", "Partner"],
        )
        .default_value("Prospect"),
        FieldDescriptor::textarea("description", "Description", 3).full_width(),
    ]
}

fn on_type_select(creation_type: &CreationType) -> FormValues {
    ["industry", "relationship"]
        .into_iter()
        .filter_map(|key| {
            creation_type
                .extra(key)
                .map(|value| (key, FieldValue::from(value)))
        })
        .collect()
}

pub fn config() -> WizardConfig {
    WizardConfig {
        title: "Add Company".to_string(),
        description: "Track an operating business, manager or service provider".to_string(),
        record_kind_label: "Company".to_string(),
        avatar_letter: 'C',
        avatar_color: "blue".to_string(),
        types: types(),
        type_selection_title: "What kind of company is this?".to_string(),
        form_fields: fields(),
        required_fields: vec!["name".to_string()],
        header_content: None,
        on_type_select,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_extras_prefill_fields() {
        let config = config();
        let firm = config
            .types
            .iter()
            .find(|t| t.id == "investment-firm")
            .unwrap();
        let values = on_type_select(firm);
        assert_eq!(values.text("industry"), "Financial Services");
        assert!(!values.contains_key("relationship"));
    }

    #[test]
    fn test_prefilled_industry_is_an_option() {
        let config = config();
        let industry = config.form_fields.iter().find(|f| f.id == "industry").unwrap();
        for t in &config.types {
            if let Some(value) = t.extra("industry") {
                assert!(industry.option_label(value).is_some());
            }
        }
    }
}
