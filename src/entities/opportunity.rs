//! Investment opportunity creation dialog

use crate::state::{CreationType, FieldDescriptor, FieldValue, FormValues, WizardConfig};

const STAGES: [&str; 6] = [
    "Sourcing",
    "Screening",
    "Due Diligence",
    "IC Review",
    "Closed Won",
    "Closed Lost",
];

fn types() -> Vec<CreationType> {
    vec![
        CreationType::new("direct", "Direct Investment", "Equity or debt in a private company")
            .in_category("Private Equity")
            .with_extra("assetClass", "Private Equity"),
        CreationType::new("fund", "Fund Commitment", "LP commitment to a fund")
            .in_category("Funds")
            .with_extra("assetClass", "Fund")
            .with_extra("probability", "50"),
        CreationType::new("co-invest", "Co-Investment", "Alongside a sponsor's deal")
            .in_category("Private Equity")
            .with_extra("assetClass", "Private Equity"),
        CreationType::new("venture", "Venture Round", "Early-stage startup financing")
            .in_category("Venture")
            .with_extra("assetClass", "Venture Capital")
            .with_extra("probability", "20"),
        CreationType::new("real-estate", "Real Estate", "Property acquisition or development")
            .in_category("Real Assets")
            .with_extra("assetClass", "Real Estate"),
        CreationType::new("secondary", "Secondary", "Purchase of existing LP interests")
            .in_category("Funds")
            .with_extra("assetClass", "Fund"),
    ]
}

fn fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text("name", "Opportunity Name")
            .required()
            .placeholder("Series B - Northwind Robotics"),
        FieldDescriptor::readonly("assetClass", "Asset Class", FieldValue::Empty),
        FieldDescriptor::select("stage", "Stage", STAGES).default_value("Sourcing"),
        FieldDescriptor::number("amount", "Amount (USD)")
            .required()
            .bounds(Some(0.0), None)
            .step(50_000.0),
        FieldDescriptor::number("probability", "Probability (%)")
            .bounds(Some(0.0), Some(100.0))
            .step(10.0),
        FieldDescriptor::date("expectedCloseDate", "Expected Close"),
        FieldDescriptor::text("lead", "Deal Lead"),
        FieldDescriptor::textarea("thesis", "Investment Thesis", 4).full_width(),
    ]
}

fn on_type_select(creation_type: &CreationType) -> FormValues {
    let mut values = FormValues::default();
    if let Some(asset_class) = creation_type.extra("assetClass") {
        values.set("assetClass", FieldValue::from(asset_class));
    }
    if let Some(probability) = creation_type
        .extra("probability")
        .and_then(|p| p.parse::<f64>().ok())
    {
        values.set("probability", FieldValue::Number(probability));
    }
    values
}

pub fn config() -> WizardConfig {
    WizardConfig {
        title: "Add Opportunity".to_string(),
        description: "Log a deal in the investment pipeline".to_string(),
        record_kind_label: "Opportunity".to_string(),
        avatar_letter: 'O',
        avatar_color: "yellow".to_string(),
        types: types(),
        type_selection_title: "What type of opportunity?".to_string(),
        form_fields: fields(),
        required_fields: vec!["name".to_string(), "amount".to_string()],
        header_content: None,
        on_type_select,
    }
}
