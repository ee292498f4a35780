//! Selectable creation templates

use std::collections::BTreeMap;

/// A sub-variant of a record kind offered in the type selection step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub is_custom: bool,
    /// Additional template attributes read by `on_type_select` hooks
    pub extra: BTreeMap<String, String>,
}

impl CreationType {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: None,
            is_custom: false,
            extra: BTreeMap::new(),
        }
    }

    pub fn in_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn custom(mut self) -> Self {
        self.is_custom = true;
        self
    }

    pub fn with_extra(mut self, key: &str, value: &str) -> Self {
        self.extra.insert(key.to_string(), value.to_string());
        self
    }

    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }

    /// Case-insensitive match against name, description and category
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let t = CreationType::new("llc", "LLC", "Limited liability company")
            .in_category("Operating Entity")
            .with_extra("jurisdiction", "Delaware");
        assert_eq!(t.category.as_deref(), Some("Operating Entity"));
        assert_eq!(t.extra("jurisdiction"), Some("Delaware"));
        assert!(!t.is_custom);
        assert!(t.clone().custom().is_custom);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let t = CreationType::new("trust", "Revocable Trust", "Living trust")
            .in_category("Estate Planning");
        assert!(t.matches("TRUST"));
        assert!(t.matches("estate"));
        assert!(t.matches("  "));
        assert!(!t.matches("llc"));
    }
}
