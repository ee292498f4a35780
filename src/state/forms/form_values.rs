//! Current values of a creation form

use super::field::{FieldDescriptor, FieldValue};
use serde::Serialize;
use std::collections::BTreeMap;

/// Synthetic key holding the selected creation type's name
pub const TYPE_KEY: &str = "type";
/// Synthetic key holding the selected creation type's category
pub const CATEGORY_KEY: &str = "category";

/// Mapping from field id to its current value
///
/// This is also the record handed to the store on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    /// Values for a fresh form: exactly the fields that declare a default
    pub fn from_defaults(fields: &[FieldDescriptor]) -> Self {
        fields
            .iter()
            .filter_map(|f| f.default_value.clone().map(|v| (f.id.clone(), v)))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.0.get(id)
    }

    pub fn set(&mut self, id: impl Into<String>, value: FieldValue) {
        self.0.insert(id.into(), value);
    }

    /// Apply `other` on top of these values; `other` wins on collisions
    pub fn overlay(&mut self, other: FormValues) {
        self.0.extend(other.0);
    }

    /// Keep only the entries whose id passes `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|id, _| keep(id));
    }

    /// True when `id` holds a value that satisfies a required field
    pub fn has_value(&self, id: &str) -> bool {
        self.0.get(id).is_some_and(|v| !v.is_blank())
    }

    /// Required ids that do not hold a value yet, in the given order
    pub fn missing<'a>(&self, required: &'a [String]) -> Vec<&'a str> {
        required
            .iter()
            .filter(|id| !self.has_value(id))
            .map(String::as_str)
            .collect()
    }

    /// Text of `id`, or an empty string when absent
    pub fn text(&self, id: &str) -> String {
        self.0.get(id).map(FieldValue::display).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for FormValues {
    fn from_iter<T: IntoIterator<Item = (K, FieldValue)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
