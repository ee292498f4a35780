//! Cursor and filter state for the type selection step

use super::creation_type::CreationType;

/// Highlighted row and search text of the type list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypePicker {
    pub highlighted: usize,
    pub filter: String,
}

impl TypePicker {
    /// Types matching the filter, built-in templates before custom ones
    pub fn visible<'a>(&self, types: &'a [CreationType]) -> Vec<&'a CreationType> {
        let (builtin, custom): (Vec<_>, Vec<_>) = types
            .iter()
            .filter(|t| t.matches(&self.filter))
            .partition(|t| !t.is_custom);
        builtin.into_iter().chain(custom).collect()
    }

    pub fn highlighted<'a>(&self, types: &'a [CreationType]) -> Option<&'a CreationType> {
        self.visible(types).get(self.highlighted).copied()
    }

    pub fn move_down(&mut self, types: &[CreationType]) {
        let count = self.visible(types).len();
        if count > 0 && self.highlighted < count - 1 {
            self.highlighted += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn push_filter(&mut self, c: char) {
        self.filter.push(c);
        self.highlighted = 0;
    }

    pub fn pop_filter(&mut self) {
        self.filter.pop();
        self.highlighted = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types() -> Vec<CreationType> {
        vec![
            CreationType::new("custom", "Co-Invest SPV", "Custom vehicle").custom(),
            CreationType::new("llc", "LLC", "Limited liability company"),
            CreationType::new("trust", "Trust", "Irrevocable trust"),
        ]
    }

    #[test]
    fn test_custom_types_listed_last() {
        let types = types();
        let picker = TypePicker::default();
        let ids: Vec<&str> = picker.visible(&types).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["llc", "trust", "custom"]);
    }

    #[test]
    fn test_movement_stays_in_range() {
        let types = types();
        let mut picker = TypePicker::default();
        picker.move_up();
        assert_eq!(picker.highlighted, 0);
        for _ in 0..10 {
            picker.move_down(&types);
        }
        assert_eq!(picker.highlighted, 2);
        assert_eq!(picker.highlighted(&types).unwrap().id, "custom");
    }

    #[test]
    fn test_filter_resets_highlight() {
        let types = types();
        let mut picker = TypePicker::default();
        picker.move_down(&types);
        picker.push_filter('t');
        picker.push_filter('r');
        assert_eq!(picker.highlighted, 0);
        assert_eq!(picker.highlighted(&types).unwrap().id, "trust");

        picker.push_filter('x');
        assert!(picker.highlighted(&types).is_none());
        picker.pop_filter();
        assert_eq!(picker.filter, "tr");
    }
}
