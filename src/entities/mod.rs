//! Record kinds and their creation dialog configurations
//!
//! Each submodule is pure data: the creation types, fields and required
//! fields of one record kind.

mod company;
mod entity;
mod file;
mod note;
mod opportunity;
mod person;

use crate::state::WizardConfig;
use serde::{Deserialize, Serialize};

/// The kinds of records the CRM can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Company,
    Person,
    Entity,
    Opportunity,
    Note,
    File,
}

impl RecordKind {
    pub const ALL: [RecordKind; 6] = [
        Self::Company,
        Self::Person,
        Self::Entity,
        Self::Opportunity,
        Self::Note,
        Self::File,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Person => "Person",
            Self::Entity => "Entity",
            Self::Opportunity => "Opportunity",
            Self::Note => "Note",
            Self::File => "File",
        }
    }

    /// Plural label used for list titles and the sidebar
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Company => "Companies",
            Self::Person => "People",
            Self::Entity => "Entities",
            Self::Opportunity => "Opportunities",
            Self::Note => "Notes",
            Self::File => "Files",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Creation dialog configuration for this kind
    pub fn config(&self) -> WizardConfig {
        match self {
            Self::Company => company::config(),
            Self::Person => person::config(),
            Self::Entity => entity::config(),
            Self::Opportunity => opportunity::config(),
            Self::Note => note::config(),
            Self::File => file::config(),
        }
    }

    /// Field ids tried, in order, when naming a stored record
    pub fn title_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Person => &["fullName", "email"],
            Self::Note => &["title", "content"],
            Self::File => &["fileName"],
            _ => &["name"],
        }
    }
}
