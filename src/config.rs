//! Configuration handling for the TUI

use crate::entities::RecordKind;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "crm_tui=info";

/// Log file name inside the platform data directory
const LOG_FILE: &str = "crm-tui.log";

/// Location of the log file; the terminal is owned by the UI while it runs
pub fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("io", "crm", "crm-tui").map(|dirs| dirs.data_dir().join(LOG_FILE))
}

/// Open `path` for appending, creating parent directories as needed
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CrmConfig {
    /// Record kind shown on startup, remembered on exit
    pub default_kind: Option<RecordKind>,
    /// Populate the store with mock records on startup
    pub seed_mock_records: Option<bool>,
    /// `tracing` filter directive
    pub log_filter: Option<String>,
}

impl CrmConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "crm", "crm-tui").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: CrmConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn default_kind(&self) -> RecordKind {
        self.default_kind.unwrap_or_default()
    }

    pub fn seed_mock_records(&self) -> bool {
        self.seed_mock_records.unwrap_or(true)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
