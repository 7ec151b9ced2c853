//! User settings for Study Global
//!
//! Defaults seeded into new registration drafts, table paging and
//! notification preferences.

use serde::{Deserialize, Serialize};

use super::paths::StudyPaths;
use crate::error::StudyError;

/// User settings for Study Global
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Residence country pre-filled on new applications
    #[serde(default = "default_residence_country")]
    pub default_residence_country: String,

    /// Admission year pre-filled on new applications
    #[serde(default = "default_year")]
    pub default_admission_year: u32,

    /// Intended intake year pre-filled on new applications
    #[serde(default = "default_year")]
    pub default_intake_year: u32,

    /// Rows per page in the office table
    #[serde(default = "default_page_size")]
    pub office_page_size: usize,

    /// How long TUI notifications stay on screen
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_residence_country() -> String {
    "Pakistan".to_string()
}

fn default_year() -> u32 {
    2025
}

fn default_page_size() -> usize {
    20
}

fn default_notification_secs() -> u64 {
    3
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_residence_country: default_residence_country(),
            default_admission_year: default_year(),
            default_intake_year: default_year(),
            office_page_size: default_page_size(),
            notification_secs: default_notification_secs(),
            audit_enabled: default_true(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &StudyPaths) -> Result<Self, StudyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| StudyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                StudyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StudyPaths) -> Result<(), StudyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| StudyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| StudyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
