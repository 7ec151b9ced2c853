//! Path management for Study Global
//!
//! Resolves where settings, drafts, offices, submissions and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `STUDYGLOBAL_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/studyglobal` on Linux, `%APPDATA%\studyglobal` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::StudyError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "STUDYGLOBAL_DATA_DIR";

/// Manages all paths used by Study Global
#[derive(Debug, Clone)]
pub struct StudyPaths {
    /// Base directory for all Study Global data
    base_dir: PathBuf,
}

impl StudyPaths {
    /// Create a new StudyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no override is set.
    pub fn new() -> Result<Self, StudyError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create StudyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (drafts and offices)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory accepted applications are written to
    pub fn submissions_dir(&self) -> PathBuf {
        self.base_dir.join("submissions")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the saved wizard draft
    pub fn draft_file(&self) -> PathBuf {
        self.data_dir().join("draft.json")
    }

    /// Get the path to offices.json
    pub fn offices_file(&self) -> PathBuf {
        self.data_dir().join("offices.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), StudyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| StudyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| StudyError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.submissions_dir()).map_err(|e| {
            StudyError::Io(format!("Failed to create submissions directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if Study Global has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, StudyError> {
    ProjectDirs::from("", "", "studyglobal")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| StudyError::Config("Could not determine a home directory".into()))
}
