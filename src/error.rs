//! Custom error types for Study Global
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Study Global operations
#[derive(Error, Debug)]
pub enum StudyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for user input at the command boundary
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A dotted field path that names no registration field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The submission handler refused the application
    #[error("Submission failed: {0}")]
    Submission(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl StudyError {
    /// Create a "not found" error for offices
    pub fn office_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Office",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for additional degrees
    pub fn degree_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Degree",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for the saved draft
    pub fn draft_not_found() -> Self {
        Self::NotFound {
            entity_type: "Draft",
            identifier: "current".into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnknownField(_))
    }

    /// Check if a submission handler failed
    pub fn is_submission(&self) -> bool {
        matches!(self, Self::Submission(_))
    }
}

impl From<std::io::Error> for StudyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StudyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for StudyError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for StudyError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Study Global operations
pub type StudyResult<T> = Result<T, StudyError>;
