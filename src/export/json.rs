//! JSON export of the application
//!
//! Exports the wizard session (aggregate, progress and derived scores) with
//! schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StudyError, StudyResult};
use crate::models::RegistrationState;
use crate::wizard::WizardController;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported application document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// One-based step the session was on
    pub current_step: usize,

    /// One-based steps completed so far
    pub completed_steps: Vec<usize>,

    pub progress_percent: u8,

    /// Derived IELTS overall band
    pub ielts_overall: Option<f64>,

    pub profile: RegistrationState,
}

impl ApplicationExport {
    pub fn from_wizard(wizard: &WizardController) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            current_step: wizard.current().number(),
            completed_steps: wizard.completed().iter().map(|s| s.number()).collect(),
            progress_percent: wizard.progress_percent(),
            ielts_overall: wizard.ielts_overall(),
            profile: wizard.state().clone(),
        }
    }
}

/// Export the application as JSON
pub fn export_application_json<W: Write>(
    wizard: &WizardController,
    writer: &mut W,
    pretty: bool,
) -> StudyResult<()> {
    let export = ApplicationExport::from_wizard(wizard);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| StudyError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| StudyError::Export(e.to_string()))?;
    Ok(())
}
