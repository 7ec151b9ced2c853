//! YAML export of the application
//!
//! Same document as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{StudyError, StudyResult};
use crate::export::json::ApplicationExport;
use crate::wizard::WizardController;

/// Export the application as YAML
pub fn export_application_yaml<W: Write>(
    wizard: &WizardController,
    writer: &mut W,
) -> StudyResult<()> {
    let export = ApplicationExport::from_wizard(wizard);

    writeln!(writer, "# Study Global Application Export")
        .map_err(|e| StudyError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| StudyError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| StudyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| StudyError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| StudyError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn test_yaml_export() {
        let mut wizard = WizardController::new();
        wizard.update_field(Field::PreferredCountry, "Australia");

        let mut buffer = Vec::new();
        export_application_yaml(&wizard, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Study Global Application Export"));
        assert!(text.contains("preferred_country: Australia"));

        let parsed: ApplicationExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.profile, *wizard.state());
    }
}
