//! Export module for Study Global
//!
//! - JSON: machine-readable application export
//! - YAML: human-readable application export
//! - CSV: office table (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_offices_csv;
pub use json::{export_application_json, ApplicationExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_application_yaml;
