//! Core data models for Study Global
//!
//! The registration aggregate edited by the wizard, its typed field paths
//! and suggested choices, and the office records shown in the office table.

pub mod choices;
pub mod field;
pub mod ids;
pub mod office;
pub mod registration;

pub use field::{Field, FieldKind, FieldValue};
pub use ids::{DegreeId, SubmissionId};
pub use office::{Location, Manager, Office, OfficeStatus};
pub use registration::{
    AcademicBackground, AdditionalDegree, DegreeField, FinancialAndDocumentation,
    PersonalDetails, PreferencesAndGoals, RegistrationState, Section, TestScores,
};
