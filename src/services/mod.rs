//! Service layer for Study Global
//!
//! The service layer provides business logic on top of the storage layer:
//! draft-backed wizard sessions and office table operations.

pub mod office;
pub mod wizard;

pub use office::{page, OfficeService, Page};
pub use wizard::WizardService;
