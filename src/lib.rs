//! Study Global - student registration wizard and office table
//!
//! This library provides the core of the Study Global terminal application:
//! a five-step registration wizard over a single nested application record,
//! a pluggable submission boundary, and a small office table with filtering,
//! paging and row deletion.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The registration aggregate, typed field paths and offices
//! - `wizard`: Step sequencing, input coercion and the IELTS composite band
//! - `submission`: Where a finished application goes
//! - `storage`: JSON file storage for drafts, offices and submissions
//! - `services`: Business logic shared by the CLI and the TUI
//! - `audit`: Audit logging system
//! - `display`: Plain-text formatting for the CLI
//! - `export`: JSON/YAML application export and CSV office export
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use studyglobal::models::Field;
//! use studyglobal::wizard::WizardController;
//!
//! let mut wizard = WizardController::new();
//! wizard.apply_input(Field::IeltsListening, "7.5");
//! wizard.advance();
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod submission;
pub mod tui;
pub mod wizard;

pub use error::{StudyError, StudyResult};
