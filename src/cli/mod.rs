//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod office;
pub mod wizard;

pub use office::{handle_office_command, OfficeCommands};
pub use wizard::{handle_wizard_command, DegreeCommands, WizardCommands};
