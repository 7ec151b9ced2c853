//! Display formatting for terminal output
//!
//! Provides utilities for formatting offices and applications for the CLI.

pub mod application;
pub mod office;

pub use application::{format_application, format_section, format_wizard_status, StepMarker};
pub use office::{format_office_details, format_office_list, format_office_page};
