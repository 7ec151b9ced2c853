//! Registration wizard core
//!
//! A five-step state machine over the registration aggregate. This module is
//! independent of any front end; the CLI and TUI both drive a
//! [`WizardController`].

pub mod coerce;
pub mod composite;
pub mod controller;
pub mod step;

pub use composite::{composite_score, round_to_half};
pub use controller::{SubmitOutcome, WizardController, WizardSnapshot};
pub use step::Step;
