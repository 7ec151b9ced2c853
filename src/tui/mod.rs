//! Terminal User Interface module
//!
//! An interactive front end over the same wizard and office services the CLI
//! uses: a stepper, the current step's form, the office table and toast
//! notifications.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
