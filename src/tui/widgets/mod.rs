//! Reusable TUI widgets

pub mod input;
pub mod notification;

pub use input::{InputLine, TextInput};
pub use notification::{Level, Notification, NotificationQueue, NotificationWidget};
