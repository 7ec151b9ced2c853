//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, LevelFilter};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::Settings;
use crate::storage::Storage;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Mutes the `log` facade until dropped.
///
/// env_logger writes to stderr, which would draw over the alternate screen.
pub struct QuietLogs {
    previous: LevelFilter,
}

impl QuietLogs {
    pub fn new() -> Self {
        let previous = log::max_level();
        log::set_max_level(LevelFilter::Off);
        Self { previous }
    }
}

impl Default for QuietLogs {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for QuietLogs {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(storage: &Storage, settings: &Settings) -> Result<()> {
    let mut app = App::new(storage, settings)?;
    let mut terminal = init_terminal()?;
    let quiet = QuietLogs::new();
    let events = EventHandler::default();

    let outcome = event_loop(&mut terminal, &mut app, &events);
    let closed = close_session(&mut app, outcome);
    drop(quiet);
    restore_terminal()?;
    closed?;

    info!("tui closed");
    Ok(())
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, events.next()?)?;
    }
    Ok(())
}

/// Save unsaved answers, then report the event loop's own error if it had one
fn close_session(app: &mut App, outcome: Result<()>) -> Result<()> {
    let saved = app.save_if_dirty();
    outcome?;
    saved?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::StudyPaths;
    use crate::models::Field;
    use anyhow::anyhow;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage, Settings::default())
    }

    #[test]
    fn test_loop_error_still_saves_answers() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();
        app.wizard.apply_input(Field::FirstName, "Zainab");
        app.dirty = true;

        let result = close_session(&mut app, Err(anyhow!("terminal went away")));

        assert_eq!(result.unwrap_err().to_string(), "terminal went away");
        assert!(!app.dirty);
        let draft = storage.drafts.load().unwrap().unwrap();
        assert_eq!(draft.state.personal.full_name.first_name, "Zainab");
    }

    #[test]
    fn test_clean_session_writes_nothing() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        close_session(&mut app, Ok(())).unwrap();
        assert!(storage.drafts.load().unwrap().is_none());
    }

    #[test]
    fn test_quiet_logs_restores_level() {
        log::set_max_level(LevelFilter::Info);
        {
            let _quiet = QuietLogs::new();
            assert_eq!(log::max_level(), LevelFilter::Off);
        }
        assert_eq!(log::max_level(), LevelFilter::Info);
    }
}
