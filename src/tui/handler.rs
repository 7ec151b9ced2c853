//! Event handler for the TUI
//!
//! Routes key events to the wizard form, the office table, the input line or
//! the help dialog depending on the current state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveView, App, InputMode};
use super::event::Event;
use super::widgets::TextInput;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.toggle_help();
        }
        return Ok(());
    }

    match app.input_mode {
        InputMode::Editing => handle_editing_key(app, key),
        InputMode::Filter => handle_filter_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }

    Ok(())
}

/// Keys that work in both views
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('o') | KeyCode::Tab => app.toggle_view(),
        _ => match app.active_view {
            ActiveView::Wizard => handle_wizard_key(app, key),
            ActiveView::Offices => handle_office_key(app, key),
        },
    }
}

fn handle_wizard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next_row(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev_row(),
        KeyCode::Enter => app.begin_edit(),
        KeyCode::Left => app.cycle_selected(false),
        KeyCode::Right => app.cycle_selected(true),
        KeyCode::Char(' ') => app.toggle_selected_flag(),

        KeyCode::Char('n') => app.next_step(),
        KeyCode::Char('p') => app.prev_step(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            app.jump_to_step(index);
        }

        KeyCode::Char('a') => app.add_degree(),
        KeyCode::Char('x') => app.remove_selected_degree(),

        KeyCode::Char('s') => app.save_draft(),
        KeyCode::Char('S') => app.submit(),
        _ => {}
    }
}

fn handle_office_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next_office(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev_office(),
        KeyCode::Char(' ') => app.toggle_office_mark(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_offices(),
        KeyCode::Char('/') => app.begin_filter(),
        KeyCode::Esc => app.end_filter(false),
        _ => {}
    }
}

/// Keys while typing a field value
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        code => edit_text(&mut app.input, code),
    }
}

/// Keys while typing the office filter. The table follows every keystroke.
fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.end_filter(true),
        KeyCode::Esc => app.end_filter(false),
        code => {
            edit_text(&mut app.office_filter, code);
            app.refresh_offices();
        }
    }
}

fn edit_text(input: &mut TextInput, code: KeyCode) {
    match code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::StudyPaths;
    use crate::config::Settings;
    use crate::models::Field;
    use crate::storage::Storage;
    use crate::tui::app::FormRow;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage, Settings::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_edit_first_field_with_keys() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Sara q");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.wizard.state().personal.full_name.first_name, "Sara");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_step_keys() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.wizard.current().index(), 0);

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.wizard.current().index(), 2);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.wizard.current().index(), 0);

        // step 3 was visited but never completed
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.wizard.current().index(), 0);
        assert!(app.notifications.is_empty());

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.wizard.current().index(), 1);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.wizard.current().index(), 0);
    }

    #[test]
    fn test_cycle_choice_with_arrows() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();
        app.selected_row = app
            .form_rows()
            .iter()
            .position(|row| *row == FormRow::Field(Field::Gender))
            .unwrap();

        press(&mut app, KeyCode::Right);
        assert_eq!(app.wizard.state().personal.gender, "Male");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.wizard.state().personal.gender, "Female");
        press(&mut app, KeyCode::Left);
        assert_eq!(app.wizard.state().personal.gender, "Male");
    }

    #[test]
    fn test_help_swallows_keys() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.wizard.current().index(), 0);

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_office_view_keys() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.active_view, ActiveView::Offices);

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "renovation");
        assert_eq!(app.input_mode, InputMode::Filter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.offices.len(), 1);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.marked_offices.len(), 1);
        press(&mut app, KeyCode::Char('d'));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.offices.len(), 9);

        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.active_view, ActiveView::Wizard);
    }

    #[test]
    fn test_quit_keys() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        // q while typing is text, not quit
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_editing() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        press(&mut app, KeyCode::Enter);
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }
}
