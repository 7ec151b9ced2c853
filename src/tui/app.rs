//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The wizard session lives in memory; `s` writes it to the draft file and
//! quitting with unsaved edits saves it too.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use log::debug;

use crate::config::Settings;
use crate::error::StudyResult;
use crate::models::{DegreeField, DegreeId, Field, FieldKind, Office, RegistrationState, Section};
use crate::services::{page, OfficeService, Page, WizardService};
use crate::storage::Storage;
use crate::submission::SubmissionHandler;
use crate::wizard::{Step, SubmitOutcome, WizardController};

use super::widgets::{Level, NotificationQueue, TextInput};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Wizard,
    Offices,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a new value for the selected form row
    Editing,
    /// Typing the office filter
    Filter,
}

/// One editable line of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Field(Field),
    Degree(DegreeId, DegreeField),
}

impl FormRow {
    pub fn label(&self, state: &RegistrationState) -> String {
        match self {
            Self::Field(field) => field.label().to_string(),
            Self::Degree(id, field) => {
                let position = state
                    .academic
                    .additional_degrees
                    .iter()
                    .position(|d| d.id == *id)
                    .map(|i| i + 1)
                    .unwrap_or_default();
                format!("Degree {} {}", position, field.label())
            }
        }
    }

    pub fn value(&self, state: &RegistrationState) -> String {
        match self {
            Self::Field(field) => {
                let value = field.get(state);
                if value.is_empty() && field.kind() != FieldKind::Flag {
                    String::new()
                } else {
                    value.to_string()
                }
            }
            Self::Degree(id, field) => state
                .academic
                .additional_degrees
                .iter()
                .find(|d| d.id == *id)
                .map(|d| d.get(*field).to_string())
                .unwrap_or_default(),
        }
    }
}

/// Main application state
pub struct App<'a> {
    pub storage: &'a Storage,
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,
    pub active_view: ActiveView,
    pub input_mode: InputMode,
    pub show_help: bool,

    /// The in-memory wizard session
    pub wizard: WizardController,
    /// Edits made since the last save
    pub dirty: bool,
    /// Selected row of the current form
    pub selected_row: usize,
    /// Buffer for the row being edited
    pub input: TextInput,

    /// Offices matching the filter, ordered by code
    pub offices: Vec<Office>,
    pub office_filter: TextInput,
    pub selected_office: usize,
    /// Office IDs marked for deletion
    pub marked_offices: BTreeSet<String>,

    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Resume the saved draft (or start fresh) and load the office table
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> StudyResult<Self> {
        let wizard = WizardService::new(storage, settings).open()?;
        let offices = OfficeService::new(storage).list(None)?;

        Ok(Self {
            storage,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            input_mode: InputMode::default(),
            show_help: false,
            wizard,
            dirty: false,
            selected_row: 0,
            input: TextInput::new(),
            offices,
            office_filter: TextInput::new(),
            selected_office: 0,
            marked_offices: BTreeSet::new(),
            notifications: NotificationQueue::new(Duration::from_secs(settings.notification_secs)),
        })
    }

    fn service(&self) -> WizardService<'a> {
        WizardService::new(self.storage, self.settings)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn notify(&mut self, message: impl Into<String>, level: Level) {
        self.notifications.push(message, level);
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.prune(Instant::now());
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_view(&mut self) {
        self.active_view = match self.active_view {
            ActiveView::Wizard => {
                self.refresh_offices();
                ActiveView::Offices
            }
            ActiveView::Offices => ActiveView::Wizard,
        };
    }

    // ------------------------------------------------------------------
    // Wizard form
    // ------------------------------------------------------------------

    /// Rows of the current step's form. The academic step lists each
    /// additional degree's fields after the fixed ones.
    pub fn form_rows(&self) -> Vec<FormRow> {
        let section = self.wizard.current().section();
        let mut rows: Vec<_> = Field::in_section(section).map(FormRow::Field).collect();

        if section == Section::Academic {
            for degree in &self.wizard.state().academic.additional_degrees {
                rows.extend(
                    DegreeField::ALL
                        .iter()
                        .map(|field| FormRow::Degree(degree.id, *field)),
                );
            }
        }

        rows
    }

    pub fn selected_form_row(&self) -> Option<FormRow> {
        self.form_rows().get(self.selected_row).copied()
    }

    pub fn select_next_row(&mut self) {
        let count = self.form_rows().len();
        if self.selected_row + 1 < count {
            self.selected_row += 1;
        }
    }

    pub fn select_prev_row(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Start editing the selected row. Flags are toggled instead.
    pub fn begin_edit(&mut self) {
        let Some(row) = self.selected_form_row() else {
            return;
        };

        if let FormRow::Field(field) = row {
            if field.kind() == FieldKind::Flag {
                self.toggle_selected_flag();
                return;
            }
        }

        self.input = TextInput::with_content(row.value(self.wizard.state()));
        self.input_mode = InputMode::Editing;
    }

    /// Write the input buffer into the selected row
    pub fn commit_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        let Some(row) = self.selected_form_row() else {
            return;
        };
        let raw = self.input.value().to_string();
        self.input.clear();

        match row {
            FormRow::Field(field) => self.wizard.apply_input(field, &raw),
            FormRow::Degree(id, field) => {
                if let Err(err) = self.wizard.update_degree(id, field, raw) {
                    self.notify(err.to_string(), Level::Error);
                    return;
                }
            }
        }
        self.dirty = true;
    }

    pub fn cancel_edit(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Cycle the selected choice field
    pub fn cycle_selected(&mut self, forward: bool) {
        if let Some(FormRow::Field(field)) = self.selected_form_row() {
            if self.wizard.cycle_choice(field, forward) {
                self.dirty = true;
            }
        }
    }

    pub fn toggle_selected_flag(&mut self) {
        if let Some(FormRow::Field(field)) = self.selected_form_row() {
            if self.wizard.toggle_flag(field) {
                self.dirty = true;
            }
        }
    }

    pub fn add_degree(&mut self) {
        if self.wizard.current().section() != Section::Academic {
            self.notify("Degrees are added on the Academic Background step", Level::Info);
            return;
        }
        let id = self.wizard.add_degree();
        self.dirty = true;
        if let Some(index) = self
            .form_rows()
            .iter()
            .position(|row| matches!(row, FormRow::Degree(d, _) if *d == id))
        {
            self.selected_row = index;
        }
    }

    /// Remove the degree the selected row belongs to
    pub fn remove_selected_degree(&mut self) {
        if let Some(FormRow::Degree(id, _)) = self.selected_form_row() {
            if self.wizard.remove_degree(id) {
                self.dirty = true;
                let count = self.form_rows().len();
                self.selected_row = self.selected_row.min(count.saturating_sub(1));
                self.notify("Degree removed", Level::Info);
            }
        }
    }

    // ------------------------------------------------------------------
    // Step navigation
    // ------------------------------------------------------------------

    pub fn next_step(&mut self) {
        if self.wizard.advance() {
            self.selected_row = 0;
            self.dirty = true;
        } else {
            self.notify("This is the final step. Press S to submit.", Level::Info);
        }
    }

    pub fn prev_step(&mut self) {
        if self.wizard.retreat() {
            self.selected_row = 0;
            self.dirty = true;
        }
    }

    /// Jump to a zero-based step index. Locked steps are ignored.
    pub fn jump_to_step(&mut self, index: usize) {
        if self.wizard.current().index() == index {
            return;
        }
        if self.wizard.jump_to(index) {
            self.selected_row = 0;
            self.dirty = true;
        }
    }

    // ------------------------------------------------------------------
    // Persistence and submission
    // ------------------------------------------------------------------

    pub fn save_draft(&mut self) {
        match self.service().save(&self.wizard) {
            Ok(()) => {
                self.dirty = false;
                self.notify("Draft saved", Level::Success);
            }
            Err(err) => self.notify(err.to_string(), Level::Error),
        }
    }

    /// Submit through the local submissions directory
    pub fn submit(&mut self) {
        let handler = self.service().file_handler();
        self.submit_with(&handler);
    }

    /// Submit through `handler`. A failure leaves every answer in place.
    pub fn submit_with<H>(&mut self, handler: &H)
    where
        H: SubmissionHandler + ?Sized,
    {
        if !self.wizard.current().is_last() {
            self.notify(
                format!("Submit is available on step {}", Step::COUNT),
                Level::Info,
            );
            return;
        }

        let service = self.service();
        match service.submit_session(&mut self.wizard, handler) {
            Ok(SubmitOutcome::Accepted(ack)) => {
                self.dirty = false;
                self.notify(
                    format!("Application submitted ({})", ack.submission_id),
                    Level::Success,
                );
            }
            Ok(SubmitOutcome::Rejected(reason)) => {
                self.notify(format!("Submission failed: {}", reason), Level::Error)
            }
            Ok(SubmitOutcome::NotOnFinalStep) => {}
            Err(err) => self.notify(err.to_string(), Level::Error),
        }
    }

    /// Save the session if anything changed since the last save
    pub fn save_if_dirty(&mut self) -> StudyResult<()> {
        if self.dirty {
            self.service().save(&self.wizard)?;
            self.dirty = false;
            debug!("saved draft on exit");
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Office table
    // ------------------------------------------------------------------

    /// Reload the office list through the current filter
    pub fn refresh_offices(&mut self) {
        let filter = Some(self.office_filter.value()).filter(|f| !f.is_empty());
        match OfficeService::new(self.storage).list(filter) {
            Ok(offices) => {
                self.offices = offices;
                self.selected_office = self
                    .selected_office
                    .min(self.offices.len().saturating_sub(1));
            }
            Err(err) => self.notify(err.to_string(), Level::Error),
        }
    }

    pub fn selected_office(&self) -> Option<&Office> {
        self.offices.get(self.selected_office)
    }

    pub fn select_next_office(&mut self) {
        if self.selected_office + 1 < self.offices.len() {
            self.selected_office += 1;
        }
    }

    pub fn select_prev_office(&mut self) {
        self.selected_office = self.selected_office.saturating_sub(1);
    }

    /// Mark or unmark the office under the cursor
    pub fn toggle_office_mark(&mut self) {
        if let Some(id) = self.selected_office().map(|o| o.id.clone()) {
            if !self.marked_offices.remove(&id) {
                self.marked_offices.insert(id);
            }
        }
    }

    /// Delete the marked offices, or the one under the cursor if none are
    /// marked
    pub fn delete_offices(&mut self) {
        let ids: Vec<String> = if self.marked_offices.is_empty() {
            self.selected_office().map(|o| o.id.clone()).into_iter().collect()
        } else {
            self.marked_offices.iter().cloned().collect()
        };
        if ids.is_empty() {
            return;
        }

        let service = OfficeService::new(self.storage);
        let before = self.storage.offices.count().unwrap_or_default();
        match service.delete(&ids) {
            Ok(remaining) => {
                let removed = before.saturating_sub(remaining.len());
                self.marked_offices.clear();
                self.refresh_offices();
                self.notify(format!("Deleted {} office(s)", removed), Level::Success);
            }
            Err(err) => self.notify(err.to_string(), Level::Error),
        }
    }

    pub fn begin_filter(&mut self) {
        self.input_mode = InputMode::Filter;
    }

    /// Leave filter mode, keeping or clearing what was typed
    pub fn end_filter(&mut self, keep: bool) {
        if !keep {
            self.office_filter.clear();
            self.refresh_offices();
        }
        self.input_mode = InputMode::Normal;
    }

    /// The page of offices containing the cursor
    pub fn office_page(&self) -> Page<Office> {
        let size = self.settings.office_page_size.max(1);
        page(&self.offices, self.selected_office / size, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::StudyPaths;
    use crate::error::StudyError;
    use crate::submission::{Ack, ApplicationPayload};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage, Settings::default())
    }

    fn select(app: &mut App, field: Field) {
        app.selected_row = app
            .form_rows()
            .iter()
            .position(|row| *row == FormRow::Field(field))
            .unwrap();
    }

    #[test]
    fn test_edit_commit_updates_field() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        select(&mut app, Field::FirstName);
        app.begin_edit();
        assert_eq!(app.input_mode, InputMode::Editing);
        for c in "Ayesha".chars() {
            app.input.insert(c);
        }
        app.commit_edit();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.wizard.state().personal.full_name.first_name, "Ayesha");
        assert!(app.dirty);
    }

    #[test]
    fn test_cancel_edit_keeps_value() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        select(&mut app, Field::City);
        app.begin_edit();
        app.input.insert('X');
        app.cancel_edit();

        assert!(app.wizard.state().personal.permanent_address.city.is_empty());
        assert!(!app.dirty);
    }

    #[test]
    fn test_enter_on_flag_toggles() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        app.next_step();
        select(&mut app, Field::HecApplied);
        app.begin_edit();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.wizard.state().academic.hec_equivalence_status.applied);
    }

    #[test]
    fn test_locked_step_jump_is_silent() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        app.jump_to_step(3);
        assert_eq!(app.wizard.current().index(), 0);
        assert!(app.notifications.is_empty());
        assert!(!app.dirty);
    }

    #[test]
    fn test_degree_rows_on_academic_step() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        app.add_degree();
        assert!(app.wizard.state().academic.additional_degrees.is_empty());

        app.next_step();
        let fixed = app.form_rows().len();
        app.add_degree();
        assert_eq!(app.form_rows().len(), fixed + DegreeField::ALL.len());
        assert_eq!(app.selected_row, fixed);

        app.begin_edit();
        for c in "MSc Data Science".chars() {
            app.input.insert(c);
        }
        app.commit_edit();
        let degree = &app.wizard.state().academic.additional_degrees[0];
        assert_eq!(degree.degree_type, "MSc Data Science");

        app.remove_selected_degree();
        assert!(app.wizard.state().academic.additional_degrees.is_empty());
        assert_eq!(app.form_rows().len(), fixed);
    }

    #[test]
    fn test_save_draft_and_resume() {
        let (_temp, storage, settings) = setup();
        {
            let mut app = App::new(&storage, &settings).unwrap();
            app.wizard.apply_input(Field::FirstName, "Bilal");
            app.next_step();
            app.save_draft();
            assert!(!app.dirty);
        }

        let app = App::new(&storage, &settings).unwrap();
        assert_eq!(app.wizard.current().index(), 1);
        assert_eq!(app.wizard.state().personal.full_name.first_name, "Bilal");
    }

    #[test]
    fn test_failed_submit_keeps_answers() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();
        app.wizard.apply_input(Field::Email, "a@b.pk");
        for _ in 0..4 {
            app.next_step();
        }
        let before = app.wizard.clone();

        let failing = |_: &ApplicationPayload| -> StudyResult<Ack> {
            Err(StudyError::Submission("backend unavailable".into()))
        };
        app.submit_with(&failing);

        assert_eq!(app.wizard, before);
        assert!(app.dirty);
        let note = app.notifications.current().unwrap();
        assert_eq!(note.level, Level::Error);
        assert_eq!(note.message, "Submission failed: backend unavailable");
        assert!(storage.submissions.list().unwrap().is_empty());
    }

    #[test]
    fn test_submit_before_final_step_is_refused() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        app.submit();
        assert_eq!(app.notifications.current().unwrap().level, Level::Info);
        assert!(storage.submissions.list().unwrap().is_empty());
    }

    #[test]
    fn test_submit_on_final_step() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();
        for _ in 0..4 {
            app.next_step();
        }

        app.submit();
        assert_eq!(app.notifications.current().unwrap().level, Level::Success);
        assert_eq!(storage.submissions.list().unwrap().len(), 1);
        assert!(app.wizard.is_completed(Step::LAST));
        assert!(!app.dirty);
    }

    #[test]
    fn test_office_mark_and_delete() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();
        app.toggle_view();
        assert_eq!(app.active_view, ActiveView::Offices);

        app.toggle_office_mark();
        app.select_next_office();
        app.toggle_office_mark();
        app.select_next_office();
        app.delete_offices();

        assert_eq!(app.offices.len(), 8);
        assert!(app.marked_offices.is_empty());

        // with nothing marked, the row under the cursor goes
        app.delete_offices();
        assert_eq!(app.offices.len(), 7);
    }

    #[test]
    fn test_office_filter() {
        let (_temp, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();
        app.toggle_view();

        app.begin_filter();
        for c in "chen".chars() {
            app.office_filter.insert(c);
        }
        app.refresh_offices();
        assert_eq!(app.offices.len(), 1);
        assert_eq!(app.offices[0].office_code, "LA-002");

        app.end_filter(false);
        assert_eq!(app.offices.len(), 10);
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
