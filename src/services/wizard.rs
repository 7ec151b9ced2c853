//! Wizard service
//!
//! Runs wizard operations against the saved draft: each call opens the
//! session, applies one change, persists the draft and records the edit in
//! the audit log.

use log::info;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::{StudyError, StudyResult};
use crate::models::{DegreeField, DegreeId, Field, RegistrationState};
use crate::storage::Storage;
use crate::submission::{FileSubmissionHandler, SubmissionHandler};
use crate::wizard::{SubmitOutcome, WizardController};

const DRAFT_ID: &str = "current";

/// Service for draft-backed wizard sessions
pub struct WizardService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> WizardService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// A fresh aggregate seeded with the configured defaults
    pub fn fresh_state(&self) -> RegistrationState {
        RegistrationState::with_defaults(
            &self.settings.default_residence_country,
            self.settings.default_admission_year,
            self.settings.default_intake_year,
        )
    }

    /// Resume the saved draft, or start a new session
    pub fn open(&self) -> StudyResult<WizardController> {
        Ok(match self.storage.drafts.load()? {
            Some(snapshot) => WizardController::restore(snapshot),
            None => WizardController::with_state(self.fresh_state()),
        })
    }

    pub fn has_draft(&self) -> bool {
        self.storage.drafts.exists()
    }

    /// Persist the session and audit any change to the aggregate
    pub fn save(&self, wizard: &WizardController) -> StudyResult<()> {
        let previous = self.storage.drafts.load()?;
        self.storage.drafts.save(&wizard.snapshot())?;

        let name = applicant_name(wizard.state());
        match previous {
            None => self.storage.log_create(
                EntityType::Draft,
                DRAFT_ID,
                name,
                wizard.state(),
            )?,
            Some(before) if before.state != *wizard.state() => self.storage.log_update(
                EntityType::Draft,
                DRAFT_ID,
                name,
                &before.state,
                wizard.state(),
            )?,
            Some(_) => {}
        }

        Ok(())
    }

    /// Open the session, run `op`, save, and hand back the session with the
    /// operation's result
    pub fn edit<F, R>(&self, op: F) -> StudyResult<(WizardController, R)>
    where
        F: FnOnce(&mut WizardController) -> StudyResult<R>,
    {
        let mut wizard = self.open()?;
        let result = op(&mut wizard)?;
        self.save(&wizard)?;
        Ok((wizard, result))
    }

    /// Set a field by dotted path from raw text
    pub fn set_field(&self, path: &str, raw: &str) -> StudyResult<(WizardController, Field)> {
        let field = Field::parse(path).ok_or_else(|| StudyError::UnknownField(path.to_string()))?;
        self.edit(|wizard| {
            wizard.apply_input(field, raw);
            Ok(field)
        })
    }

    pub fn advance(&self) -> StudyResult<(WizardController, bool)> {
        self.edit(|wizard| Ok(wizard.advance()))
    }

    pub fn retreat(&self) -> StudyResult<(WizardController, bool)> {
        self.edit(|wizard| Ok(wizard.retreat()))
    }

    /// Jump to a zero-based step index, if accessible
    pub fn jump_to(&self, index: usize) -> StudyResult<(WizardController, bool)> {
        self.edit(|wizard| Ok(wizard.jump_to(index)))
    }

    pub fn add_degree(&self) -> StudyResult<(WizardController, DegreeId)> {
        self.edit(|wizard| Ok(wizard.add_degree()))
    }

    /// Set one field of a degree entry named by full or short ID
    pub fn update_degree(
        &self,
        reference: &str,
        field: &str,
        value: &str,
    ) -> StudyResult<(WizardController, DegreeId)> {
        let field = DegreeField::parse(field).ok_or_else(|| {
            let known: Vec<_> = DegreeField::ALL.iter().map(|f| f.key()).collect();
            StudyError::Validation(format!(
                "Unknown degree field '{}'. Expected one of: {}",
                field,
                known.join(", ")
            ))
        })?;

        self.edit(|wizard| {
            let id = resolve_degree(wizard, reference)?;
            wizard.update_degree(id, field, value)?;
            Ok(id)
        })
    }

    pub fn remove_degree(&self, reference: &str) -> StudyResult<(WizardController, DegreeId)> {
        self.edit(|wizard| {
            let id = resolve_degree(wizard, reference)?;
            wizard.remove_degree(id);
            Ok(id)
        })
    }

    /// Submit the saved session through `handler`.
    ///
    /// The draft is kept either way; an accepted submission also marks the
    /// final step complete.
    pub fn submit<H>(&self, handler: &H) -> StudyResult<(WizardController, SubmitOutcome)>
    where
        H: SubmissionHandler + ?Sized,
    {
        let mut wizard = self.open()?;
        let outcome = self.submit_session(&mut wizard, handler)?;
        Ok((wizard, outcome))
    }

    /// Submit an in-memory session (the TUI keeps one open between saves).
    ///
    /// An accepted submission saves the session as the draft and records the
    /// submit in the audit log. A rejected one touches nothing on disk.
    pub fn submit_session<H>(
        &self,
        wizard: &mut WizardController,
        handler: &H,
    ) -> StudyResult<SubmitOutcome>
    where
        H: SubmissionHandler + ?Sized,
    {
        let outcome = wizard.submit(handler);

        if let SubmitOutcome::Accepted(ack) = &outcome {
            self.save(wizard)?;
            self.storage.log_submit(
                ack.submission_id.to_string(),
                applicant_name(wizard.state()),
                &wizard.payload(),
            )?;
            info!("application {} accepted", ack.submission_id);
        }

        Ok(outcome)
    }

    /// Handler writing to the local submissions directory
    pub fn file_handler(&self) -> FileSubmissionHandler {
        FileSubmissionHandler::new(self.storage.submissions.clone())
    }

    /// Submit to the local submissions directory
    pub fn submit_to_file(&self) -> StudyResult<(WizardController, SubmitOutcome)> {
        self.submit(&self.file_handler())
    }

    /// Discard the saved draft. Returns whether one existed.
    pub fn reset(&self) -> StudyResult<bool> {
        let Some(previous) = self.storage.drafts.load()? else {
            return Ok(false);
        };

        self.storage.drafts.clear()?;
        self.storage.log_delete(
            EntityType::Draft,
            DRAFT_ID,
            applicant_name(&previous.state),
            &previous.state,
        )?;
        Ok(true)
    }
}

fn resolve_degree(wizard: &WizardController, reference: &str) -> StudyResult<DegreeId> {
    wizard
        .find_degree(reference)
        .map(|d| d.id)
        .ok_or_else(|| StudyError::degree_not_found(reference))
}

fn applicant_name(state: &RegistrationState) -> Option<String> {
    let name = state.personal.display_name();
    (!name.is_empty()).then_some(name)
}
