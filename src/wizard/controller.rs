//! Wizard controller
//!
//! Owns the registration aggregate, the active step and the set of completed
//! steps. All transitions are plain methods so they can be driven without a
//! rendering surface.
//!
//! Navigation rules:
//! - `advance` marks the current step complete and moves forward (no field
//!   validation gates it)
//! - `retreat` moves back without touching the completed set
//! - `jump_to(i)` is allowed only for `i <= current` or an already completed step
//! - the completed set only ever grows
//!
//! Guard violations are silent no-ops that return `false`.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::coerce::parse_input;
use super::step::Step;
use crate::error::{StudyError, StudyResult};
use crate::models::{
    choices, AdditionalDegree, DegreeField, DegreeId, Field, FieldValue, RegistrationState,
    Section,
};
use crate::submission::{Ack, ApplicationPayload, SubmissionHandler};

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The handler accepted the application
    Accepted(Ack),
    /// The handler failed with this reason; nothing entered was lost
    Rejected(String),
    /// Submit was requested before the final step
    NotOnFinalStep,
}

/// Serializable wizard session, used for drafts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardSnapshot {
    pub state: RegistrationState,
    pub current: Step,
    pub completed: BTreeSet<Step>,
    pub updated_at: DateTime<Utc>,
}

/// Drives step sequencing and owns the registration aggregate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardController {
    state: RegistrationState,
    current: Step,
    completed: BTreeSet<Step>,
}

impl WizardController {
    /// Start a session with a default aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a prepared aggregate
    pub fn with_state(state: RegistrationState) -> Self {
        Self {
            state,
            current: Step::FIRST,
            completed: BTreeSet::new(),
        }
    }

    /// Resume a saved session
    pub fn restore(snapshot: WizardSnapshot) -> Self {
        Self {
            state: snapshot.state,
            current: snapshot.current,
            completed: snapshot.completed,
        }
    }

    /// Capture the session for persistence
    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            state: self.state.clone(),
            current: self.current,
            completed: self.completed.clone(),
            updated_at: Utc::now(),
        }
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    pub fn current(&self) -> Step {
        self.current
    }

    pub fn completed(&self) -> &BTreeSet<Step> {
        &self.completed
    }

    pub fn is_completed(&self, step: Step) -> bool {
        self.completed.contains(&step)
    }

    /// Whether the user may navigate directly to `step`
    pub fn is_accessible(&self, step: Step) -> bool {
        step <= self.current || self.is_completed(step)
    }

    /// Progress through the wizard as a whole percentage
    pub fn progress_percent(&self) -> u8 {
        let percent = (self.current.number() as f64 / Step::COUNT as f64) * 100.0;
        percent.round() as u8
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Mark the current step complete and move to the next one
    pub fn advance(&mut self) -> bool {
        match self.current.next() {
            Some(next) => {
                self.completed.insert(self.current);
                debug!("wizard advance {} -> {}", self.current.index(), next.index());
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Move to the previous step
    pub fn retreat(&mut self) -> bool {
        match self.current.prev() {
            Some(prev) => {
                debug!("wizard retreat {} -> {}", self.current.index(), prev.index());
                self.current = prev;
                true
            }
            None => false,
        }
    }

    /// Jump to a step by zero-based index, if it is accessible
    pub fn jump_to(&mut self, index: usize) -> bool {
        match Step::from_index(index) {
            Some(step) if self.is_accessible(step) => {
                self.current = step;
                true
            }
            _ => {
                debug!("wizard jump to {} blocked at {}", index, self.current.index());
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Replace one leaf of the aggregate, keeping every sibling intact
    pub fn update_field(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.state = field.apply(&self.state, value.into());
    }

    /// Apply several field updates to one section.
    ///
    /// Pairs addressing a different section are skipped. Returns how many
    /// updates were applied.
    pub fn update_section<I>(&mut self, section: Section, patch: I) -> usize
    where
        I: IntoIterator<Item = (Field, FieldValue)>,
    {
        let mut next = self.state.clone();
        let mut applied = 0;
        for (field, value) in patch {
            if field.section() != section {
                debug!("ignoring {} in {} patch", field.path(), section.key());
                continue;
            }
            field.set(&mut next, value);
            applied += 1;
        }
        self.state = next;
        applied
    }

    /// Update a field from raw text, coercing to the field's kind
    pub fn apply_input(&mut self, field: Field, raw: &str) {
        self.update_field(field, parse_input(field.kind(), raw));
    }

    /// Flip a yes/no field. Returns false for non-flag fields.
    pub fn toggle_flag(&mut self, field: Field) -> bool {
        match field.get(&self.state) {
            FieldValue::Flag(current) => {
                self.update_field(field, !current);
                true
            }
            _ => false,
        }
    }

    /// Step a select-style field to its next (or previous) suggested value
    pub fn cycle_choice(&mut self, field: Field, forward: bool) -> bool {
        let Some(options) = field.choices() else {
            return false;
        };
        let current = field.get(&self.state).to_string();
        match choices::cycle(options, &current, forward) {
            Some(next) => {
                self.apply_input(field, next);
                true
            }
            None => false,
        }
    }

    /// Derived IELTS overall band
    pub fn ielts_overall(&self) -> Option<f64> {
        self.state.test_scores.ielts_scores.overall()
    }

    /// What a submit would send right now
    pub fn payload(&self) -> ApplicationPayload {
        ApplicationPayload::from_state(&self.state)
    }

    // ------------------------------------------------------------------
    // Additional degrees
    // ------------------------------------------------------------------

    /// Append an empty degree entry
    pub fn add_degree(&mut self) -> DegreeId {
        let degree = AdditionalDegree::new();
        let id = degree.id;
        let mut next = self.state.clone();
        next.academic.additional_degrees.push(degree);
        self.state = next;
        id
    }

    /// Set one field of a degree entry
    pub fn update_degree(
        &mut self,
        id: DegreeId,
        field: DegreeField,
        value: impl Into<String>,
    ) -> StudyResult<()> {
        let mut next = self.state.clone();
        let degree = next
            .academic
            .additional_degrees
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StudyError::degree_not_found(id.to_string()))?;
        *degree.slot_mut(field) = value.into();
        self.state = next;
        Ok(())
    }

    /// Remove a degree entry. Returns false if no entry had that ID.
    pub fn remove_degree(&mut self, id: DegreeId) -> bool {
        let before = self.state.academic.additional_degrees.len();
        let mut next = self.state.clone();
        next.academic.additional_degrees.retain(|d| d.id != id);
        let removed = next.academic.additional_degrees.len() != before;
        self.state = next;
        removed
    }

    /// Find a degree entry from a user-typed reference (full or short ID)
    pub fn find_degree(&self, reference: &str) -> Option<&AdditionalDegree> {
        self.state
            .academic
            .additional_degrees
            .iter()
            .find(|d| d.id.matches(reference))
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Hand the aggregate to `handler`.
    ///
    /// Only valid on the final step. On success the final step is marked
    /// complete; on failure the session is left exactly as it was.
    pub fn submit<H>(&mut self, handler: &H) -> SubmitOutcome
    where
        H: SubmissionHandler + ?Sized,
    {
        if !self.current.is_last() {
            debug!("submit ignored on step {}", self.current.index());
            return SubmitOutcome::NotOnFinalStep;
        }

        match handler.submit(&self.payload()) {
            Ok(ack) => {
                self.completed.insert(self.current);
                SubmitOutcome::Accepted(ack)
            }
            Err(err) => {
                warn!("application submission failed: {}", err);
                let reason = match err {
                    StudyError::Submission(reason) => reason,
                    other => other.to_string(),
                };
                SubmitOutcome::Rejected(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldKind;

    fn at_last_step() -> WizardController {
        let mut wizard = WizardController::new();
        for _ in 0..4 {
            assert!(wizard.advance());
        }
        wizard
    }

    fn completed_indices(wizard: &WizardController) -> Vec<usize> {
        wizard.completed().iter().map(|s| s.index()).collect()
    }

    #[test]
    fn test_initial_state() {
        let wizard = WizardController::new();
        assert_eq!(wizard.current(), Step::FIRST);
        assert!(wizard.completed().is_empty());
        assert_eq!(wizard.progress_percent(), 20);
    }

    #[test]
    fn test_step_index_stays_in_range() {
        let mut wizard = WizardController::new();
        assert!(!wizard.retreat());
        assert_eq!(wizard.current().index(), 0);

        for _ in 0..10 {
            wizard.advance();
        }
        assert_eq!(wizard.current().index(), 4);
        assert!(!wizard.advance());

        for _ in 0..10 {
            wizard.retreat();
        }
        assert_eq!(wizard.current().index(), 0);
    }

    #[test]
    fn test_advance_four_times_then_retreat() {
        let mut wizard = at_last_step();
        assert_eq!(wizard.current(), Step::LAST);
        assert_eq!(completed_indices(&wizard), vec![0, 1, 2, 3]);
        assert_eq!(wizard.progress_percent(), 100);

        assert!(wizard.retreat());
        assert_eq!(wizard.current().index(), 3);
        assert_eq!(completed_indices(&wizard), vec![0, 1, 2, 3]);

        // Step 4 was never completed and lies ahead of step 3
        assert!(!wizard.jump_to(4));
        assert_eq!(wizard.current().index(), 3);
    }

    #[test]
    fn test_jump_rule() {
        let mut wizard = WizardController::new();
        wizard.advance();
        wizard.advance();
        wizard.retreat();
        wizard.retreat();

        // {0, 1} completed, current 0
        assert!(wizard.jump_to(1));
        assert!(!wizard.jump_to(2));
        assert!(wizard.jump_to(0));
        assert!(!wizard.jump_to(9));
        assert_eq!(wizard.current().index(), 0);
    }

    #[test]
    fn test_completed_is_sticky() {
        let mut wizard = WizardController::new();
        wizard.advance();
        wizard.advance();
        wizard.retreat();
        wizard.update_field(Field::FirstName, "Sara");
        wizard.retreat();

        assert_eq!(completed_indices(&wizard), vec![0, 1]);
    }

    #[test]
    fn test_update_section_preserves_untouched_fields() {
        let mut wizard = WizardController::new();
        wizard.update_field(Field::LastName, "Khan");
        wizard.update_field(Field::City, "Karachi");

        let applied = wizard.update_section(
            Section::Personal,
            vec![
                (Field::FirstName, FieldValue::from("Bilal")),
                (Field::Street, FieldValue::from("5 Clifton")),
                (Field::SatScore, FieldValue::from(1400u32)),
            ],
        );

        assert_eq!(applied, 2);
        let personal = &wizard.state().personal;
        assert_eq!(personal.full_name.first_name, "Bilal");
        assert_eq!(personal.full_name.last_name, "Khan");
        assert_eq!(personal.permanent_address.street, "5 Clifton");
        assert_eq!(personal.permanent_address.city, "Karachi");
        assert_eq!(wizard.state().test_scores.sat_score, 0);
    }

    #[test]
    fn test_composite_recomputes_on_every_change() {
        let mut wizard = WizardController::new();
        wizard.apply_input(Field::IeltsListening, "9");
        wizard.apply_input(Field::IeltsReading, "9");
        wizard.apply_input(Field::IeltsWriting, "9");
        assert_eq!(wizard.ielts_overall(), None);

        wizard.apply_input(Field::IeltsSpeaking, "8");
        assert_eq!(wizard.ielts_overall(), Some(9.0));

        wizard.apply_input(Field::IeltsSpeaking, "7");
        assert_eq!(wizard.ielts_overall(), Some(8.5));

        wizard.apply_input(Field::IeltsReading, "oops");
        assert_eq!(wizard.ielts_overall(), None);
    }

    #[test]
    fn test_apply_input_coerces_invalid_numbers() {
        let mut wizard = WizardController::new();
        wizard.apply_input(Field::AdmissionYear, "next year");
        assert_eq!(wizard.state().academic.admission_year, 0);
        assert_eq!(Field::AdmissionYear.kind(), FieldKind::Integer);
    }

    #[test]
    fn test_toggle_and_cycle() {
        let mut wizard = WizardController::new();
        assert!(wizard.toggle_flag(Field::ScholarshipInterest));
        assert!(wizard.state().preferences.scholarship_interest);
        assert!(!wizard.toggle_flag(Field::FirstName));

        assert!(wizard.cycle_choice(Field::IntakeSeason, true));
        assert_eq!(wizard.state().preferences.intended_intake.season, "Fall");

        // 2025 -> 2026 through the integer field's suggested values
        assert!(wizard.cycle_choice(Field::IntakeYear, true));
        assert_eq!(wizard.state().preferences.intended_intake.year, 2026);

        assert!(!wizard.cycle_choice(Field::Email, true));
    }

    #[test]
    fn test_degree_lifecycle() {
        let mut wizard = WizardController::new();
        let id = wizard.add_degree();
        wizard
            .update_degree(id, DegreeField::Institution, "LUMS")
            .unwrap();

        let degree = wizard.find_degree(&id.short()).unwrap();
        assert_eq!(degree.institution, "LUMS");

        // Degrees survive navigation
        wizard.advance();
        wizard.retreat();
        assert_eq!(wizard.state().academic.additional_degrees.len(), 1);

        assert!(wizard.remove_degree(id));
        assert!(!wizard.remove_degree(id));
        assert!(wizard
            .update_degree(id, DegreeField::Country, "UK")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_submit_before_last_step_is_noop() {
        let mut wizard = WizardController::new();
        let handler = |_: &ApplicationPayload| -> StudyResult<Ack> { Ok(Ack::now()) };
        assert_eq!(wizard.submit(&handler), SubmitOutcome::NotOnFinalStep);
        assert!(wizard.completed().is_empty());
    }

    #[test]
    fn test_submit_success_marks_last_step() {
        let mut wizard = at_last_step();
        let handler = |_: &ApplicationPayload| -> StudyResult<Ack> { Ok(Ack::now()) };

        assert!(matches!(wizard.submit(&handler), SubmitOutcome::Accepted(_)));
        assert!(wizard.is_completed(Step::LAST));

        // Resubmission is independent
        assert!(matches!(wizard.submit(&handler), SubmitOutcome::Accepted(_)));
        assert_eq!(wizard.completed().len(), 5);
    }

    #[test]
    fn test_failed_submit_preserves_everything() {
        let mut wizard = WizardController::new();
        wizard.update_field(Field::Email, "student@example.com");
        wizard.apply_input(Field::IeltsWriting, "6.5");
        for _ in 0..4 {
            wizard.advance();
        }
        wizard.update_field(Field::FundingSource, "scholarship");
        let before = wizard.clone();

        let handler = |_: &ApplicationPayload| -> StudyResult<Ack> {
            Err(StudyError::Submission("backend unavailable".into()))
        };
        let outcome = wizard.submit(&handler);

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected("backend unavailable".into())
        );
        assert_eq!(wizard, before);
        assert_eq!(wizard.state().personal.email, "student@example.com");
        assert!(!wizard.is_completed(Step::LAST));
    }

    #[test]
    fn test_snapshot_round_trip_restores_session() {
        let mut wizard = WizardController::new();
        wizard.update_field(Field::PreferredCountry, "Canada");
        wizard.advance();
        wizard.advance();

        let restored = WizardController::restore(wizard.snapshot());
        assert_eq!(restored, wizard);
    }
}
