//! Application submission
//!
//! The wizard hands the finished aggregate to a [`SubmissionHandler`] and
//! treats it as a black box: it either acknowledges the application or fails.
//! Deduplicating repeated submissions is the handler's concern.

mod file;

pub use file::FileSubmissionHandler;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StudyResult;
use crate::models::{RegistrationState, SubmissionId};

/// What gets sent to the submission handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationPayload {
    /// The full registration aggregate
    pub profile: RegistrationState,
    /// Derived IELTS overall band, if all module scores are present
    pub ielts_overall: Option<f64>,
}

impl ApplicationPayload {
    /// Build the payload for an aggregate, computing derived values
    pub fn from_state(state: &RegistrationState) -> Self {
        Self {
            profile: state.clone(),
            ielts_overall: state.test_scores.ielts_scores.overall(),
        }
    }
}

/// Acknowledgement returned by a handler that accepted an application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    pub submission_id: SubmissionId,
    pub received_at: DateTime<Utc>,
}

impl Ack {
    /// Acknowledge now with a fresh submission ID
    pub fn now() -> Self {
        Self {
            submission_id: SubmissionId::new(),
            received_at: Utc::now(),
        }
    }
}

/// External collaborator that receives finished applications
pub trait SubmissionHandler {
    fn submit(&self, payload: &ApplicationPayload) -> StudyResult<Ack>;
}

impl<F> SubmissionHandler for F
where
    F: Fn(&ApplicationPayload) -> StudyResult<Ack>,
{
    fn submit(&self, payload: &ApplicationPayload) -> StudyResult<Ack> {
        self(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudyError;
    use crate::models::Field;

    #[test]
    fn test_payload_includes_derived_overall() {
        let mut state = RegistrationState::default();
        for (field, band) in [
            (Field::IeltsListening, 8.0),
            (Field::IeltsReading, 7.5),
            (Field::IeltsWriting, 7.0),
            (Field::IeltsSpeaking, 7.5),
        ] {
            field.set(&mut state, band.into());
        }

        let payload = ApplicationPayload::from_state(&state);
        assert_eq!(payload.ielts_overall, Some(7.5));
        assert_eq!(payload.profile, state);
    }

    #[test]
    fn test_closures_are_handlers() {
        let accept = |_: &ApplicationPayload| -> StudyResult<Ack> { Ok(Ack::now()) };
        let reject = |_: &ApplicationPayload| -> StudyResult<Ack> {
            Err(StudyError::Submission("offline".into()))
        };
        let payload = ApplicationPayload::from_state(&RegistrationState::default());

        assert!(accept.submit(&payload).is_ok());
        assert!(reject.submit(&payload).is_err());
    }
}
