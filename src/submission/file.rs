//! File-backed submission handler
//!
//! Stands in for a remote admissions backend: each accepted application is
//! written to its own JSON file under the submissions directory.

use log::info;

use super::{Ack, ApplicationPayload, SubmissionHandler};
use crate::error::StudyResult;
use crate::storage::submissions::{SubmissionRecord, SubmissionRepository};

/// Accepts applications by storing them on disk
pub struct FileSubmissionHandler {
    repository: SubmissionRepository,
}

impl FileSubmissionHandler {
    pub fn new(repository: SubmissionRepository) -> Self {
        Self { repository }
    }
}

impl SubmissionHandler for FileSubmissionHandler {
    fn submit(&self, payload: &ApplicationPayload) -> StudyResult<Ack> {
        let ack = Ack::now();
        let record = SubmissionRecord {
            id: ack.submission_id,
            submitted_at: ack.received_at,
            payload: payload.clone(),
        };
        self.repository.store(&record)?;
        info!("stored application {}", ack.submission_id);
        Ok(ack)
    }
}
