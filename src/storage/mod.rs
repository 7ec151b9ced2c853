//! Storage layer for Study Global
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod drafts;
pub mod file_io;
pub mod init;
pub mod offices;
pub mod submissions;

pub use drafts::DraftRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use offices::OfficeRepository;
pub use submissions::{SubmissionRecord, SubmissionRepository};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::StudyPaths;
use crate::error::StudyResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: StudyPaths,
    pub drafts: DraftRepository,
    pub offices: OfficeRepository,
    pub submissions: SubmissionRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: StudyPaths) -> StudyResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            drafts: DraftRepository::new(paths.draft_file()),
            offices: OfficeRepository::new(paths.offices_file()),
            submissions: SubmissionRepository::new(paths.submissions_dir()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Turn audit logging on or off
    pub fn with_audit_enabled(mut self, enabled: bool) -> Self {
        self.audit = self.audit.with_enabled(enabled);
        self
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &StudyPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> StudyResult<()> {
        self.offices.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> StudyResult<()> {
        self.offices.save()
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a created entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> StudyResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record a modified entity in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> StudyResult<()> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    /// Record a removed entity in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> StudyResult<()> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Record an accepted application in the audit log
    pub fn log_submit<T: Serialize>(
        &self,
        submission_id: impl Into<String>,
        applicant: Option<String>,
        payload: &T,
    ) -> StudyResult<()> {
        self.audit
            .log(&AuditEntry::submit(submission_id, applicant, payload))
    }
}
