//! Submission repository
//!
//! Each accepted application is stored as its own file under the
//! submissions directory, named by submission ID.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StudyError, StudyResult};
use crate::models::SubmissionId;
use crate::submission::ApplicationPayload;

use super::file_io::{read_json_optional, write_json_atomic};

/// A stored application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub submitted_at: DateTime<Utc>,
    pub payload: ApplicationPayload,
}

/// Repository for submitted applications
#[derive(Debug, Clone)]
pub struct SubmissionRepository {
    dir: PathBuf,
}

impl SubmissionRepository {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn record_path(&self, id: SubmissionId) -> PathBuf {
        self.dir.join(format!("{}.json", id.as_uuid()))
    }

    /// Write a record atomically
    pub fn store(&self, record: &SubmissionRecord) -> StudyResult<()> {
        write_json_atomic(self.record_path(record.id), record)
    }

    /// Look up a record by full or short submission ID
    pub fn get(&self, reference: &str) -> StudyResult<Option<SubmissionRecord>> {
        Ok(self.list()?.into_iter().find(|r| r.id.matches(reference)))
    }

    /// All stored records, oldest first
    pub fn list(&self) -> StudyResult<Vec<SubmissionRecord>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| {
            StudyError::Storage(format!("Failed to read {}: {}", self.dir.display(), e))
        })?;

        let mut records = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(record) = read_json_optional::<SubmissionRecord, _>(&path)? {
                records.push(record);
            }
        }

        records.sort_by_key(|r| r.submitted_at);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegistrationState;
    use tempfile::TempDir;

    fn record() -> SubmissionRecord {
        SubmissionRecord {
            id: SubmissionId::new(),
            submitted_at: Utc::now(),
            payload: ApplicationPayload::from_state(&RegistrationState::default()),
        }
    }

    #[test]
    fn test_list_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SubmissionRepository::new(temp_dir.path().join("submissions"));
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_store_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SubmissionRepository::new(temp_dir.path().to_path_buf());
        let record = record();

        repo.store(&record).unwrap();

        assert_eq!(repo.get(&record.id.short()).unwrap(), Some(record.clone()));
        assert_eq!(repo.list().unwrap(), vec![record]);
    }

    #[test]
    fn test_ignores_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SubmissionRepository::new(temp_dir.path().to_path_buf());
        repo.store(&record()).unwrap();
        fs::write(temp_dir.path().join("leftover.json.tmp"), "{").unwrap();

        assert_eq!(repo.list().unwrap().len(), 1);
    }
}
