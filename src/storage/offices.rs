//! Office repository for JSON storage
//!
//! Manages loading and saving offices to offices.json. A missing file is
//! seeded with the demo offices on load.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use log::info;

use crate::error::{StudyError, StudyResult};
use crate::models::Office;

use super::file_io::{read_json_optional, write_json_atomic};
use super::init::default_offices;

/// Serializable office data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct OfficeData {
    pub offices: Vec<Office>,
}

/// Repository for office persistence
pub struct OfficeRepository {
    path: PathBuf,
    data: RwLock<HashMap<String, Office>>,
}

impl OfficeRepository {
    /// Create a new office repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load offices from disk, seeding the demo data when no file exists yet
    pub fn load(&self) -> StudyResult<()> {
        let offices = match read_json_optional::<OfficeData, _>(&self.path)? {
            Some(file_data) => file_data.offices,
            None => {
                info!("no office data at {}, seeding demo offices", self.path.display());
                let seed = default_offices();
                write_json_atomic(&self.path, &OfficeData { offices: seed.clone() })?;
                seed
            }
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| StudyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for office in offices {
            data.insert(office.id.clone(), office);
        }

        Ok(())
    }

    /// Save offices to disk
    pub fn save(&self) -> StudyResult<()> {
        let offices = self.get_all()?;
        write_json_atomic(&self.path, &OfficeData { offices })
    }

    /// Get all offices ordered by office code
    pub fn get_all(&self) -> StudyResult<Vec<Office>> {
        let data = self
            .data
            .read()
            .map_err(|e| StudyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut offices: Vec<_> = data.values().cloned().collect();
        offices.sort_by(|a, b| a.office_code.cmp(&b.office_code));
        Ok(offices)
    }

    /// Find an office by ID or office code
    pub fn find(&self, reference: &str) -> StudyResult<Option<Office>> {
        let data = self
            .data
            .read()
            .map_err(|e| StudyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        if let Some(office) = data.get(reference.trim()) {
            return Ok(Some(office.clone()));
        }
        Ok(data.values().find(|o| o.matches(reference)).cloned())
    }

    /// Remove every office named by ID or code. Returns the removed offices.
    pub fn delete_many(&self, references: &[String]) -> StudyResult<Vec<Office>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| StudyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let doomed: Vec<String> = data
            .values()
            .filter(|o| references.iter().any(|r| o.matches(r)))
            .map(|o| o.id.clone())
            .collect();

        let mut removed: Vec<Office> = doomed.iter().filter_map(|id| data.remove(id)).collect();
        removed.sort_by(|a, b| a.office_code.cmp(&b.office_code));
        Ok(removed)
    }

    /// Replace every office
    pub fn replace_all(&self, offices: Vec<Office>) -> StudyResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| StudyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for office in offices {
            data.insert(office.id.clone(), office);
        }
        Ok(())
    }

    /// Count offices
    pub fn count(&self) -> StudyResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| StudyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, OfficeRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("offices.json");
        let repo = OfficeRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_load_seeds_missing_file() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        assert_eq!(repo.count().unwrap(), 10);
        assert!(temp_dir.path().join("offices.json").exists());

        let codes: Vec<_> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|o| o.office_code)
            .collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_existing_empty_file_is_not_reseeded() {
        let (temp_dir, repo) = create_test_repo();
        write_json_atomic(temp_dir.path().join("offices.json"), &OfficeData::default()).unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_find_by_id_or_code() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        assert_eq!(repo.find("5").unwrap().unwrap().office_code, "SEA-005");
        assert_eq!(repo.find("den-007").unwrap().unwrap().id, "7");
        assert!(repo.find("XYZ-999").unwrap().is_none());
    }

    #[test]
    fn test_delete_many_and_persist() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let removed = repo
            .delete_many(&["1".to_string(), "BOS-008".to_string(), "nope".to_string()])
            .unwrap();
        assert_eq!(removed.len(), 2);
        repo.save().unwrap();

        let reloaded = OfficeRepository::new(temp_dir.path().join("offices.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 8);
        assert!(reloaded.find("1").unwrap().is_none());
    }
}
