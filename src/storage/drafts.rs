//! Draft repository
//!
//! Persists the in-progress wizard session to draft.json so the CLI and the
//! TUI can pick up where the user left off.

use std::path::PathBuf;

use log::debug;

use crate::error::StudyResult;
use crate::wizard::WizardSnapshot;

use super::file_io::{read_json_optional, remove_file_if_exists, write_json_atomic};

/// Repository for the single saved wizard draft
pub struct DraftRepository {
    path: PathBuf,
}

impl DraftRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the saved draft, if any
    pub fn load(&self) -> StudyResult<Option<WizardSnapshot>> {
        read_json_optional(&self.path)
    }

    /// Replace the saved draft
    pub fn save(&self, snapshot: &WizardSnapshot) -> StudyResult<()> {
        debug!("saving draft at step {}", snapshot.current.index());
        write_json_atomic(&self.path, snapshot)
    }

    /// Discard the saved draft. Returns whether one existed.
    pub fn clear(&self) -> StudyResult<bool> {
        remove_file_if_exists(&self.path)
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;
    use crate::wizard::WizardController;
    use tempfile::TempDir;

    fn repo(temp_dir: &TempDir) -> DraftRepository {
        DraftRepository::new(temp_dir.path().join("data").join("draft.json"))
    }

    #[test]
    fn test_load_without_draft() {
        let temp_dir = TempDir::new().unwrap();
        assert!(repo(&temp_dir).load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_resume() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);

        let mut wizard = WizardController::new();
        wizard.update_field(Field::FirstName, "Ayesha");
        wizard.add_degree();
        wizard.advance();
        repo.save(&wizard.snapshot()).unwrap();

        let resumed = WizardController::restore(repo.load().unwrap().unwrap());
        assert_eq!(resumed, wizard);
    }

    #[test]
    fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        repo.save(&WizardController::new().snapshot()).unwrap();

        assert!(repo.exists());
        assert!(repo.clear().unwrap());
        assert!(!repo.exists());
        assert!(!repo.clear().unwrap());
    }
}
