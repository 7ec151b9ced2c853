//! Office service
//!
//! Filtering, paging and row deletion for the office table.

use log::info;

use crate::audit::EntityType;
use crate::error::{StudyError, StudyResult};
use crate::models::Office;
use crate::storage::init::default_offices;
use crate::storage::Storage;

/// One page of a longer list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zero-based index of this page, clamped to the last page
    pub page_index: usize,
    pub page_count: usize,
    pub total: usize,
}

/// Slice `items` into pages of `page_size` and return page `page_index`.
///
/// An out-of-range index yields the last page; an empty list yields one
/// empty page.
pub fn page<T: Clone>(items: &[T], page_index: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let page_count = total.div_ceil(page_size).max(1);
    let page_index = page_index.min(page_count - 1);
    let start = page_index * page_size;
    let end = (start + page_size).min(total);

    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        page_index,
        page_count,
        total,
    }
}

/// Service for office management
pub struct OfficeService<'a> {
    storage: &'a Storage,
}

impl<'a> OfficeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All offices ordered by code, optionally narrowed by a global text filter
    pub fn list(&self, filter: Option<&str>) -> StudyResult<Vec<Office>> {
        let offices = self.storage.offices.get_all()?;
        Ok(match filter {
            Some(needle) => offices
                .into_iter()
                .filter(|o| o.matches_filter(needle))
                .collect(),
            None => offices,
        })
    }

    /// Find an office by ID or code
    pub fn find(&self, reference: &str) -> StudyResult<Option<Office>> {
        self.storage.offices.find(reference)
    }

    /// Find an office by ID or code, failing if it doesn't exist
    pub fn get(&self, reference: &str) -> StudyResult<Office> {
        self.find(reference)?
            .ok_or_else(|| StudyError::office_not_found(reference))
    }

    /// Remove every office whose ID or code is listed and return the
    /// remaining offices. Unknown references are ignored.
    pub fn delete(&self, references: &[String]) -> StudyResult<Vec<Office>> {
        let removed = self.storage.offices.delete_many(references)?;

        if !removed.is_empty() {
            self.storage.offices.save()?;
            for office in &removed {
                self.storage.log_delete(
                    EntityType::Office,
                    office.id.clone(),
                    Some(office.office_name.clone()),
                    office,
                )?;
            }
            info!("deleted {} office(s)", removed.len());
        }

        self.list(None)
    }

    /// Restore the demo offices. Returns how many offices there are now.
    pub fn reset(&self) -> StudyResult<usize> {
        let offices = default_offices();
        let count = offices.len();
        self.storage.offices.replace_all(offices)?;
        self.storage.offices.save()?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::StudyPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn codes(offices: &[Office]) -> Vec<&str> {
        offices.iter().map(|o| o.office_code.as_str()).collect()
    }

    #[test]
    fn test_filter() {
        let (_temp, storage) = create_test_storage();
        let service = OfficeService::new(&storage);

        assert_eq!(service.list(None).unwrap().len(), 10);
        assert_eq!(codes(&service.list(Some("renovation")).unwrap()), vec!["DEN-007"]);
        assert_eq!(codes(&service.list(Some("CHEN")).unwrap()), vec!["LA-002"]);
        assert!(service.list(Some("london")).unwrap().is_empty());
    }

    #[test]
    fn test_delete_row_and_selection() {
        let (_temp, storage) = create_test_storage();
        let service = OfficeService::new(&storage);

        let remaining = service.delete(&["2".to_string()]).unwrap();
        assert_eq!(remaining.len(), 9);
        assert!(remaining.iter().all(|o| o.id != "2"));

        let remaining = service
            .delete(&["SEA-005".to_string(), "6".to_string(), "404".to_string()])
            .unwrap();
        assert_eq!(remaining.len(), 7);

        let deletes: Vec<_> = storage
            .audit()
            .read_all()
            .unwrap()
            .into_iter()
            .filter(|e| e.operation == Operation::Delete)
            .collect();
        assert_eq!(deletes.len(), 3);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let (_temp, storage) = create_test_storage();
        let service = OfficeService::new(&storage);

        assert_eq!(service.delete(&["nope".to_string()]).unwrap().len(), 10);
        assert!(storage.audit().read_all().unwrap().is_empty());
    }

    #[test]
    fn test_get_missing() {
        let (_temp, storage) = create_test_storage();
        let service = OfficeService::new(&storage);

        assert_eq!(service.get("mia-004").unwrap().id, "4");
        assert!(service.get("XYZ").unwrap_err().is_not_found());
    }

    #[test]
    fn test_reset_restores_seed() {
        let (_temp, storage) = create_test_storage();
        let service = OfficeService::new(&storage);

        service.delete(&["1".to_string(), "3".to_string()]).unwrap();
        assert_eq!(service.reset().unwrap(), 10);
        assert_eq!(service.list(None).unwrap().len(), 10);
    }

    #[test]
    fn test_page() {
        let items: Vec<u32> = (0..45).collect();

        let first = page(&items, 0, 20);
        assert_eq!(first.items.len(), 20);
        assert_eq!(first.page_count, 3);

        let last = page(&items, 2, 20);
        assert_eq!(last.items, (40..45).collect::<Vec<_>>());

        let clamped = page(&items, 9, 20);
        assert_eq!(clamped.page_index, 2);

        let empty = page::<u32>(&[], 0, 20);
        assert_eq!(empty.page_count, 1);
        assert!(empty.items.is_empty());
    }
}
