//! Storage initialization
//!
//! Handles first-run setup and the demo office data

use chrono::NaiveDate;

use crate::config::paths::StudyPaths;
use crate::error::StudyResult;
use crate::models::{Location, Manager, Office, OfficeStatus};

use super::file_io::write_json_atomic;
use super::offices::OfficeData;

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and seeds offices.json if it doesn't exist
pub fn initialize_storage(paths: &StudyPaths) -> StudyResult<()> {
    paths.ensure_directories()?;

    if !paths.offices_file().exists() {
        write_json_atomic(
            paths.offices_file(),
            &OfficeData {
                offices: default_offices(),
            },
        )?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &StudyPaths) -> bool {
    !paths.offices_file().exists()
}

/// The ten demo offices every fresh installation starts with
pub fn default_offices() -> Vec<Office> {
    use OfficeStatus::*;

    vec![
        office("1", "NYC-001", "New York Headquarters", ("John", "Mitchell"), ("New York", "NY"), 245, 300, Active, (2020, 1, 15), 25000),
        office("2", "LA-002", "Los Angeles Branch", ("Sarah", "Chen"), ("Los Angeles", "CA"), 180, 220, Active, (2021, 3, 10), 22000),
        office("3", "CHI-003", "Chicago Regional Office", ("Michael", "Rodriguez"), ("Chicago", "IL"), 95, 150, Active, (2019, 8, 22), 18000),
        office("4", "MIA-004", "Miami Sales Office", ("Emily", "Johnson"), ("Miami", "FL"), 67, 100, Active, (2022, 1, 5), 15000),
        office("5", "SEA-005", "Seattle Tech Hub", ("David", "Kim"), ("Seattle", "WA"), 320, 400, Active, (2018, 5, 12), 28000),
        office("6", "ATL-006", "Atlanta Operations Center", ("Lisa", "Thompson"), ("Atlanta", "GA"), 0, 200, Closed, (2020, 11, 30), 16000),
        office("7", "DEN-007", "Denver Support Center", ("Robert", "Wilson"), ("Denver", "CO"), 45, 80, UnderRenovation, (2023, 2, 14), 12000),
        office("8", "BOS-008", "Boston Research Lab", ("Jennifer", "Davis"), ("Boston", "MA"), 128, 150, Active, (2019, 9, 18), 20000),
        office("9", "PHX-009", "Phoenix Distribution Center", ("Christopher", "Martinez"), ("Phoenix", "AZ"), 85, 120, Active, (2021, 7, 8), 14000),
        office("10", "POR-010", "Portland Innovation Hub", ("Amanda", "Garcia"), ("Portland", "OR"), 156, 180, Active, (2020, 12, 3), 17500),
    ]
}

#[allow(clippy::too_many_arguments)]
fn office(
    id: &str,
    code: &str,
    name: &str,
    manager: (&str, &str),
    location: (&str, &str),
    employee_count: u32,
    capacity: u32,
    status: OfficeStatus,
    established: (i32, u32, u32),
    monthly_rent: u64,
) -> Office {
    let (year, month, day) = established;
    Office {
        id: id.to_string(),
        office_code: code.to_string(),
        office_name: name.to_string(),
        manager: Manager {
            first_name: manager.0.to_string(),
            last_name: manager.1.to_string(),
        },
        location: Location {
            city: location.0.to_string(),
            state: location.1.to_string(),
            country: "USA".to_string(),
        },
        employee_count,
        capacity,
        status,
        established_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        monthly_rent,
    }
}
