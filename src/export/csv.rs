//! CSV export of the office table

use std::io::Write;

use crate::error::StudyResult;
use crate::models::Office;

const HEADER: [&str; 13] = [
    "ID",
    "Office Code",
    "Office Name",
    "Manager",
    "City",
    "State",
    "Country",
    "Employees",
    "Capacity",
    "Occupancy %",
    "Monthly Rent",
    "Status",
    "Established",
];

/// Export offices to CSV, one row per office
pub fn export_offices_csv<W: Write>(offices: &[Office], writer: W) -> StudyResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;

    for office in offices {
        csv.write_record([
            office.id.clone(),
            office.office_code.clone(),
            office.office_name.clone(),
            office.manager.full_name(),
            office.location.city.clone(),
            office.location.state.clone(),
            office.location.country.clone(),
            office.employee_count.to_string(),
            office.capacity.to_string(),
            office.occupancy_percent().to_string(),
            office.monthly_rent.to_string(),
            office.status.label().to_string(),
            office.established_date.to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}
