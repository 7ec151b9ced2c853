//! Office display formatting
//!
//! Formats offices for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Office;
use crate::services::Page;

#[derive(Tabled)]
struct OfficeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Office Code")]
    code: String,
    #[tabled(rename = "Office Name")]
    name: String,
    #[tabled(rename = "Manager")]
    manager: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Occupancy")]
    occupancy: String,
    #[tabled(rename = "Monthly Rent")]
    rent: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Established")]
    established: String,
}

impl From<&Office> for OfficeRow {
    fn from(office: &Office) -> Self {
        Self {
            id: office.id.clone(),
            code: office.office_code.clone(),
            name: office.office_name.clone(),
            manager: office.manager.full_name(),
            location: office.location.to_string(),
            occupancy: office.occupancy(),
            rent: office.formatted_rent(),
            status: office.status.label().to_string(),
            established: office.established_date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Format offices as a table
pub fn format_office_list(offices: &[Office]) -> String {
    if offices.is_empty() {
        return "No offices found.".to_string();
    }

    let rows: Vec<OfficeRow> = offices.iter().map(OfficeRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format one page of offices with a page footer
pub fn format_office_page(page: &Page<Office>) -> String {
    let mut output = format_office_list(&page.items);
    if page.total > 0 {
        output.push_str(&format!(
            "\n\nPage {} of {} ({} offices)",
            page.page_index + 1,
            page.page_count,
            page.total
        ));
    }
    output
}

/// Format a single office's details
pub fn format_office_details(office: &Office) -> String {
    let mut output = String::new();

    output.push_str(&format!("Office: {} ({})\n", office.office_name, office.office_code));
    output.push_str(&format!("  ID:          {}\n", office.id));
    output.push_str(&format!("  Manager:     {}\n", office.manager.full_name()));
    output.push_str(&format!(
        "  Location:    {}, {}\n",
        office.location, office.location.country
    ));
    output.push_str(&format!("  Occupancy:   {}\n", office.occupancy()));
    output.push_str(&format!("  Rent:        {} / month\n", office.formatted_rent()));
    output.push_str(&format!("  Status:      {}\n", office.status));
    output.push_str(&format!(
        "  Established: {}\n",
        office.established_date.format("%B %-d, %Y")
    ));

    output
}
