//! Office model
//!
//! Records shown in the office table. Derived columns (manager name,
//! location, occupancy, rent) are computed from the stored fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating status of an office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficeStatus {
    Active,
    Closed,
    UnderRenovation,
}

impl OfficeStatus {
    /// Parse a status from its stored or displayed form
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "active" => Some(Self::Active),
            "closed" => Some(Self::Closed),
            "under_renovation" | "renovation" => Some(Self::UnderRenovation),
            _ => None,
        }
    }

    /// Label shown in tables
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Closed => "Closed",
            Self::UnderRenovation => "Under Renovation",
        }
    }
}

impl Default for OfficeStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for OfficeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Person running an office
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub first_name: String,
    pub last_name: String,
}

impl Manager {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Where an office is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}

/// A company office
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
    /// Row identifier
    pub id: String,

    /// Short code such as `NYC-001`
    pub office_code: String,

    pub office_name: String,

    pub manager: Manager,

    pub location: Location,

    pub employee_count: u32,

    pub capacity: u32,

    pub status: OfficeStatus,

    pub established_date: NaiveDate,

    /// Monthly rent in whole dollars
    pub monthly_rent: u64,
}

impl Office {
    /// Whether `reference` names this office, by ID or by code
    pub fn matches(&self, reference: &str) -> bool {
        let reference = reference.trim();
        self.id == reference || self.office_code.eq_ignore_ascii_case(reference)
    }

    /// Occupancy as a whole percentage of capacity
    pub fn occupancy_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        (f64::from(self.employee_count) / f64::from(self.capacity) * 100.0).round() as u32
    }

    /// Occupancy column, e.g. `245/300 (82%)`
    pub fn occupancy(&self) -> String {
        format!(
            "{}/{} ({}%)",
            self.employee_count,
            self.capacity,
            self.occupancy_percent()
        )
    }

    /// Rent column, e.g. `$25,000`
    pub fn formatted_rent(&self) -> String {
        format!("${}", group_thousands(self.monthly_rent))
    }

    /// Case-insensitive match of `needle` against every visible column
    pub fn matches_filter(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            self.office_code.clone(),
            self.office_name.clone(),
            self.manager.full_name(),
            self.location.to_string(),
            self.location.country.clone(),
            self.occupancy(),
            self.formatted_rent(),
            self.status.label().to_string(),
            self.established_date.to_string(),
        ]
        .iter()
        .any(|column| column.to_lowercase().contains(&needle))
    }
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.office_code, self.office_name)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
