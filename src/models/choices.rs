//! Suggested values for select-style registration fields
//!
//! These are suggestions, not constraints: any text is accepted for a field
//! that has choices, but the TUI cycles through these lists.

pub const GENDERS: &[&str] = &["Male", "Female", "Other"];

pub const PROVINCES: &[&str] = &[
    "Punjab",
    "Sindh",
    "Khyber Pakhtunkhwa",
    "Balochistan",
    "Gilgit-Baltistan",
    "Azad Kashmir",
    "Islamabad Capital Territory",
];

pub const EMERGENCY_RELATIONS: &[&str] = &[
    "Father", "Mother", "Brother", "Sister", "Uncle", "Aunt", "Guardian", "Other",
];

pub const RESIDENCE_COUNTRIES: &[&str] = &[
    "Pakistan",
    "India",
    "Bangladesh",
    "Afghanistan",
    "Iran",
    "China",
    "Saudi Arabia",
    "UAE",
    "Other",
];

pub const ACADEMIC_COUNTRIES: &[&str] = &[
    "Pakistan",
    "India",
    "Bangladesh",
    "Afghanistan",
    "Iran",
    "China",
    "Saudi Arabia",
    "UAE",
    "Canada",
    "USA",
    "UK",
    "Other",
];

pub const STUDY_LEVELS: &[&str] = &["matriculation", "intermediate", "bachelors", "masters", "phd"];

pub const BOARDS: &[&str] = &[
    "Federal Board (FBISE)",
    "Punjab Board",
    "Sindh Board",
    "KPK Board",
    "Balochistan Board",
    "AJK Board",
    "CBSE",
    "ICSE",
    "State Board",
    "Other",
];

pub const STREAMS: &[&str] = &[
    "Pre-Engineering",
    "Pre-Medical",
    "General Science",
    "Commerce",
    "Arts",
];

pub const EDUCATIONAL_GAPS: &[&str] = &["none", "1_year", "2_years", "3_years", "more_than_3"];

pub const DEGREE_TYPES: &[&str] = &["Certificate", "Diploma", "Associate Degree", "Bachelor", "Master"];

pub const BACKLOGS: &[&str] = &["none", "1", "2", "3", "4_or_more", "cleared"];

pub const WORK_EXPERIENCE: &[&str] = &[
    "none",
    "less_than_1",
    "1_to_2",
    "2_to_3",
    "3_to_5",
    "5_plus",
    "internship_only",
];

pub const COURSES: &[&str] = &[
    "Computer Science",
    "Software Engineering",
    "Data Science",
    "Artificial Intelligence",
    "Information Technology",
    "Cybersecurity",
    "Computer Engineering",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Chemical Engineering",
    "Biomedical Engineering",
    "Business Administration",
    "Economics",
    "Finance",
    "Accounting",
    "Marketing",
    "Medicine",
    "Dentistry",
    "Pharmacy",
    "Nursing",
    "Public Health",
    "Psychology",
    "International Relations",
    "Political Science",
    "Law",
    "Architecture",
    "Design",
    "Fine Arts",
    "Media Studies",
    "Other",
];

pub const DESTINATIONS: &[&str] = &[
    "Canada",
    "USA",
    "UK",
    "Australia",
    "Germany",
    "Netherlands",
    "Sweden",
    "Norway",
    "Denmark",
    "France",
    "Ireland",
    "New Zealand",
    "Switzerland",
    "Austria",
    "Belgium",
    "Finland",
    "Other",
];

pub const SEASONS: &[&str] = &["Fall", "Spring", "Summer", "Winter"];

pub const INTAKE_YEARS: &[&str] = &["2025", "2026", "2027", "2028"];

pub const FUNDING_SOURCES: &[&str] = &[
    "self",
    "parent",
    "family",
    "scholarship",
    "education_loan",
    "employer",
    "government",
    "mixed_funding",
    "other",
];

pub const BUDGET_RANGES: &[&str] = &[
    "under_5_lakhs",
    "5_10_lakhs",
    "10_20_lakhs",
    "20_30_lakhs",
    "30_50_lakhs",
    "50_plus_lakhs",
];

pub const SPONSOR_RELATIONS: &[&str] = &[
    "Father",
    "Mother",
    "Brother",
    "Sister",
    "Uncle",
    "Aunt",
    "Grandfather",
    "Grandmother",
    "Guardian",
    "Spouse",
    "Other",
];

/// Step through a choice list from the current value.
///
/// An empty or unknown current value starts at the first (or last) entry.
pub fn cycle<'a>(choices: &[&'a str], current: &str, forward: bool) -> Option<&'a str> {
    if choices.is_empty() {
        return None;
    }
    let len = choices.len();
    let next = match choices.iter().position(|c| *c == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    Some(choices[next])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(SEASONS, "Winter", true), Some("Fall"));
        assert_eq!(cycle(SEASONS, "Fall", false), Some("Winter"));
        assert_eq!(cycle(SEASONS, "Spring", true), Some("Summer"));
    }

    #[test]
    fn test_cycle_from_unknown_value() {
        assert_eq!(cycle(GENDERS, "", true), Some("Male"));
        assert_eq!(cycle(GENDERS, "", false), Some("Other"));
        assert_eq!(cycle(&[], "x", true), None);
    }
}
