//! Student registration aggregate
//!
//! The five independent sections captured by the registration wizard. Every
//! field has a default, so a freshly created aggregate is always complete.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DegreeId;
use crate::wizard::composite::composite_score;

/// The five top-level groupings of the registration aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Personal,
    Academic,
    TestScores,
    Preferences,
    Financial,
}

impl Section {
    /// All sections in wizard order
    pub const ALL: [Section; 5] = [
        Section::Personal,
        Section::Academic,
        Section::TestScores,
        Section::Preferences,
        Section::Financial,
    ];

    /// Key used in dotted field paths
    pub fn key(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Academic => "academic",
            Self::TestScores => "test_scores",
            Self::Preferences => "preferences",
            Self::Financial => "financial",
        }
    }

    /// Parse a section from its path key or a loose spelling
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "personal" | "personal_details" => Some(Self::Personal),
            "academic" | "academic_background" => Some(Self::Academic),
            "test_scores" | "testscores" | "scores" => Some(Self::TestScores),
            "preferences" | "goals" => Some(Self::Preferences),
            "financial" | "documentation" => Some(Self::Financial),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Personal => write!(f, "Personal Details"),
            Self::Academic => write!(f, "Academic Background"),
            Self::TestScores => write!(f, "Test Scores"),
            Self::Preferences => write!(f, "Preferences & Goals"),
            Self::Financial => write!(f, "Financial & Documentation"),
        }
    }
}

/// Full registration aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationState {
    #[serde(default)]
    pub personal: PersonalDetails,
    #[serde(default)]
    pub academic: AcademicBackground,
    #[serde(default)]
    pub test_scores: TestScores,
    #[serde(default)]
    pub preferences: PreferencesAndGoals,
    #[serde(default)]
    pub financial: FinancialAndDocumentation,
}

impl RegistrationState {
    /// Create an aggregate seeded with configured defaults
    pub fn with_defaults(residence_country: &str, admission_year: u32, intake_year: u32) -> Self {
        let mut state = Self::default();
        state.personal.residence_country = residence_country.to_string();
        state.academic.admission_year = admission_year;
        state.preferences.intended_intake.year = intake_year;
        state
    }
}

// ---------------------------------------------------------------------------
// Personal details
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub province_of_domicile: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyContact {
    pub name: String,
    pub relation: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassportDetails {
    pub passport_country: String,
    pub passport_number: String,
    pub passport_expiry: String,
}

/// Step 1: basic information and contact details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalDetails {
    pub full_name: FullName,
    pub father_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub cnic_number: String,
    pub phone: String,
    pub email: String,
    pub permanent_address: Address,
    pub emergency_contact: EmergencyContact,
    pub residence_country: String,
    pub passport_details: PassportDetails,
}

impl Default for PersonalDetails {
    fn default() -> Self {
        Self {
            full_name: FullName::default(),
            father_name: String::new(),
            date_of_birth: String::new(),
            gender: String::new(),
            cnic_number: String::new(),
            phone: String::new(),
            email: String::new(),
            permanent_address: Address::default(),
            emergency_contact: EmergencyContact::default(),
            residence_country: "Pakistan".to_string(),
            passport_details: PassportDetails::default(),
        }
    }
}

impl PersonalDetails {
    /// First and last name joined, trimmed
    pub fn display_name(&self) -> String {
        format!("{} {}", self.full_name.first_name, self.full_name.last_name)
            .trim()
            .to_string()
    }
}

// ---------------------------------------------------------------------------
// Academic background
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Matriculation {
    pub year: u32,
    pub board: String,
    pub score_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intermediate {
    pub year: u32,
    pub board: String,
    pub score_percentage: f64,
    pub pre_engineering_or_pre_medical: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Diploma {
    pub program: String,
    pub specialization: String,
    pub institution: String,
    pub country: String,
    pub start_date: String,
    pub end_date: String,
    pub cgpa_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BachelorDegree {
    pub program_name: String,
    pub specialization: String,
    pub institution: String,
    pub country: String,
    pub start_date: String,
    pub end_date: String,
    pub cgpa_percentage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HecEquivalence {
    pub applied: bool,
    pub obtained_date: String,
}

/// A user-added degree beyond the fixed diploma and bachelor records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalDegree {
    pub id: DegreeId,
    #[serde(default)]
    pub degree_type: String,
    #[serde(default)]
    pub program_name: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub cgpa_percentage: String,
}

impl AdditionalDegree {
    /// Create an empty degree entry with a fresh ID
    pub fn new() -> Self {
        Self {
            id: DegreeId::new(),
            degree_type: String::new(),
            program_name: String::new(),
            institution: String::new(),
            country: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            cgpa_percentage: String::new(),
        }
    }

    /// Mutable access to one text field of the entry
    pub fn slot_mut(&mut self, field: DegreeField) -> &mut String {
        match field {
            DegreeField::DegreeType => &mut self.degree_type,
            DegreeField::ProgramName => &mut self.program_name,
            DegreeField::Institution => &mut self.institution,
            DegreeField::Country => &mut self.country,
            DegreeField::StartDate => &mut self.start_date,
            DegreeField::EndDate => &mut self.end_date,
            DegreeField::CgpaPercentage => &mut self.cgpa_percentage,
        }
    }

    /// Read one text field of the entry
    pub fn get(&self, field: DegreeField) -> &str {
        match field {
            DegreeField::DegreeType => &self.degree_type,
            DegreeField::ProgramName => &self.program_name,
            DegreeField::Institution => &self.institution,
            DegreeField::Country => &self.country,
            DegreeField::StartDate => &self.start_date,
            DegreeField::EndDate => &self.end_date,
            DegreeField::CgpaPercentage => &self.cgpa_percentage,
        }
    }
}

impl Default for AdditionalDegree {
    fn default() -> Self {
        Self::new()
    }
}

/// Editable fields of an additional degree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeField {
    DegreeType,
    ProgramName,
    Institution,
    Country,
    StartDate,
    EndDate,
    CgpaPercentage,
}

impl DegreeField {
    pub const ALL: [DegreeField; 7] = [
        DegreeField::DegreeType,
        DegreeField::ProgramName,
        DegreeField::Institution,
        DegreeField::Country,
        DegreeField::StartDate,
        DegreeField::EndDate,
        DegreeField::CgpaPercentage,
    ];

    /// Parse from the serialized field name
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == s.trim())
    }

    /// Serialized field name
    pub fn key(&self) -> &'static str {
        match self {
            Self::DegreeType => "degree_type",
            Self::ProgramName => "program_name",
            Self::Institution => "institution",
            Self::Country => "country",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::CgpaPercentage => "cgpa_percentage",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::DegreeType => "Degree Type",
            Self::ProgramName => "Program Name",
            Self::Institution => "Institution",
            Self::Country => "Country",
            Self::StartDate => "Start Date",
            Self::EndDate => "End Date",
            Self::CgpaPercentage => "CGPA / Percentage",
        }
    }
}

/// Step 2: educational qualifications and history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcademicBackground {
    pub study_level: String,
    pub admission_year: u32,
    pub matriculation: Matriculation,
    pub intermediate: Intermediate,
    pub additional_certification: bool,
    pub diploma: Diploma,
    pub bachelor_degree: BachelorDegree,
    pub hec_equivalence_status: HecEquivalence,
    pub educational_gap: String,
    pub additional_degrees: Vec<AdditionalDegree>,
}

impl Default for AcademicBackground {
    fn default() -> Self {
        Self {
            study_level: "bachelors".to_string(),
            admission_year: 2025,
            matriculation: Matriculation::default(),
            intermediate: Intermediate::default(),
            additional_certification: false,
            diploma: Diploma::default(),
            bachelor_degree: BachelorDegree::default(),
            hec_equivalence_status: HecEquivalence::default(),
            educational_gap: "none".to_string(),
            additional_degrees: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Test scores
// ---------------------------------------------------------------------------

/// IELTS band scores. The overall band is derived, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IeltsScores {
    pub listening: f64,
    pub reading: f64,
    pub writing: f64,
    pub speaking: f64,
}

impl IeltsScores {
    /// Overall band, present once all four modules are filled in
    pub fn overall(&self) -> Option<f64> {
        composite_score(self.listening, self.reading, self.writing, self.speaking)
    }
}

/// Step 3: language and standardized test scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestScores {
    pub ielts_scores: IeltsScores,
    pub toefl_score: String,
    pub sat_score: u32,
    pub gre_score: u32,
    pub gmat_score: u32,
    pub neet_score: u32,
    pub backlogs: String,
    pub work_experience: String,
    pub part_time_work: bool,
    pub profile_completion_status: bool,
}

impl Default for TestScores {
    fn default() -> Self {
        Self {
            ielts_scores: IeltsScores::default(),
            toefl_score: String::new(),
            sat_score: 0,
            gre_score: 0,
            gmat_score: 0,
            neet_score: 0,
            backlogs: "none".to_string(),
            work_experience: "none".to_string(),
            part_time_work: false,
            profile_completion_status: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intake {
    pub season: String,
    pub year: u32,
}

impl Default for Intake {
    fn default() -> Self {
        Self {
            season: String::new(),
            year: 2025,
        }
    }
}

/// Step 4: study preferences and career objectives
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesAndGoals {
    pub preferred_course: String,
    pub specialization: String,
    pub preferred_country: String,
    pub preferred_universities: [String; 3],
    pub intended_intake: Intake,
    pub study_reason: String,
    pub career_goals: String,
    pub scholarship_interest: bool,
    pub co_op_interest: bool,
    pub family_abroad: bool,
    pub accommodation_support: bool,
}

// ---------------------------------------------------------------------------
// Financial and documentation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SponsorDetails {
    pub sponsor_name: String,
    pub sponsor_relation: String,
    pub sponsor_cnic: String,
    pub sponsor_annual_income: String,
}

/// Step 5: financial details and required documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialAndDocumentation {
    pub funding_source: String,
    pub sponsor_details: SponsorDetails,
    pub budget_constraints: String,
    pub bank_statements_submitted: bool,
    pub financial_affidavit: bool,
    pub visa_rejections: bool,
    pub travel_history: String,
    pub police_clearance_certificate: bool,
    pub medical_clearance: bool,
    pub medical_conditions: String,
    pub domicile_certificate_submitted: bool,
    pub noc_required: bool,
    pub additional_info: String,
}
