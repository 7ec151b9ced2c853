//! Typed field paths into the registration aggregate
//!
//! Every editable leaf of [`RegistrationState`] is a [`Field`] variant. A field
//! knows its section, dotted path, label, value kind and suggested choices, and
//! can read or write its slot. Writes go through [`Field::apply`], which returns
//! a new aggregate with only that leaf replaced.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::registration::{RegistrationState, Section};

/// Highest IELTS band score
pub const IELTS_BAND_MAX: f64 = 9.0;

/// Kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Integer,
    Flag,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Number => write!(f, "number"),
            Self::Integer => write!(f, "integer"),
            Self::Flag => write!(f, "yes/no"),
        }
    }
}

/// A tagged field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Integer(u32),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// The kind this value carries
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Integer(_) => FieldKind::Integer,
            Self::Flag(_) => FieldKind::Flag,
        }
    }

    /// Convert into `kind`, falling back to that kind's empty value when the
    /// conversion makes no sense.
    pub fn coerce(self, kind: FieldKind) -> FieldValue {
        if self.kind() == kind {
            return self;
        }
        match (self, kind) {
            (Self::Text(raw), _) => crate::wizard::coerce::parse_input(kind, &raw),
            (Self::Number(n), FieldKind::Integer) => {
                FieldValue::Integer(crate::wizard::coerce::clamp_integer(n))
            }
            (Self::Integer(i), FieldKind::Number) => FieldValue::Number(f64::from(i)),
            (other, FieldKind::Text) => FieldValue::Text(other.to_string()),
            (_, kind) => FieldValue::empty(kind),
        }
    }

    /// Default value for a kind
    pub fn empty(kind: FieldKind) -> FieldValue {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Number => FieldValue::Number(0.0),
            FieldKind::Integer => FieldValue::Integer(0),
            FieldKind::Flag => FieldValue::Flag(false),
        }
    }

    /// Whether the value is the kind's empty value
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Number(n) => *n == 0.0,
            Self::Integer(i) => *i == 0,
            Self::Flag(b) => !b,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Number(n) => write!(f, "{}", n),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Flag(true) => write!(f, "yes"),
            Self::Flag(false) => write!(f, "no"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        Self::Integer(i)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

/// Mutable view of one leaf slot
enum SlotMut<'a> {
    Text(&'a mut String),
    Number(&'a mut f64),
    Integer(&'a mut u32),
    Flag(&'a mut bool),
}

macro_rules! define_fields {
    ($(
        $variant:ident => $section:ident, $key:literal, $label:literal, $kind:ident, $choices:expr, [$($access:tt)+];
    )*) => {
        /// An editable leaf of the registration aggregate
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Field {
            $($variant,)*
        }

        impl Field {
            /// Every field in wizard display order
            pub const ALL: &'static [Field] = &[$(Field::$variant,)*];

            /// Section this field belongs to
            pub fn section(&self) -> Section {
                match self {
                    $(Field::$variant => Section::$section,)*
                }
            }

            /// Path of the field inside its section (e.g. `full_name.first_name`)
            pub fn key(&self) -> &'static str {
                match self {
                    $(Field::$variant => $key,)*
                }
            }

            /// Human-readable label
            pub fn label(&self) -> &'static str {
                match self {
                    $(Field::$variant => $label,)*
                }
            }

            /// Kind of value the field holds
            pub fn kind(&self) -> FieldKind {
                match self {
                    $(Field::$variant => FieldKind::$kind,)*
                }
            }

            /// Suggested values, for select-style fields
            pub fn choices(&self) -> Option<&'static [&'static str]> {
                match self {
                    $(Field::$variant => $choices,)*
                }
            }

            /// Read the field's current value
            pub fn get(&self, state: &RegistrationState) -> FieldValue {
                match self {
                    $(Field::$variant => FieldValue::$kind(state.$($access)+.clone()),)*
                }
            }

            fn slot_mut<'a>(&self, state: &'a mut RegistrationState) -> SlotMut<'a> {
                match self {
                    $(Field::$variant => SlotMut::$kind(&mut state.$($access)+),)*
                }
            }
        }
    };
}

use super::choices::*;

define_fields! {
    // Personal details
    FirstName => Personal, "full_name.first_name", "First Name", Text, None, [personal.full_name.first_name];
    LastName => Personal, "full_name.last_name", "Last Name", Text, None, [personal.full_name.last_name];
    FatherName => Personal, "father_name", "Father's Name", Text, None, [personal.father_name];
    DateOfBirth => Personal, "date_of_birth", "Date of Birth", Text, None, [personal.date_of_birth];
    Gender => Personal, "gender", "Gender", Text, Some(GENDERS), [personal.gender];
    CnicNumber => Personal, "cnic_number", "CNIC Number", Text, None, [personal.cnic_number];
    Phone => Personal, "phone", "Phone", Text, None, [personal.phone];
    Email => Personal, "email", "Email", Text, None, [personal.email];
    Street => Personal, "permanent_address.street", "Street Address", Text, None, [personal.permanent_address.street];
    City => Personal, "permanent_address.city", "City", Text, None, [personal.permanent_address.city];
    Province => Personal, "permanent_address.province_of_domicile", "Province of Domicile", Text, Some(PROVINCES), [personal.permanent_address.province_of_domicile];
    PostalCode => Personal, "permanent_address.postal_code", "Postal Code", Text, None, [personal.permanent_address.postal_code];
    EmergencyName => Personal, "emergency_contact.name", "Emergency Contact", Text, None, [personal.emergency_contact.name];
    EmergencyRelation => Personal, "emergency_contact.relation", "Emergency Relation", Text, Some(EMERGENCY_RELATIONS), [personal.emergency_contact.relation];
    EmergencyPhone => Personal, "emergency_contact.phone", "Emergency Phone", Text, None, [personal.emergency_contact.phone];
    ResidenceCountry => Personal, "residence_country", "Residence Country", Text, Some(RESIDENCE_COUNTRIES), [personal.residence_country];
    PassportCountry => Personal, "passport_details.passport_country", "Passport Country", Text, Some(RESIDENCE_COUNTRIES), [personal.passport_details.passport_country];
    PassportNumber => Personal, "passport_details.passport_number", "Passport Number", Text, None, [personal.passport_details.passport_number];
    PassportExpiry => Personal, "passport_details.passport_expiry", "Passport Expiry", Text, None, [personal.passport_details.passport_expiry];

    // Academic background
    StudyLevel => Academic, "study_level", "Study Level", Text, Some(STUDY_LEVELS), [academic.study_level];
    AdmissionYear => Academic, "admission_year", "Admission Year", Integer, None, [academic.admission_year];
    MatricYear => Academic, "matriculation.year", "Matric Year", Integer, None, [academic.matriculation.year];
    MatricBoard => Academic, "matriculation.board", "Matric Board", Text, Some(BOARDS), [academic.matriculation.board];
    MatricScore => Academic, "matriculation.score_percentage", "Matric Score %", Number, None, [academic.matriculation.score_percentage];
    InterYear => Academic, "intermediate.year", "Intermediate Year", Integer, None, [academic.intermediate.year];
    InterBoard => Academic, "intermediate.board", "Intermediate Board", Text, Some(BOARDS), [academic.intermediate.board];
    InterScore => Academic, "intermediate.score_percentage", "Intermediate Score %", Number, None, [academic.intermediate.score_percentage];
    InterStream => Academic, "intermediate.pre_engineering_or_pre_medical", "Intermediate Stream", Text, Some(STREAMS), [academic.intermediate.pre_engineering_or_pre_medical];
    AdditionalCertification => Academic, "additional_certification", "Additional Certification", Flag, None, [academic.additional_certification];
    DiplomaProgram => Academic, "diploma.program", "Diploma Program", Text, None, [academic.diploma.program];
    DiplomaSpecialization => Academic, "diploma.specialization", "Diploma Specialization", Text, None, [academic.diploma.specialization];
    DiplomaInstitution => Academic, "diploma.institution", "Diploma Institution", Text, None, [academic.diploma.institution];
    DiplomaCountry => Academic, "diploma.country", "Diploma Country", Text, Some(ACADEMIC_COUNTRIES), [academic.diploma.country];
    DiplomaStart => Academic, "diploma.start_date", "Diploma Start", Text, None, [academic.diploma.start_date];
    DiplomaEnd => Academic, "diploma.end_date", "Diploma End", Text, None, [academic.diploma.end_date];
    DiplomaCgpa => Academic, "diploma.cgpa_percentage", "Diploma CGPA %", Number, None, [academic.diploma.cgpa_percentage];
    BachelorProgram => Academic, "bachelor_degree.program_name", "Bachelor Program", Text, None, [academic.bachelor_degree.program_name];
    BachelorSpecialization => Academic, "bachelor_degree.specialization", "Bachelor Specialization", Text, None, [academic.bachelor_degree.specialization];
    BachelorInstitution => Academic, "bachelor_degree.institution", "Bachelor Institution", Text, None, [academic.bachelor_degree.institution];
    BachelorCountry => Academic, "bachelor_degree.country", "Bachelor Country", Text, Some(ACADEMIC_COUNTRIES), [academic.bachelor_degree.country];
    BachelorStart => Academic, "bachelor_degree.start_date", "Bachelor Start", Text, None, [academic.bachelor_degree.start_date];
    BachelorEnd => Academic, "bachelor_degree.end_date", "Bachelor End", Text, None, [academic.bachelor_degree.end_date];
    BachelorCgpa => Academic, "bachelor_degree.cgpa_percentage", "Bachelor CGPA / %", Text, None, [academic.bachelor_degree.cgpa_percentage];
    HecApplied => Academic, "hec_equivalence_status.applied", "HEC Equivalence Applied", Flag, None, [academic.hec_equivalence_status.applied];
    HecObtainedDate => Academic, "hec_equivalence_status.obtained_date", "HEC Obtained Date", Text, None, [academic.hec_equivalence_status.obtained_date];
    EducationalGap => Academic, "educational_gap", "Educational Gap", Text, Some(EDUCATIONAL_GAPS), [academic.educational_gap];

    // Test scores
    IeltsListening => TestScores, "ielts_scores.listening", "IELTS Listening", Number, None, [test_scores.ielts_scores.listening];
    IeltsReading => TestScores, "ielts_scores.reading", "IELTS Reading", Number, None, [test_scores.ielts_scores.reading];
    IeltsWriting => TestScores, "ielts_scores.writing", "IELTS Writing", Number, None, [test_scores.ielts_scores.writing];
    IeltsSpeaking => TestScores, "ielts_scores.speaking", "IELTS Speaking", Number, None, [test_scores.ielts_scores.speaking];
    ToeflScore => TestScores, "toefl_score", "TOEFL Score", Text, None, [test_scores.toefl_score];
    SatScore => TestScores, "sat_score", "SAT Score", Integer, None, [test_scores.sat_score];
    GreScore => TestScores, "gre_score", "GRE Score", Integer, None, [test_scores.gre_score];
    GmatScore => TestScores, "gmat_score", "GMAT Score", Integer, None, [test_scores.gmat_score];
    NeetScore => TestScores, "neet_score", "NEET Score", Integer, None, [test_scores.neet_score];
    Backlogs => TestScores, "backlogs", "Backlogs", Text, Some(BACKLOGS), [test_scores.backlogs];
    WorkExperience => TestScores, "work_experience", "Work Experience", Text, Some(WORK_EXPERIENCE), [test_scores.work_experience];
    PartTimeWork => TestScores, "part_time_work", "Part-time Work", Flag, None, [test_scores.part_time_work];
    ProfileComplete => TestScores, "profile_completion_status", "Profile Complete", Flag, None, [test_scores.profile_completion_status];

    // Preferences and goals
    PreferredCourse => Preferences, "preferred_course", "Preferred Course", Text, Some(COURSES), [preferences.preferred_course];
    PreferredSpecialization => Preferences, "specialization", "Specialization", Text, None, [preferences.specialization];
    PreferredCountry => Preferences, "preferred_country", "Preferred Country", Text, Some(DESTINATIONS), [preferences.preferred_country];
    University1 => Preferences, "preferred_universities.0", "University Choice 1", Text, None, [preferences.preferred_universities[0]];
    University2 => Preferences, "preferred_universities.1", "University Choice 2", Text, None, [preferences.preferred_universities[1]];
    University3 => Preferences, "preferred_universities.2", "University Choice 3", Text, None, [preferences.preferred_universities[2]];
    IntakeSeason => Preferences, "intended_intake.season", "Intake Season", Text, Some(SEASONS), [preferences.intended_intake.season];
    IntakeYear => Preferences, "intended_intake.year", "Intake Year", Integer, Some(INTAKE_YEARS), [preferences.intended_intake.year];
    StudyReason => Preferences, "study_reason", "Reason for Studying Abroad", Text, None, [preferences.study_reason];
    CareerGoals => Preferences, "career_goals", "Career Goals", Text, None, [preferences.career_goals];
    ScholarshipInterest => Preferences, "scholarship_interest", "Scholarship Interest", Flag, None, [preferences.scholarship_interest];
    CoOpInterest => Preferences, "co_op_interest", "Co-op Interest", Flag, None, [preferences.co_op_interest];
    FamilyAbroad => Preferences, "family_abroad", "Family Abroad", Flag, None, [preferences.family_abroad];
    AccommodationSupport => Preferences, "accommodation_support", "Accommodation Support", Flag, None, [preferences.accommodation_support];

    // Financial and documentation
    FundingSource => Financial, "funding_source", "Funding Source", Text, Some(FUNDING_SOURCES), [financial.funding_source];
    SponsorName => Financial, "sponsor_details.sponsor_name", "Sponsor Name", Text, None, [financial.sponsor_details.sponsor_name];
    SponsorRelation => Financial, "sponsor_details.sponsor_relation", "Sponsor Relation", Text, Some(SPONSOR_RELATIONS), [financial.sponsor_details.sponsor_relation];
    SponsorCnic => Financial, "sponsor_details.sponsor_cnic", "Sponsor CNIC", Text, None, [financial.sponsor_details.sponsor_cnic];
    SponsorIncome => Financial, "sponsor_details.sponsor_annual_income", "Sponsor Annual Income", Text, None, [financial.sponsor_details.sponsor_annual_income];
    BudgetConstraints => Financial, "budget_constraints", "Budget Range", Text, Some(BUDGET_RANGES), [financial.budget_constraints];
    BankStatements => Financial, "bank_statements_submitted", "Bank Statements Submitted", Flag, None, [financial.bank_statements_submitted];
    FinancialAffidavit => Financial, "financial_affidavit", "Financial Affidavit", Flag, None, [financial.financial_affidavit];
    VisaRejections => Financial, "visa_rejections", "Previous Visa Rejections", Flag, None, [financial.visa_rejections];
    TravelHistory => Financial, "travel_history", "Travel History", Text, None, [financial.travel_history];
    PoliceClearance => Financial, "police_clearance_certificate", "Police Clearance Certificate", Flag, None, [financial.police_clearance_certificate];
    MedicalClearance => Financial, "medical_clearance", "Medical Clearance", Flag, None, [financial.medical_clearance];
    MedicalConditions => Financial, "medical_conditions", "Medical Conditions", Text, None, [financial.medical_conditions];
    DomicileCertificate => Financial, "domicile_certificate_submitted", "Domicile Certificate Submitted", Flag, None, [financial.domicile_certificate_submitted];
    NocRequired => Financial, "noc_required", "NOC Required", Flag, None, [financial.noc_required];
    AdditionalInfo => Financial, "additional_info", "Additional Information", Text, None, [financial.additional_info];
}

impl Field {
    /// Upper bound for numeric fields that have one
    pub fn max_number(&self) -> Option<f64> {
        match self {
            Field::IeltsListening
            | Field::IeltsReading
            | Field::IeltsWriting
            | Field::IeltsSpeaking => Some(IELTS_BAND_MAX),
            _ => None,
        }
    }

    fn bounded(&self, value: f64) -> f64 {
        match self.max_number() {
            Some(max) => value.clamp(0.0, max),
            None => value,
        }
    }

    /// Full dotted path including the section (e.g. `personal.full_name.first_name`)
    pub fn path(&self) -> String {
        format!("{}.{}", self.section().key(), self.key())
    }

    /// Resolve a dotted path. The section prefix is required.
    pub fn parse(path: &str) -> Option<Field> {
        let path = path.trim();
        let (section, key) = path.split_once('.')?;
        let section = Section::parse(section)?;
        Self::in_section(section).find(|f| f.key() == key)
    }

    /// Fields of one section, in display order
    pub fn in_section(section: Section) -> impl Iterator<Item = Field> {
        Self::ALL.iter().copied().filter(move |f| f.section() == section)
    }

    /// Write `value` into this field of `state` in place, coercing to the
    /// field's kind.
    pub fn set(&self, state: &mut RegistrationState, value: FieldValue) {
        match (self.slot_mut(state), value.coerce(self.kind())) {
            (SlotMut::Text(slot), FieldValue::Text(v)) => *slot = v,
            (SlotMut::Number(slot), FieldValue::Number(v)) => *slot = self.bounded(v),
            (SlotMut::Integer(slot), FieldValue::Integer(v)) => *slot = v,
            (SlotMut::Flag(slot), FieldValue::Flag(v)) => *slot = v,
            // coerce() always yields the field's own kind
            _ => {}
        }
    }

    /// Copy-on-write update: a new aggregate with only this leaf replaced.
    pub fn apply(&self, state: &RegistrationState, value: FieldValue) -> RegistrationState {
        let mut next = state.clone();
        self.set(&mut next, value);
        next
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
