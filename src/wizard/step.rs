//! Wizard steps
//!
//! Each step corresponds 1:1 to a section of the registration aggregate.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Section;

/// Position in the five-step wizard (index 0..=4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Step(usize);

impl Step {
    /// Number of steps
    pub const COUNT: usize = 5;
    /// The first step
    pub const FIRST: Step = Step(0);
    /// The final step, where the application is submitted
    pub const LAST: Step = Step(Self::COUNT - 1);

    /// All steps in order
    pub fn all() -> impl Iterator<Item = Step> {
        (0..Self::COUNT).map(Step)
    }

    /// Build a step from a zero-based index
    pub fn from_index(index: usize) -> Option<Step> {
        (index < Self::COUNT).then_some(Step(index))
    }

    /// Build a step from a section
    pub fn for_section(section: Section) -> Step {
        let index = Section::ALL
            .iter()
            .position(|s| *s == section)
            .unwrap_or_default();
        Step(index)
    }

    /// Zero-based index
    pub fn index(&self) -> usize {
        self.0
    }

    /// One-based number shown to the user
    pub fn number(&self) -> usize {
        self.0 + 1
    }

    /// Section edited on this step
    pub fn section(&self) -> Section {
        Section::ALL[self.0]
    }

    /// The following step, if any
    pub fn next(&self) -> Option<Step> {
        Self::from_index(self.0 + 1)
    }

    /// The preceding step, if any
    pub fn prev(&self) -> Option<Step> {
        self.0.checked_sub(1).map(Step)
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }

    /// Step title
    pub fn title(&self) -> &'static str {
        match self.section() {
            Section::Personal => "Personal Details",
            Section::Academic => "Academic Background",
            Section::TestScores => "Test Scores",
            Section::Preferences => "Preferences & Goals",
            Section::Financial => "Financial & Documentation",
        }
    }

    /// One-line description of the step
    pub fn description(&self) -> &'static str {
        match self.section() {
            Section::Personal => "Basic information and contact details",
            Section::Academic => "Educational qualifications and history",
            Section::TestScores => "Language and standardized test scores",
            Section::Preferences => "Study preferences and career objectives",
            Section::Financial => "Financial details and required documents",
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}: {}", self.number(), Self::COUNT, self.title())
    }
}

impl TryFrom<usize> for Step {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Step::from_index(index).ok_or_else(|| format!("step index {} out of range", index))
    }
}

impl From<Step> for usize {
    fn from(step: Step) -> usize {
        step.0
    }
}
