//! Application display formatting
//!
//! Wizard progress and section summaries for terminal output.

use crate::models::{DegreeField, Field, RegistrationState, Section};
use crate::wizard::{Step, WizardController};

/// How a step appears in the stepper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMarker {
    Current,
    Completed,
    Accessible,
    Locked,
}

impl StepMarker {
    pub fn for_step(wizard: &WizardController, step: Step) -> Self {
        if step == wizard.current() {
            Self::Current
        } else if wizard.is_completed(step) {
            Self::Completed
        } else if wizard.is_accessible(step) {
            Self::Accessible
        } else {
            Self::Locked
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Current => ">",
            Self::Completed => "x",
            Self::Accessible => " ",
            Self::Locked => "-",
        }
    }
}

/// Format the stepper and progress for `wizard status`
pub fn format_wizard_status(wizard: &WizardController) -> String {
    let mut output = String::new();
    let current = wizard.current();

    output.push_str(&format!("{}\n", current));
    output.push_str(&format!("  {}\n", current.description()));
    output.push_str(&format!("  Progress: {}%\n\n", wizard.progress_percent()));

    for step in Step::all() {
        let marker = StepMarker::for_step(wizard, step);
        output.push_str(&format!(
            "  [{}] {}. {}\n",
            marker.symbol(),
            step.number(),
            step.title()
        ));
    }

    let name = wizard.state().personal.display_name();
    if !name.is_empty() {
        output.push_str(&format!("\nApplicant: {}\n", name));
    }

    output
}

/// Format every field of one section with its current value and path
pub fn format_section(state: &RegistrationState, section: Section) -> String {
    let mut output = format!("{}\n", section);

    let width = Field::in_section(section)
        .map(|f| f.label().len())
        .max()
        .unwrap_or(0);

    for field in Field::in_section(section) {
        let value = field.get(state);
        let shown = if value.is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        };
        output.push_str(&format!(
            "  {:<width$}  {:<24}  {}\n",
            field.label(),
            shown,
            field.path(),
            width = width
        ));
    }

    match section {
        Section::Academic => {
            let degrees = &state.academic.additional_degrees;
            if degrees.is_empty() {
                output.push_str("\n  Additional degrees: none\n");
            } else {
                output.push_str("\n  Additional degrees:\n");
                for degree in degrees {
                    output.push_str(&format!("    {}\n", degree.id));
                    for field in DegreeField::ALL {
                        let value = degree.get(field);
                        if !value.is_empty() {
                            output.push_str(&format!("      {}: {}\n", field.label(), value));
                        }
                    }
                }
            }
        }
        Section::TestScores => {
            let overall = state
                .test_scores
                .ielts_scores
                .overall()
                .map(|band| format!("{:.1}", band))
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!("\n  IELTS Overall: {}\n", overall));
        }
        _ => {}
    }

    output
}

/// Format the whole application, section by section
pub fn format_application(state: &RegistrationState) -> String {
    Section::ALL
        .iter()
        .map(|section| format_section(state, *section))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_markers() {
        let mut wizard = WizardController::new();
        wizard.advance();
        wizard.advance();
        wizard.retreat();

        let text = format_wizard_status(&wizard);
        assert!(text.starts_with("Step 2 of 5: Academic Background"));
        assert!(text.contains("Progress: 40%"));
        assert!(text.contains("[x] 1. Personal Details"));
        assert!(text.contains("[>] 2. Academic Background"));
        assert!(text.contains("[-] 3. Test Scores"));
    }

    #[test]
    fn test_revisited_step_stays_completed() {
        let mut wizard = WizardController::new();
        wizard.advance();
        wizard.advance();
        wizard.retreat();
        wizard.retreat();

        // current wins over completed
        assert!(wizard.is_completed(Step::FIRST));
        assert_eq!(StepMarker::for_step(&wizard, Step::FIRST), StepMarker::Current);
        assert_eq!(
            StepMarker::for_step(&wizard, Step::from_index(1).unwrap()),
            StepMarker::Completed
        );
        assert_eq!(
            StepMarker::for_step(&wizard, Step::from_index(2).unwrap()),
            StepMarker::Locked
        );
    }

    #[test]
    fn test_section_shows_overall_band() {
        let mut wizard = WizardController::new();
        for field in [
            Field::IeltsListening,
            Field::IeltsReading,
            Field::IeltsWriting,
            Field::IeltsSpeaking,
        ] {
            wizard.apply_input(field, "6.5");
        }

        let text = format_section(wizard.state(), Section::TestScores);
        assert!(text.contains("IELTS Overall: 6.5"));
        assert!(text.contains("test_scores.ielts_scores.listening"));
    }

    #[test]
    fn test_section_lists_degrees() {
        let mut wizard = WizardController::new();
        let id = wizard.add_degree();
        wizard
            .update_degree(id, DegreeField::ProgramName, "MS Data Science")
            .unwrap();

        let text = format_section(wizard.state(), Section::Academic);
        assert!(text.contains(&id.short()));
        assert!(text.contains("Program Name: MS Data Science"));
    }

    #[test]
    fn test_application_covers_all_sections() {
        let text = format_application(&RegistrationState::default());
        for section in Section::ALL {
            assert!(text.contains(&section.to_string()));
        }
    }
}
