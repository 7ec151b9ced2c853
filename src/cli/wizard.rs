//! Wizard CLI commands
//!
//! Drives the registration wizard one command at a time against the saved
//! draft.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::{format_application, format_section, format_wizard_status};
use crate::error::{StudyError, StudyResult};
use crate::export::{export_application_json, export_application_yaml};
use crate::models::{Field, Section};
use crate::services::WizardService;
use crate::storage::Storage;
use crate::wizard::{Step, SubmitOutcome, WizardController};

/// Application export format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ApplicationFormat {
    Json,
    Yaml,
}

/// Wizard subcommands
#[derive(Subcommand)]
pub enum WizardCommands {
    /// Show the current step and progress
    Status,
    /// Show the fields of a section (current step by default, or "all")
    Show {
        /// Section name (personal, academic, test_scores, preferences, financial, all)
        section: Option<String>,
    },
    /// List the field paths accepted by `set`
    Fields {
        /// Limit to one section
        section: Option<String>,
    },
    /// Set a field, e.g. `set personal.full_name.first_name Ayesha`
    Set {
        /// Dotted field path
        path: String,
        /// New value (numbers and yes/no are coerced)
        value: String,
    },
    /// Complete the current step and move to the next one
    Next,
    /// Go back one step
    Back,
    /// Jump to a step (1-5) that is already reachable
    Goto {
        /// Step number
        step: usize,
    },
    /// Manage additional degrees
    #[command(subcommand)]
    Degree(DegreeCommands),
    /// Submit the application (final step only)
    Submit,
    /// Discard the saved draft
    Reset,
    /// Export the application
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ApplicationFormat,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Additional degree subcommands
#[derive(Subcommand)]
pub enum DegreeCommands {
    /// Add an empty degree entry
    Add,
    /// Set one field of a degree entry
    Set {
        /// Degree ID (short form is fine)
        id: String,
        /// Field name (degree_type, program_name, institution, country,
        /// start_date, end_date, cgpa_percentage)
        field: String,
        value: String,
    },
    /// Remove a degree entry
    Remove {
        /// Degree ID (short form is fine)
        id: String,
    },
}

/// Handle a wizard command
pub fn handle_wizard_command(
    storage: &Storage,
    settings: &Settings,
    cmd: WizardCommands,
) -> StudyResult<()> {
    let service = WizardService::new(storage, settings);

    match cmd {
        WizardCommands::Status => {
            let wizard = service.open()?;
            print!("{}", format_wizard_status(&wizard));
            if !service.has_draft() {
                println!("\nNo draft saved yet.");
            }
        }

        WizardCommands::Show { section } => {
            let wizard = service.open()?;
            match section.as_deref() {
                Some("all") => print!("{}", format_application(wizard.state())),
                Some(name) => print!("{}", format_section(wizard.state(), parse_section(name)?)),
                None => print!(
                    "{}",
                    format_section(wizard.state(), wizard.current().section())
                ),
            }
        }

        WizardCommands::Fields { section } => {
            let sections = match section {
                Some(name) => vec![parse_section(&name)?],
                None => Section::ALL.to_vec(),
            };
            for section in sections {
                println!("{}", section);
                for field in Field::in_section(section) {
                    match field.choices() {
                        Some(choices) => println!(
                            "  {:<52} {:<8} [{}]",
                            field.path(),
                            field.kind().to_string(),
                            choices.join(", ")
                        ),
                        None => println!("  {:<52} {}", field.path(), field.kind()),
                    }
                }
            }
        }

        WizardCommands::Set { path, value } => {
            let (wizard, field) = service.set_field(&path, &value)?;
            println!("{} = {}", field.label(), field.get(wizard.state()));
            if let Some(overall) = ielts_overall_after(field, &wizard) {
                println!("IELTS overall band: {}", overall);
            }
        }

        WizardCommands::Next => {
            let (wizard, moved) = service.advance()?;
            if moved {
                println!("Moved to {}", wizard.current());
            } else {
                println!("Already on the final step. Run 'studyglobal wizard submit' to submit.");
            }
        }

        WizardCommands::Back => {
            let (wizard, moved) = service.retreat()?;
            if moved {
                println!("Moved to {}", wizard.current());
            } else {
                println!("Already on the first step.");
            }
        }

        WizardCommands::Goto { step } => {
            let index = step.checked_sub(1).unwrap_or(usize::MAX);
            let (wizard, moved) = service.jump_to(index)?;
            if moved {
                println!("Moved to {}", wizard.current());
            } else if Step::from_index(index).is_none() {
                return Err(StudyError::Validation(format!(
                    "Step must be between 1 and {}",
                    Step::COUNT
                )));
            } else {
                println!("{}", wizard.current());
            }
        }

        WizardCommands::Degree(cmd) => handle_degree_command(&service, cmd)?,

        WizardCommands::Submit => {
            let (wizard, outcome) = service.submit_to_file()?;
            report_submit(&wizard, outcome)?;
        }

        WizardCommands::Reset => {
            if service.reset()? {
                println!("Draft discarded.");
            } else {
                println!("No draft to discard.");
            }
        }

        WizardCommands::Export { format, output } => {
            let wizard = service.open()?;
            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        StudyError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    write_export(&wizard, format, &mut BufWriter::new(file))?;
                    println!("Application exported to: {}", path.display());
                }
                None => write_export(&wizard, format, &mut io::stdout().lock())?,
            }
        }
    }

    Ok(())
}

fn handle_degree_command(service: &WizardService, cmd: DegreeCommands) -> StudyResult<()> {
    match cmd {
        DegreeCommands::Add => {
            let (_, id) = service.add_degree()?;
            println!("Added degree {}", id);
        }
        DegreeCommands::Set { id, field, value } => {
            let (_, id) = service.update_degree(&id, &field, &value)?;
            println!("Updated degree {}", id);
        }
        DegreeCommands::Remove { id } => {
            let (_, id) = service.remove_degree(&id)?;
            println!("Removed degree {}", id);
        }
    }
    Ok(())
}

fn write_export<W: Write>(
    wizard: &WizardController,
    format: ApplicationFormat,
    writer: &mut W,
) -> StudyResult<()> {
    match format {
        ApplicationFormat::Json => export_application_json(wizard, writer, true),
        ApplicationFormat::Yaml => export_application_yaml(wizard, writer),
    }
}

/// Print an accepted submission; a refused or failed one becomes an error
fn report_submit(wizard: &WizardController, outcome: SubmitOutcome) -> StudyResult<()> {
    match outcome {
        SubmitOutcome::Accepted(ack) => {
            println!("Application submitted.");
            println!("  Submission ID: {}", ack.submission_id);
            println!(
                "  Received:      {}",
                ack.received_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            Ok(())
        }
        SubmitOutcome::Rejected(reason) => {
            eprintln!("Your answers are still saved in the draft.");
            Err(StudyError::Submission(reason))
        }
        SubmitOutcome::NotOnFinalStep => Err(StudyError::Validation(format!(
            "Submit is only available on step {} (currently {})",
            Step::COUNT,
            wizard.current()
        ))),
    }
}

fn parse_section(name: &str) -> StudyResult<Section> {
    Section::parse(name).ok_or_else(|| {
        let known: Vec<_> = Section::ALL.iter().map(|s| s.key()).collect();
        StudyError::Validation(format!(
            "Unknown section '{}'. Expected one of: {}, all",
            name,
            known.join(", ")
        ))
    })
}

fn ielts_overall_after(field: Field, wizard: &WizardController) -> Option<String> {
    let is_ielts = matches!(
        field,
        Field::IeltsListening | Field::IeltsReading | Field::IeltsWriting | Field::IeltsSpeaking
    );
    is_ielts.then(|| {
        wizard
            .ielts_overall()
            .map(|band| format!("{:.1}", band))
            .unwrap_or_else(|| "pending (all four scores needed)".to_string())
    })
}
