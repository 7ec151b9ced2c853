//! Office CLI commands
//!
//! Implements CLI commands for the office table.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_office_details, format_office_list, format_office_page};
use crate::error::{StudyError, StudyResult};
use crate::export::export_offices_csv;
use crate::services::{page, OfficeService};
use crate::storage::Storage;

/// Office subcommands
#[derive(Subcommand)]
pub enum OfficeCommands {
    /// List offices
    List {
        /// Case-insensitive text matched against every column
        #[arg(short, long)]
        filter: Option<String>,
        /// Page number (starting at 1)
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Show every office on one page
        #[arg(short, long)]
        all: bool,
    },
    /// Show office details
    Show {
        /// Office ID or code
        office: String,
    },
    /// Delete one or more offices
    Delete {
        /// Office IDs or codes
        #[arg(required = true)]
        offices: Vec<String>,
    },
    /// Restore the demo offices
    Reset,
    /// Export offices to CSV
    Export {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
        /// Only export offices matching this text
        #[arg(short, long)]
        filter: Option<String>,
    },
}

/// Handle an office command
pub fn handle_office_command(
    storage: &Storage,
    settings: &Settings,
    cmd: OfficeCommands,
) -> StudyResult<()> {
    let service = OfficeService::new(storage);

    match cmd {
        OfficeCommands::List { filter, page: number, all } => {
            let offices = service.list(filter.as_deref())?;
            if all {
                println!("{}", format_office_list(&offices));
            } else {
                let index = number.saturating_sub(1);
                println!(
                    "{}",
                    format_office_page(&page(&offices, index, settings.office_page_size))
                );
            }
        }

        OfficeCommands::Show { office } => {
            let found = service.get(&office)?;
            print!("{}", format_office_details(&found));
        }

        OfficeCommands::Delete { offices } => {
            let before = service.list(None)?;
            let remaining = service.delete(&offices)?;

            let removed: Vec<_> = before
                .iter()
                .filter(|o| !remaining.iter().any(|r| r.id == o.id))
                .map(|o| o.office_code.as_str())
                .collect();

            if removed.is_empty() {
                println!("No matching offices found.");
            } else {
                println!("Deleted {} office(s): {}", removed.len(), removed.join(", "));
                println!("{} office(s) remaining.", remaining.len());
            }
        }

        OfficeCommands::Reset => {
            let count = service.reset()?;
            println!("Restored {} demo offices.", count);
        }

        OfficeCommands::Export { output, filter } => {
            let offices = service.list(filter.as_deref())?;
            let file = File::create(&output).map_err(|e| {
                StudyError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            export_offices_csv(&offices, BufWriter::new(file))?;
            println!("Exported {} offices to: {}", offices.len(), output.display());
        }
    }

    Ok(())
}
