use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use log::{debug, LevelFilter};

use studyglobal::cli::{
    handle_office_command, handle_wizard_command, OfficeCommands, WizardCommands,
};
use studyglobal::config::{paths::DATA_DIR_ENV, Settings, StudyPaths};
use studyglobal::storage::init::{initialize_storage, needs_initialization};
use studyglobal::storage::Storage;

#[derive(Parser)]
#[command(
    name = "studyglobal",
    version,
    about = "Student registration wizard and office table in the terminal",
    long_about = "Study Global walks an applicant through a five-step registration \
                  wizard (personal details, academics, test scores, preferences, \
                  finances) and manages a small table of branch offices. Use the \
                  interactive TUI or drive every step from the command line."
)]
struct Cli {
    /// Data directory (defaults to the platform config directory)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug). RUST_LOG also works.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Registration wizard commands
    #[command(subcommand)]
    Wizard(WizardCommands),

    /// Office table commands
    #[command(subcommand)]
    Office(OfficeCommands),

    /// Create the data directory, settings and demo offices
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    builder.format_timestamp_secs().init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => StudyPaths::with_base_dir(dir),
        None => StudyPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    debug!("data directory: {}", paths.base_dir().display());

    let first_run = needs_initialization(&paths);
    let mut storage = Storage::new(paths.clone())?.with_audit_enabled(settings.audit_enabled);
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tui) => {
            studyglobal::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Wizard(cmd)) => {
            handle_wizard_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Office(cmd)) => {
            handle_office_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Study Global at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            if first_run {
                println!(
                    "{} demo offices have been created.",
                    storage.offices.count()?
                );
            } else {
                println!("Existing data was kept ({} offices).", storage.offices.count()?);
            }
            println!();
            println!("Run 'studyglobal tui' to start the registration wizard,");
            println!("or 'studyglobal wizard status' to work from the command line.");
        }
        Some(Commands::Config) => {
            println!("Study Global Configuration");
            println!("==========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Draft file:        {}", paths.draft_file().display());
            println!("Offices file:      {}", paths.offices_file().display());
            println!("Submissions:       {}", paths.submissions_dir().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!("(override with {})", DATA_DIR_ENV);
            println!();
            println!("Settings:");
            println!("  Residence country:  {}", settings.default_residence_country);
            println!("  Admission year:     {}", settings.default_admission_year);
            println!("  Intake year:        {}", settings.default_intake_year);
            println!("  Office page size:   {}", settings.office_page_size);
            println!("  Notification secs:  {}", settings.notification_secs);
            println!("  Audit log enabled:  {}", settings.audit_enabled);
        }
        None => {
            println!("Study Global - student registration in the terminal");
            println!();
            println!("Run 'studyglobal --help' for usage information.");
            println!("Run 'studyglobal tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
