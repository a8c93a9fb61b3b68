use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use loan_ledger::audit::AuditLogger;
use loan_ledger::cli::shell::RECENT_AUDIT_ENTRIES;
use loan_ledger::cli::{handle_schedule_command, Prompter, ScheduleArgs, Shell};
use loan_ledger::config::{LedgerPaths, Settings};
use loan_ledger::display::format_audit_log;
use loan_ledger::logging::init_logging;
use loan_ledger::services::LoanService;
use loan_ledger::storage::InMemoryLoanRepository;

#[derive(Parser)]
#[command(
    name = "loan-ledger",
    version,
    about = "Terminal loan ledger with daily simple interest",
    long_about = "loan-ledger keeps fixed-term loans for the length of a session and \
                  computes the simple interest each accrues per day, at the base \
                  rate plus margin, over a 365-day year."
)]
struct Cli {
    /// Directory for settings and the audit log
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive loan shell (the default)
    Shell,

    /// Compute a daily interest schedule without storing the loan
    Schedule(ScheduleArgs),

    /// Show the most recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = RECENT_AUDIT_ENTRIES)]
        count: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the settings file with default values
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&settings.log_level);
    tracing::debug!(base_dir = %paths.base_dir().display(), "Loaded settings");

    let color = settings.color && !cli.no_color;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(&paths, &settings, color)?,
        Commands::Schedule(args) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            handle_schedule_command(&args, &settings, color, &mut out)?;
            out.flush()?;
        }
        Commands::Audit { count } => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.read_recent(count)?;
            let total = logger.entry_count()?;
            println!("{}", format_audit_log(logger.path(), &entries, total).trim_end());
        }
        Commands::Config { init } => {
            if init {
                settings.save(&paths)?;
                println!("Wrote settings to {}", paths.settings_file().display());
                println!();
            }

            println!("loan-ledger Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Colour output:    {}", settings.color);
            println!("  Pretty JSON:      {}", settings.pretty_json);
            println!("  Audit enabled:    {}", settings.audit_enabled);
            match settings.default_currency {
                Some(currency) => println!("  Default currency: {}", currency),
                None => println!("  Default currency: (none)"),
            }
            println!("  Log level:        {}", settings.log_level);
        }
    }

    Ok(())
}

fn run_shell(paths: &LedgerPaths, settings: &Settings, color: bool) -> Result<()> {
    let repository = InMemoryLoanRepository::new();

    let audit = if settings.audit_enabled {
        match paths.ensure_directories() {
            Ok(()) => Some(AuditLogger::new(paths.audit_log())),
            Err(e) => {
                tracing::warn!(error = %e, "Audit log disabled");
                None
            }
        }
    } else {
        None
    };

    let mut service = LoanService::new(&repository);
    if let Some(audit) = &audit {
        service = service.with_audit(audit);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock(), color);

    Shell::new(prompter, service, settings).run()?;
    Ok(())
}
