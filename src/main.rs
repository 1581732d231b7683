use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use expense_tracker::audit::AuditLogger;
use expense_tracker::cli::{run_command, Commands};
use expense_tracker::config::{paths::DATA_DIR_ENV, ExpensePaths, Settings};
use expense_tracker::services::ExpenseService;
use expense_tracker::storage::JsonFileBackend;

const LOG_ENV: &str = "EXPENSE_LOG";

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker for the terminal",
    long_about = "Record expenses with a category and note, review them newest \
                  first, summarize spending by month and category, and export \
                  everything to CSV. Run without a command for the interactive menu."
)]
struct Cli {
    /// Base directory for settings, data and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) if !dir.as_os_str().is_empty() => ExpensePaths::with_base_dir(dir),
        _ => ExpensePaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut service = ExpenseService::new(JsonFileBackend::new(paths.data_file()));
    if settings.audit_enabled {
        service = service.with_audit(AuditLogger::new(paths.audit_log()));
    }

    let command = cli.command.unwrap_or(Commands::Menu);
    run_command(&service, &settings, &paths, command)?;

    Ok(())
}
