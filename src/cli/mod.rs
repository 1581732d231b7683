//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod interactive;
pub mod summary;

use std::path::PathBuf;

use clap::Subcommand;

use crate::clock::Clock;
use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::ExpenseBackend;

pub use expense::ListFormat;
pub use interactive::{run_menu, MenuChoice};

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new expense
    Add {
        /// Amount spent (negative for a refund)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name or number (see `categories`)
        #[arg(short, long)]
        category: String,
        /// Optional note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// List expenses, newest first
    #[command(alias = "view")]
    List {
        /// Output layout
        #[arg(short, long, value_enum, default_value = "table")]
        format: ListFormat,
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one expense
    Show {
        /// Expense ID
        id: String,
    },

    /// Monthly summary with category breakdown
    Summary {
        /// Month as YYYY-MM
        #[arg(conflicts_with_all = ["year", "month"])]
        period: Option<String>,
        /// Year (YYYY), defaults to the current year
        #[arg(short, long)]
        year: Option<String>,
        /// Month (01-12), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Change an expense's amount, category or note
    #[command(alias = "edit")]
    Update {
        /// Expense ID
        id: String,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category name or number
        #[arg(short, long)]
        category: Option<String>,
        /// New note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Export all expenses to CSV
    Export {
        /// Output file (defaults to expenses_<timestamp>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete every expense
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// List the expense categories
    Categories,

    /// Show recent audit log entries
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,

    /// Launch the interactive menu
    Menu,
}

/// Dispatch a command
pub fn run_command<B, C>(
    service: &ExpenseService<B, C>,
    settings: &Settings,
    paths: &ExpensePaths,
    command: Commands,
) -> ExpenseResult<()>
where
    B: ExpenseBackend,
    C: Clock,
{
    match command {
        Commands::Add {
            amount,
            category,
            note,
        } => expense::handle_add(service, settings, &amount, &category, &note),
        Commands::List { format, limit } => expense::handle_list(service, settings, format, limit),
        Commands::Show { id } => expense::handle_show(service, settings, &id),
        Commands::Summary {
            period,
            year,
            month,
        } => summary::handle_summary(
            service,
            settings,
            period.as_deref(),
            year.as_deref(),
            month.as_deref(),
        ),
        Commands::Update {
            id,
            amount,
            category,
            note,
        } => expense::handle_update(service, settings, &id, amount, category, note),
        Commands::Delete { id, force } => expense::handle_delete(service, settings, &id, force),
        Commands::Export { output } => export::handle_export(service, settings, output),
        Commands::Clear { force } => expense::handle_clear(service, force),
        Commands::Categories => {
            print!("{}", crate::display::format_category_menu());
            Ok(())
        }
        Commands::History { limit } => print_history(paths, limit),
        Commands::Config => print_config(service, settings, paths),
        Commands::Menu => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_menu(service, settings, stdin.lock(), stdout.lock())
        }
    }
}

fn print_history(paths: &ExpensePaths, limit: usize) -> ExpenseResult<()> {
    let audit = crate::audit::AuditLogger::new(paths.audit_log());
    let entries = audit.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }
    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

fn print_config<B: ExpenseBackend, C: Clock>(
    service: &ExpenseService<B, C>,
    settings: &Settings,
    paths: &ExpensePaths,
) -> ExpenseResult<()> {
    let audit = crate::audit::AuditLogger::new(paths.audit_log());

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data file:      {}", paths.data_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", audit.path().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Audit enabled:   {}", settings.audit_enabled);
    match &settings.export_dir {
        Some(dir) => println!("  Export dir:      {}", dir.display()),
        None => println!("  Export dir:      (current directory)"),
    }
    println!();
    println!("Expenses stored:   {}", service.count()?);
    println!("Audit entries:     {}", audit.entry_count()?);
    Ok(())
}
