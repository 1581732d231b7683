//! Export CLI command

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::clock::Clock;
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_file_name, write_expenses_csv};
use crate::services::ExpenseService;
use crate::storage::ExpenseBackend;

/// Where an export lands when no explicit path is given
pub fn default_export_path(settings: &Settings, file_name: &str) -> PathBuf {
    match &settings.export_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Write every expense, in stored order, to `path`
///
/// Returns `Ok(None)` without creating a file when there is nothing to export.
pub fn export_to_path<B: ExpenseBackend, C: Clock>(
    service: &ExpenseService<B, C>,
    path: &Path,
) -> ExpenseResult<Option<PathBuf>> {
    let expenses = service.load_all()?;
    if expenses.is_empty() {
        return Ok(None);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Export(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
    }

    let file = File::create(path)
        .map_err(|e| ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    write_expenses_csv(&expenses, BufWriter::new(file))?;

    info!(path = %path.display(), count = expenses.len(), "exported expenses");
    Ok(Some(path.to_path_buf()))
}

/// Export to `output`, or to a timestamped file in the export directory
pub fn export_expenses<B: ExpenseBackend, C: Clock>(
    service: &ExpenseService<B, C>,
    settings: &Settings,
    output: Option<PathBuf>,
) -> ExpenseResult<Option<PathBuf>> {
    let path = match output {
        Some(path) => path,
        None => default_export_path(settings, &export_file_name(service.clock().now())),
    };
    export_to_path(service, &path)
}

pub fn handle_export<B: ExpenseBackend, C: Clock>(
    service: &ExpenseService<B, C>,
    settings: &Settings,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    match export_expenses(service, settings, output)? {
        Some(path) => println!("CSV exported: {}", path.display()),
        None => println!("No data to export."),
    }
    Ok(())
}
