//! Summary CLI command

use crate::clock::Clock;
use crate::config::Settings;
use crate::display::format_monthly_summary;
use crate::error::ExpenseResult;
use crate::models::Period;
use crate::reports::MonthlySummary;
use crate::services::ExpenseService;
use crate::storage::ExpenseBackend;

/// Resolve the requested period, filling missing parts from `current`
pub fn resolve_period(
    year: Option<&str>,
    month: Option<&str>,
    current: Period,
) -> ExpenseResult<Period> {
    let year = match year.map(str::trim).filter(|s| !s.is_empty()) {
        Some(year) => year.to_string(),
        None => current.year.to_string(),
    };
    let month = match month.map(str::trim).filter(|s| !s.is_empty()) {
        Some(month) => month.to_string(),
        None => current.month.to_string(),
    };
    Period::parse(&year, &month)
}

/// Build the summary for a period from the stored expenses
pub fn monthly_summary<B: ExpenseBackend, C: Clock>(
    service: &ExpenseService<B, C>,
    period: Period,
) -> ExpenseResult<MonthlySummary> {
    let expenses = service.load_all()?;
    Ok(MonthlySummary::generate(&expenses, period))
}

pub fn handle_summary<B: ExpenseBackend, C: Clock>(
    service: &ExpenseService<B, C>,
    settings: &Settings,
    period: Option<&str>,
    year: Option<&str>,
    month: Option<&str>,
) -> ExpenseResult<()> {
    let period = match period {
        Some(period) => Period::parse_combined(period)?,
        None => resolve_period(year, month, Period::containing(service.clock().now()))?,
    };

    let summary = monthly_summary(service, period)?;
    print!(
        "{}",
        format_monthly_summary(&summary, &settings.currency_symbol)
    );
    Ok(())
}
