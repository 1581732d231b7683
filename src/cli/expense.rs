//! Expense CLI commands
//!
//! Implements the add, list, show, update, delete and clear commands.

use clap::ValueEnum;

use crate::clock::Clock;
use crate::config::Settings;
use crate::display::{format_expense_blocks, format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseId, Money};
use crate::services::{ExpenseService, ExpenseUpdate};
use crate::storage::ExpenseBackend;

/// Layout for `list`
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Table,
    Blocks,
}

/// Parse an expense id typed by the user
pub fn parse_id(input: &str) -> ExpenseResult<ExpenseId> {
    input
        .trim()
        .parse()
        .map_err(|_| ExpenseError::Validation(format!("Invalid expense ID: '{}'", input.trim())))
}

/// Parse an amount typed by the user
pub fn parse_amount(input: &str) -> ExpenseResult<Money> {
    Money::parse(input).map_err(|e| ExpenseError::Validation(e.to_string()))
}

pub fn handle_add<B: ExpenseBackend, C: Clock>(
    service: &ExpenseService<B, C>,
    settings: &Settings,
    amount: &str,
    category: &str,
    note: &str,
) -> ExpenseResult<()> {
    let amount = parse_amount(amount)?;
    let category = Category::resolve(category)?;

    let expense = service.add(amount, category.as_str(), note)?;
    println!(
        "Added expense {}: {} ({})",
        expense.id,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.category
    );
    Ok(())
}

pub fn handle_list<B: ExpenseBackend, C: Clock>(
    service: &ExpenseService<B, C>,
    settings: &Settings,
    format: ListFormat,
    limit: Option<usize>,
) -> ExpenseResult<()> {
    let mut expenses = service.list_sorted_by_date_descending()?;
    if let Some(limit) = limit {
        expenses.truncate(limit);
    }

    let output = match format {
        ListFormat::Table => format_expense_table(&expenses, &settings.currency_symbol),
        ListFormat::Blocks => format_expense_blocks(&expenses, &settings.currency_symbol),
    };
    print!("{}", output);
    Ok(())
}

pub fn handle_show<B: ExpenseBackend, C: Clock>(
    service: &ExpenseService<B, C>,
    settings: &Settings,
    id: &str,
) -> ExpenseResult<()> {
    let id = parse_id(id)?;
    let expense = service
        .get(id)?
        .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

    print!(
        "{}",
        format_expense_details(&expense, &settings.currency_symbol)
    );
    Ok(())
}

pub fn handle_update<B: ExpenseBackend, C: Clock>(
    service: &ExpenseService<B, C>,
    settings: &Settings,
    id: &str,
    amount: Option<String>,
    category: Option<String>,
    note: Option<String>,
) -> ExpenseResult<()> {
    let id = parse_id(id)?;
    let changes = ExpenseUpdate {
        amount,
        category,
        note,
    };

    let outcome = service.update(id, changes)?;
    for rejection in &outcome.rejected {
        println!(
            "Skipped {} '{}': {}",
            rejection.field, rejection.input, rejection.reason
        );
    }

    if outcome.changed {
        println!("Updated expense {}", outcome.expense.id);
        print!(
            "{}",
            format_expense_details(&outcome.expense, &settings.currency_symbol)
        );
    } else {
        println!("No changes made to expense {}", outcome.expense.id);
    }
    Ok(())
}

pub fn handle_delete<B: ExpenseBackend, C: Clock>(
    service: &ExpenseService<B, C>,
    settings: &Settings,
    id: &str,
    force: bool,
) -> ExpenseResult<()> {
    let id = parse_id(id)?;

    if !force {
        let expense = service
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        println!("About to delete expense:");
        print!(
            "{}",
            format_expense_details(&expense, &settings.currency_symbol)
        );
        println!();
        println!("Use --force to confirm deletion");
        return Ok(());
    }

    if !service.delete(id)? {
        return Err(ExpenseError::expense_not_found(id.to_string()));
    }
    println!("Deleted expense {}", id);
    Ok(())
}

pub fn handle_clear<B: ExpenseBackend, C: Clock>(
    service: &ExpenseService<B, C>,
    force: bool,
) -> ExpenseResult<()> {
    if !force {
        let count = service.count()?;
        println!("This will permanently delete all {} expenses.", count);
        println!("Use --force to confirm");
        return Ok(());
    }

    let removed = service.clear_all()?;
    println!("All data cleared ({} expenses removed)", removed);
    Ok(())
}
