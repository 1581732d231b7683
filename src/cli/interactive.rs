//! Interactive menu
//!
//! A numbered menu over the same service calls as the subcommands. Input and
//! output are generic so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use tracing::debug;

use super::expense::{parse_amount, parse_id};
use super::export::export_expenses;
use super::summary::{monthly_summary, resolve_period};
use crate::clock::Clock;
use crate::config::Settings;
use crate::display::{format_category_menu, format_expense_blocks, format_monthly_summary};
use crate::error::ExpenseResult;
use crate::models::{Category, Period};
use crate::services::{ExpenseService, ExpenseUpdate};
use crate::storage::ExpenseBackend;

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Summary,
    Update,
    Delete,
    Export,
    Clear,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Summary,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Export,
        MenuChoice::Clear,
        MenuChoice::Exit,
    ];

    /// Parse a menu number ("1" through "8")
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Expense",
            MenuChoice::View => "View All Expenses",
            MenuChoice::Summary => "Monthly Summary",
            MenuChoice::Update => "Update Expense",
            MenuChoice::Delete => "Delete Expense",
            MenuChoice::Export => "Export to CSV",
            MenuChoice::Clear => "Clear All Data",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Run the menu until Exit or end of input
pub fn run_menu<B, C, R, W>(
    service: &ExpenseService<B, C>,
    settings: &Settings,
    input: R,
    output: W,
) -> ExpenseResult<()>
where
    B: ExpenseBackend,
    C: Clock,
    R: BufRead,
    W: Write,
{
    let mut session = Session {
        service,
        settings,
        input,
        output,
    };
    session.run()
}

struct Session<'a, B, C, R, W> {
    service: &'a ExpenseService<B, C>,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<B, C, R, W> Session<'_, B, C, R, W>
where
    B: ExpenseBackend,
    C: Clock,
    R: BufRead,
    W: Write,
{
    fn run(&mut self) -> ExpenseResult<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter choice: ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid option.")?;
                continue;
            };
            debug!(?choice, "menu selection");

            if choice == MenuChoice::Exit {
                writeln!(self.output, "Goodbye.")?;
                break;
            }

            // Errors end the action, not the session
            if let Err(e) = self.dispatch(choice) {
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ExpenseResult<()> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::View => self.view().map(|_| ()),
            MenuChoice::Summary => self.summary(),
            MenuChoice::Update => self.update(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Export => self.export(),
            MenuChoice::Clear => self.clear(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> ExpenseResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "===== Expense Tracker =====")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    /// Print a prompt and read one line without its line ending; `None` at end of input
    fn prompt(&mut self, label: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for a category number until a valid one is given
    fn choose_category(&mut self) -> ExpenseResult<Option<Category>> {
        write!(self.output, "{}", format_category_menu())?;
        loop {
            let Some(line) = self.prompt("Enter choice: ")? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>().ok().and_then(Category::by_index) {
                Some(category) => return Ok(Some(category)),
                None => writeln!(
                    self.output,
                    "Choose a number between 1 and {}.",
                    Category::all().len()
                )?,
            }
        }
    }

    fn add(&mut self) -> ExpenseResult<()> {
        let prompt = format!("Amount ({}): ", self.settings.currency_symbol);
        let Some(line) = self.prompt(&prompt)? else {
            return Ok(());
        };
        let amount = match parse_amount(&line) {
            Ok(amount) => amount,
            Err(_) => {
                writeln!(self.output, "Invalid amount.")?;
                return Ok(());
            }
        };

        let Some(category) = self.choose_category()? else {
            return Ok(());
        };
        let note = self.prompt("Note (optional): ")?.unwrap_or_default();

        self.service.add(amount, category.as_str(), note)?;
        writeln!(self.output, "Expense added successfully!")?;
        Ok(())
    }

    /// Print all expenses newest first; returns whether any exist
    fn view(&mut self) -> ExpenseResult<bool> {
        let expenses = self.service.list_sorted_by_date_descending()?;
        write!(
            self.output,
            "{}",
            format_expense_blocks(&expenses, &self.settings.currency_symbol)
        )?;
        Ok(!expenses.is_empty())
    }

    fn summary(&mut self) -> ExpenseResult<()> {
        let current = Period::containing(self.service.clock().now());
        let year = self.prompt(&format!("Year [{}]: ", current.year))?;
        let month = self.prompt(&format!("Month [{:02}]: ", current.month))?;

        let period = resolve_period(year.as_deref(), month.as_deref(), current)?;
        let summary = monthly_summary(self.service, period)?;
        write!(
            self.output,
            "{}",
            format_monthly_summary(&summary, &self.settings.currency_symbol)
        )?;
        Ok(())
    }

    fn update(&mut self) -> ExpenseResult<()> {
        if !self.view()? {
            return Ok(());
        }
        let Some(line) = self.prompt("Enter ID to update: ")? else {
            return Ok(());
        };
        let Ok(id) = parse_id(&line) else {
            writeln!(self.output, "Invalid ID.")?;
            return Ok(());
        };
        if self.service.get(id)?.is_none() {
            writeln!(self.output, "ID not found.")?;
            return Ok(());
        }

        writeln!(self.output, "Press Enter to keep the current value.")?;
        let mut changes = ExpenseUpdate::new();
        if let Some(amount) = self.prompt("New amount: ")? {
            changes = changes.amount(amount);
        }

        write!(self.output, "{}", format_category_menu())?;
        if let Some(choice) = self.prompt("New category number: ")? {
            let choice = choice.trim();
            if !choice.is_empty() {
                match choice.parse::<usize>().ok().and_then(Category::by_index) {
                    Some(category) => changes = changes.category(category.as_str()),
                    None => writeln!(self.output, "Invalid category, keeping current.")?,
                }
            }
        }

        if let Some(note) = self.prompt("New note: ")? {
            changes = changes.note(note);
        }

        let outcome = self.service.update(id, changes)?;
        for rejection in &outcome.rejected {
            writeln!(self.output, "Invalid {}, keeping current.", rejection.field)?;
        }
        writeln!(self.output, "Expense updated.")?;
        Ok(())
    }

    fn delete(&mut self) -> ExpenseResult<()> {
        if !self.view()? {
            return Ok(());
        }
        let Some(line) = self.prompt("Enter ID to delete: ")? else {
            return Ok(());
        };
        let Ok(id) = parse_id(&line) else {
            writeln!(self.output, "Invalid ID.")?;
            return Ok(());
        };

        if self.service.delete(id)? {
            writeln!(self.output, "Expense deleted.")?;
        } else {
            writeln!(self.output, "No entry found with that ID.")?;
        }
        Ok(())
    }

    fn export(&mut self) -> ExpenseResult<()> {
        match export_expenses(self.service, self.settings, None)? {
            Some(path) => writeln!(self.output, "CSV exported: {}", path.display())?,
            None => writeln!(self.output, "No data to export.")?,
        }
        Ok(())
    }

    fn clear(&mut self) -> ExpenseResult<()> {
        let confirmation = self.prompt("Type YES to clear all data: ")?;
        if confirmation.as_deref().map(str::trim) == Some("YES") {
            self.service.clear_all()?;
            writeln!(self.output, "All data cleared.")?;
        } else {
            writeln!(self.output, "Cancelled.")?;
        }
        Ok(())
    }
}
