use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::application::LedgerService;
use crate::domain::{RawEntry, ValidationError};

use super::render;

/// Interactive seven-option menu over a ledger.
///
/// Reads choices from `input` and writes prompts and reports to `output`.
/// Exiting, either via option 7 or end of input, saves the ledger.
pub struct Menu<'a, R, W> {
    service: &'a mut LedgerService,
    input: R,
    output: W,
    currency: String,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(service: &'a mut LedgerService, input: R, output: W, currency: &str) -> Self {
        Self {
            service,
            input,
            output,
            currency: currency.to_string(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        if self.service.loaded_existing() {
            writeln!(self.output, "Loaded existing finance data.")?;
        }

        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                info!("input closed, saving and exiting");
                self.export()?;
                break;
            };

            match choice.trim() {
                "1" => self.add_entry("Income")?,
                "2" => self.add_entry("Expense")?,
                "3" => render::balance(
                    &mut self.output,
                    &self.service.balance(),
                    &self.currency,
                    "table",
                )?,
                "4" => render::categories(
                    &mut self.output,
                    &self.service.category_summary(),
                    &self.currency,
                    "table",
                )?,
                "5" => render::monthly(
                    &mut self.output,
                    &self.service.monthly_summary(),
                    &self.currency,
                    "table",
                )?,
                "6" => self.export()?,
                "7" => {
                    self.export()?;
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }

        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "==== Personal Finance Tracker ====")?;
        writeln!(self.output, "1. Add Income")?;
        writeln!(self.output, "2. Add Expense")?;
        writeln!(self.output, "3. View Balance")?;
        writeln!(self.output, "4. Category Summary")?;
        writeln!(self.output, "5. Monthly Summary")?;
        writeln!(self.output, "6. Export to CSV")?;
        writeln!(self.output, "7. Exit")?;
        Ok(())
    }

    /// Print `message` and read one line. `None` on end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn add_entry(&mut self, kind: &str) -> Result<()> {
        let label = kind.to_lowercase();

        // End of input mid-entry counts as blank answers; the entry then fails validation
        let category = self
            .prompt(&format!("Enter {} category: ", label))?
            .unwrap_or_default();
        let description = self.prompt("Enter description: ")?.unwrap_or_default();
        let amount = self.prompt("Enter amount: ")?.unwrap_or_default();
        let date = self
            .prompt("Enter date (YYYY-MM-DD) or leave blank for today: ")?
            .unwrap_or_default();

        let result = self.service.add_entry(RawEntry {
            kind,
            category: &category,
            description: &description,
            amount: &amount,
            date: &date,
        });

        match result {
            Ok(_) => writeln!(self.output, "{} added successfully!", kind)?,
            Err(ValidationError::InvalidKind(_)) => writeln!(self.output, "Invalid entry type.")?,
            Err(ValidationError::InvalidDate(_)) => writeln!(
                self.output,
                "Invalid date format. Please use YYYY-MM-DD."
            )?,
            Err(ValidationError::InvalidAmount { .. }) => writeln!(
                self.output,
                "Invalid amount. Please enter a numeric value."
            )?,
        }
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        self.service
            .save()
            .with_context(|| format!("Could not write {}", self.service.path().display()))?;
        writeln!(
            self.output,
            "Data exported to {}",
            self.service.path().display()
        )?;
        Ok(())
    }
}
