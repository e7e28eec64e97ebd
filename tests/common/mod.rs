// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use fintrack::application::LedgerService;
use fintrack::domain::RawEntry;
use tempfile::TempDir;

/// Helper to create a service backed by a ledger file in a temporary directory
pub fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("finance_data.csv");
    let service = LedgerService::open(path)?;
    Ok((service, temp_dir))
}

/// Helper to parse a YYYY-MM-DD string
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Fixed "today" so blank dates are deterministic
pub fn today() -> NaiveDate {
    parse_date("2024-06-15")
}

/// Admit an entry, failing the test on rejection
pub fn add(
    service: &mut LedgerService,
    kind: &str,
    category: &str,
    amount: &str,
    date: &str,
) -> Result<()> {
    service.add_entry_on(
        RawEntry {
            kind,
            category,
            description: "",
            amount,
            date,
        },
        today(),
    )?;
    Ok(())
}

/// Test fixture: a few months of typical household activity
pub struct Household;

impl Household {
    pub fn record(service: &mut LedgerService) -> Result<()> {
        add(service, "Income", "Salary", "3200", "2024-01-01")?;
        add(service, "Expense", "Rent", "1100", "2024-01-03")?;
        add(service, "Expense", "Groceries", "84.30", "2024-01-07")?;
        add(service, "Expense", "Groceries", "91.15", "2024-01-21")?;
        add(service, "Income", "Salary", "3200", "2024-02-01")?;
        add(service, "Expense", "Rent", "1100", "2024-02-03")?;
        add(service, "Expense", "Utilities", "140", "2024-02-11")?;
        add(service, "Expense", "Groceries", "102.55", "2024-02-18")?;
        add(service, "Income", "Freelance", "650", "2024-03-09")?;
        add(service, "Expense", "Dining", "45.80", "2023-12-31")?;
        Ok(())
    }
}
