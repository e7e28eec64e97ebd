mod menu;
pub mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::LedgerService;
use crate::domain::{RawEntry, format_grouped};

pub use menu::Menu;

/// fintrack - Personal Finance Tracker
#[derive(Parser)]
#[command(name = "fintrack")]
#[command(about = "Record income and expenses in a local CSV ledger and summarize them")]
#[command(version)]
pub struct Cli {
    /// Ledger file path
    #[arg(short, long, env = "FINTRACK_FILE", default_value = "finance_data.csv")]
    pub file: PathBuf,

    /// Currency symbol used when printing amounts
    #[arg(long, env = "FINTRACK_CURRENCY", default_value = "₹")]
    pub currency: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (interactive menu if omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu
    Menu,

    /// Record an income or expense
    Add {
        /// Entry type: income or expense
        kind: String,

        /// Category label (e.g., "Groceries", "Salary")
        #[arg(short, long)]
        category: String,

        /// Amount (e.g., "50.00" or "50")
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,

        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Date of the entry (YYYY-MM-DD, defaults to today)
        #[arg(long, default_value = "")]
        date: String,
    },

    /// Show total income, expenses and balance
    Balance {
        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Expense totals per category, largest first
    Categories {
        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Income, expense and balance per month
    Monthly {
        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List all entries in the order they were recorded
    List {
        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Write the ledger as CSV
    Export {
        /// Output file (the ledger file itself if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    fn open(&self) -> Result<LedgerService> {
        LedgerService::open(&self.file)
            .with_context(|| format!("Could not open ledger {}", self.file.display()))
    }

    pub fn run(self) -> Result<()> {
        let mut service = self.open()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command.unwrap_or(Commands::Menu) {
            Commands::Menu => {
                let stdin = io::stdin();
                Menu::new(&mut service, stdin.lock(), &mut out, &self.currency).run()?;
            }

            Commands::Add {
                kind,
                category,
                amount,
                description,
                date,
            } => {
                let kind = match kind.as_str() {
                    "income" => "Income",
                    "expense" => "Expense",
                    other => other,
                };

                let entry = service
                    .add_entry(RawEntry {
                        kind,
                        category: &category,
                        description: &description,
                        amount: &amount,
                        date: &date,
                    })
                    .context("Entry rejected")?;

                writeln!(
                    out,
                    "{} added successfully! {} {} on {}",
                    entry.kind(),
                    entry.category(),
                    format_grouped(entry.amount_cents(), &self.currency),
                    entry.date()
                )?;

                service.save()?;
            }

            Commands::Balance { format } => {
                render::balance(&mut out, &service.balance(), &self.currency, &format)?;
            }

            Commands::Categories { format } => {
                render::categories(
                    &mut out,
                    &service.category_summary(),
                    &self.currency,
                    &format,
                )?;
            }

            Commands::Monthly { format } => {
                render::monthly(
                    &mut out,
                    &service.monthly_summary(),
                    &self.currency,
                    &format,
                )?;
            }

            Commands::List { format } => {
                render::entries(&mut out, service.entries(), &self.currency, &format)?;
            }

            Commands::Export { output } => {
                let path = output.unwrap_or_else(|| self.file.clone());
                let count = service.export_to(&path)?;
                writeln!(out, "Exported {} entries to {}", count, path.display())?;
            }
        }

        Ok(())
    }
}
