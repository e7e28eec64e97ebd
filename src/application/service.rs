use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::domain::{
    CategoryTotal, Entry, Ledger, MonthlySummary, NothingToSummarize, RawEntry, Totals,
    ValidationError, format_cents, summary, validate_on,
};
use crate::storage::Repository;

use super::AppError;

/// Application service owning the in-memory ledger and its backing file.
/// This is the primary interface for any client (menu, subcommands, tests).
pub struct LedgerService {
    repo: Repository,
    ledger: Ledger,
    loaded_existing: bool,
}

impl LedgerService {
    /// Create a service over an already-hydrated ledger.
    pub fn new(repo: Repository, ledger: Ledger) -> Self {
        Self {
            repo,
            ledger,
            loaded_existing: false,
        }
    }

    /// Open the ledger stored at `path`, starting empty if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let repo = Repository::new(path);
        let existing = repo.load_existing().map_err(|source| AppError::Load {
            path: repo.path().to_path_buf(),
            source,
        })?;

        let loaded_existing = existing.is_some();
        let ledger = Ledger::from_entries(existing.unwrap_or_default());

        Ok(Self {
            repo,
            ledger,
            loaded_existing,
        })
    }

    /// True when `open` found a ledger file on disk.
    pub fn loaded_existing(&self) -> bool {
        self.loaded_existing
    }

    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn entries(&self) -> &[Entry] {
        self.ledger.entries()
    }

    // ========================
    // Admission
    // ========================

    /// Validate raw input and append it. A blank date means today.
    pub fn add_entry(&mut self, raw: RawEntry<'_>) -> Result<&Entry, ValidationError> {
        self.add_entry_on(raw, Local::now().date_naive())
    }

    /// Like [`add_entry`](Self::add_entry) with an explicit "today".
    /// On error the ledger is left untouched.
    pub fn add_entry_on(
        &mut self,
        raw: RawEntry<'_>,
        today: NaiveDate,
    ) -> Result<&Entry, ValidationError> {
        let entry = validate_on(raw, today).inspect_err(|e| {
            warn!(error = %e, "rejected entry");
        })?;

        debug!(
            kind = %entry.kind(),
            category = entry.category(),
            amount = %format_cents(entry.amount_cents()),
            date = %entry.date(),
            "admitted entry"
        );

        self.ledger.append(entry);
        let index = self.ledger.len() - 1;
        Ok(&self.ledger.entries()[index])
    }

    // ========================
    // Summaries
    // ========================

    pub fn balance(&self) -> Totals {
        summary::balance(self.ledger.entries())
    }

    pub fn category_summary(&self) -> Result<Vec<CategoryTotal>, NothingToSummarize> {
        summary::by_category(self.ledger.entries())
    }

    pub fn monthly_summary(&self) -> Result<Vec<MonthlySummary>, NothingToSummarize> {
        summary::by_month(self.ledger.entries())
    }

    // ========================
    // Persistence
    // ========================

    /// Overwrite the backing file with the whole ledger.
    pub fn save(&self) -> Result<usize, AppError> {
        self.export_to(self.repo.path())
    }

    /// Write the whole ledger to `path`.
    pub fn export_to(&self, path: &Path) -> Result<usize, AppError> {
        self.repo
            .save_to(path, self.ledger.entries())
            .map_err(|source| AppError::Save {
                path: path.to_path_buf(),
                source,
            })
    }
}
