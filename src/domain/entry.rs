use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Cents, ParseCentsError, parse_cents};

/// Storage format for dates, also the preferred input format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Money coming in (salary, refunds, gifts)
    Income,
    /// Money going out (groceries, rent, bills)
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        }
    }
}

impl FromStr for EntryKind {
    type Err = ValidationError;

    /// Exact, case-sensitive match: "income" is not a valid kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(EntryKind::Income),
            "Expense" => Ok(EntryKind::Expense),
            other => Err(ValidationError::InvalidKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded income or expense.
///
/// Entries are immutable and can only be obtained through [`validate`] or
/// [`validate_on`]. The amount is a magnitude; the sign comes from `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    date: NaiveDate,
    kind: EntryKind,
    category: String,
    description: String,
    amount_cents: Cents,
}

impl Entry {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount_cents(&self) -> Cents {
        self.amount_cents
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }
}

/// Unparsed entry fields exactly as typed by the user or read from a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawEntry<'a> {
    pub kind: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub amount: &'a str,
    pub date: &'a str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid entry type '{0}': expected Income or Expense")]
    InvalidKind(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid amount '{input}': {source}")]
    InvalidAmount {
        input: String,
        source: ParseCentsError,
    },
}

/// Validate raw input into an [`Entry`], substituting today's local date
/// when the date field is blank.
pub fn validate(raw: RawEntry<'_>) -> Result<Entry, ValidationError> {
    validate_on(raw, Local::now().date_naive())
}

/// Validate raw input into an [`Entry`], using `today` for a blank date.
///
/// Checks run in order kind, date, amount; the first failure wins.
/// Zero and negative amounts are accepted, and categories are kept verbatim.
pub fn validate_on(raw: RawEntry<'_>, today: NaiveDate) -> Result<Entry, ValidationError> {
    let kind: EntryKind = raw.kind.parse()?;

    let date = if raw.date.trim().is_empty() {
        today
    } else {
        parse_date(raw.date)?
    };

    let amount_cents = parse_cents(raw.amount).map_err(|source| ValidationError::InvalidAmount {
        input: raw.amount.to_string(),
        source,
    })?;

    Ok(Entry {
        date,
        kind,
        category: raw.category.to_string(),
        description: raw.description.to_string(),
        amount_cents,
    })
}

/// Parse a calendar date, dropping any time-of-day component.
/// Accepts YYYY-MM-DD, "YYYY-MM-DD HH:MM:SS", "YYYY-MM-DDTHH:MM:SS" and RFC 3339.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let s = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(date);
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt.date());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }

    Err(ValidationError::InvalidDate(input.to_string()))
}
