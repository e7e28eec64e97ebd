use std::io::Read;

use serde::Deserialize;

use crate::domain::{Entry, RawEntry, validate};
use crate::io::export::COLUMNS;
use crate::storage::StorageError;

/// One row of the ledger file, before validation.
#[derive(Debug, Deserialize)]
struct EntryRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Amount")]
    amount: String,
}

/// Read entries from CSV, preserving file order.
///
/// Columns are matched by header name. Every row is admitted through the
/// entry validator; the first bad row aborts the whole read.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<Entry>, StorageError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    for column in COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(StorageError::MissingColumn(column));
        }
    }

    let mut entries = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: EntryRecord = record.deserialize(Some(&headers))?;

        // A blank date on disk is damage, not "today"
        if row.date.trim().is_empty() {
            return Err(StorageError::MissingDate { line });
        }

        let entry = validate(RawEntry {
            kind: &row.kind,
            category: &row.category,
            description: &row.description,
            amount: &row.amount,
            date: &row.date,
        })
        .map_err(|source| StorageError::MalformedRow { line, source })?;

        entries.push(entry);
    }

    Ok(entries)
}
