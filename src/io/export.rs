use std::io::Write;

use crate::domain::{DATE_FORMAT, Entry, format_cents};
use crate::storage::StorageError;

/// Column order of the ledger file.
pub const COLUMNS: [&str; 5] = ["Date", "Type", "Category", "Description", "Amount"];

/// Write every entry as CSV, header first, in ledger order.
/// Returns the number of entries written.
pub fn write_entries<W: Write>(writer: W, entries: &[Entry]) -> Result<usize, StorageError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(COLUMNS)?;

    for entry in entries {
        csv_writer.write_record([
            entry.date().format(DATE_FORMAT).to_string().as_str(),
            entry.kind().as_str(),
            entry.category(),
            entry.description(),
            format_cents(entry.amount_cents()).as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(entries.len())
}
