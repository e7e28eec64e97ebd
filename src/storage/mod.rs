mod repository;

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ValidationError;

pub use repository::*;

/// Failure to read or write the persisted ledger.
///
/// An absent ledger file is not an error; everything here means the file
/// exists but could not be used.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Cannot access {}: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    #[error("Line {line}: missing date")]
    MissingDate { line: u64 },

    #[error("Line {line}: {source}")]
    MalformedRow {
        line: u64,
        source: ValidationError,
    },
}
