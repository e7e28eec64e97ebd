use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::Entry;
use crate::io::{read_entries, write_entries};

use super::StorageError;

/// File-backed store for the ledger, one CSV file per ledger.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted ledger. `None` means no file exists yet.
    pub fn load_existing(&self) -> Result<Option<Vec<Entry>>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no ledger file yet");
                return Ok(None);
            }
            Err(source) => {
                return Err(StorageError::File {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let entries = read_entries(BufReader::new(file))?;
        info!(path = %self.path.display(), count = entries.len(), "loaded ledger");
        Ok(Some(entries))
    }

    /// Load the persisted ledger, empty if no file exists yet.
    pub fn load(&self) -> Result<Vec<Entry>, StorageError> {
        Ok(self.load_existing()?.unwrap_or_default())
    }

    /// Overwrite the ledger file with `entries`.
    pub fn save(&self, entries: &[Entry]) -> Result<usize, StorageError> {
        self.save_to(&self.path, entries)
    }

    /// Write `entries` to an arbitrary path, replacing its contents.
    pub fn save_to(&self, path: &Path, entries: &[Entry]) -> Result<usize, StorageError> {
        let file = File::create(path).map_err(|source| StorageError::File {
            path: path.to_path_buf(),
            source,
        })?;

        let count = write_entries(BufWriter::new(file), entries)?;
        info!(path = %path.display(), count, "saved ledger");
        Ok(count)
    }
}
