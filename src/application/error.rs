use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ValidationError;
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The ledger file exists but could not be read. Fatal at startup.
    #[error("Failed to load ledger from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        source: StorageError,
    },

    #[error("Failed to save ledger to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        source: StorageError,
    },
}
