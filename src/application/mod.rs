// Application layer - use cases and orchestration.
// The menu and the one-shot subcommands both go through LedgerService.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
