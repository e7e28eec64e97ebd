mod entry;
mod ledger;
mod money;
pub mod summary;

pub use entry::*;
pub use ledger::*;
pub use money::*;
pub use summary::{CategoryTotal, MonthlySummary, NothingToSummarize, Totals, YearMonth};
