// CSV codec for the ledger file
pub mod export;
pub mod import;

pub use export::*;
pub use import::*;
