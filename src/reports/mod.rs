//! Reports built from the ledger

pub mod summary;

pub use summary::{CurrencySummary, FinancialSummary};
