//! Storage layer for the finance tracker
//!
//! In-memory entity managers backed by CSV record files with atomic writes
//! and automatic directory creation.

pub mod accounts;
pub mod budgets;
pub mod file_io;
pub mod records;
pub mod transactions;

pub use accounts::{AccountManager, AccountUpdate};
pub use budgets::{BudgetManager, BudgetUpdate};
pub use file_io::{read_records, write_records_atomic, Record};
pub use records::{AccountRecord, BudgetRecord, TransactionRecord};
pub use transactions::{TransactionManager, TransactionUpdate};
