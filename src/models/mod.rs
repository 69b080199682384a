//! Core data models for the finance tracker
//!
//! Accounts, transactions and budgets. Every model validates itself on
//! construction and rejects malformed data immediately.

pub mod account;
pub mod budget;
pub mod ids;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use budget::Budget;
pub use ids::generate_id;
pub use transaction::Transaction;
