//! Service layer for the finance tracker
//!
//! The service layer sits on top of the storage managers and handles
//! cross-entity operations.

pub mod ledger;

pub use ledger::{BalanceChange, Ledger};
