//! Finance Tracker - personal finance bookkeeping from the command line
//!
//! This library provides the core of the finance tracker: accounts,
//! transactions and monthly budgets, kept in memory by one manager per
//! entity type and persisted as CSV record files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `validation`: Checks shared by models and the command line
//! - `models`: Core data models (accounts, transactions, budgets)
//! - `storage`: Entity managers and the CSV record files
//! - `services`: The ledger, which keeps balances in step with transactions
//! - `reports`: Per-currency financial summary
//! - `display`: Table formatting for terminal output
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finance::config::{FinancePaths, Settings};
//! use finance::services::Ledger;
//!
//! let paths = FinancePaths::new()?;
//! let mut ledger = Ledger::new();
//! ledger.load_all(&paths.ledger_files())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{FinanceError, FinanceResult};
