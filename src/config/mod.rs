//! Configuration module for the finance tracker
//!
//! This module provides configuration management including:
//! - Data path resolution (one record file per entity type)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{FinancePaths, LedgerFiles};
pub use settings::Settings;
