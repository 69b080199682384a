//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger. Raw text from the command line
//! goes through the validation helpers before it reaches a model.

pub mod account;
pub mod budget;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::models::generate_id;

/// Use the given id, or generate one with `prefix`
pub(crate) fn id_or_generate(id: Option<String>, prefix: &str) -> String {
    match id {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => generate_id(prefix),
    }
}

/// Print a balance change reported by the ledger
pub(crate) fn report_balance_change(change: Option<&crate::services::BalanceChange>) {
    match change {
        Some(change) => println!(
            "  Balance of {}: {:.2} -> {:.2}",
            change.account_id, change.before, change.after
        ),
        None => println!("  Account not found; balance unchanged."),
    }
}
