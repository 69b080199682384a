//! Display formatting for terminal output
//!
//! Renders accounts, transactions, budgets and the summary report as
//! tables.

pub mod account;
pub mod budget;
pub mod summary;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use budget::format_budget_list;
pub use summary::format_summary;
pub use transaction::format_transaction_list;

/// Format an amount with two decimals and its currency tag
pub(crate) fn format_amount(amount: f64, currency: &str) -> String {
    if currency.is_empty() {
        format!("{:.2}", amount)
    } else {
        format!("{:.2} {}", amount, currency)
    }
}
