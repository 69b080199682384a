//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format_amount;
use crate::models::Account;

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Currency")]
    currency: String,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            kind: account.kind.tag().to_string(),
            balance: format_amount(account.balance, &account.currency),
            currency: account.currency.clone(),
        }
    }
}

/// Format a list of accounts as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let rows: Vec<AccountRow> = accounts.iter().map(AccountRow::from).collect();
    let mut output = Table::new(rows).with(Style::modern()).to_string();
    output.push('\n');
    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, transaction_count: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  ID:           {}\n", account.id));
    output.push_str(&format!("  Type:         {}\n", account.kind));
    output.push_str(&format!("  Currency:     {}\n", account.currency));
    output.push_str(&format!(
        "  Balance:      {}\n",
        format_amount(account.balance, &account.currency)
    ));
    output.push_str(&format!("  Transactions: {}\n", transaction_count));

    output
}
