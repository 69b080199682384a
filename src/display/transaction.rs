//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format_amount;
use crate::models::Transaction;
use crate::storage::AccountManager;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format transactions as a table; amounts carry the account's currency
/// when the account exists
pub fn format_transaction_list(transactions: &[Transaction], accounts: &AccountManager) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| {
            let currency = accounts
                .get_or_none(&txn.account_id)
                .map(|a| a.currency.as_str())
                .unwrap_or("");
            TransactionRow {
                id: txn.id.clone(),
                account: txn.account_id.clone(),
                date: txn.date.clone(),
                amount: format_amount(txn.amount, currency),
                category: txn.category.clone(),
                description: txn.description.clone(),
            }
        })
        .collect();

    let mut output = Table::new(rows).with(Style::modern()).to_string();
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Account;

    #[test]
    fn test_empty_list() {
        let accounts = AccountManager::new();
        assert_eq!(format_transaction_list(&[], &accounts), "No transactions found.\n");
    }

    #[test]
    fn test_currency_from_account() {
        let mut accounts = AccountManager::new();
        accounts
            .create(Account::cash("A1", "Wallet", "HUF", 0.0).unwrap())
            .unwrap();

        let transactions = vec![
            Transaction::new("T1", "A1", "2025-01-01", 200.0, "income", "Salary").unwrap(),
            Transaction::new("T2", "GONE", "2025-01-02", 5.0, "expense", "").unwrap(),
        ];
        let output = format_transaction_list(&transactions, &accounts);
        assert!(output.contains("200.00 HUF"));
        assert!(output.contains("5.00"));
        assert!(output.contains("Salary"));
    }
}
