//! Row layouts of the record files
//!
//! Every cell is kept as text so that a malformed value inside a readable
//! file is reported by the manager as a validation failure.

use serde::{Deserialize, Serialize};

use crate::models::{Account, Budget, Transaction};

use super::file_io::Record;

/// One row of the accounts file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountRecord {
    pub id: String,
    pub name: String,
    pub account_type: String,
    pub currency: String,
    pub balance: String,
}

impl Record for AccountRecord {
    const COLUMNS: &'static [&'static str] = &["id", "name", "account_type", "currency", "balance"];
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            account_type: account.kind.tag().to_string(),
            currency: account.currency.clone(),
            balance: account.balance.to_string(),
        }
    }
}

/// One row of the transactions file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionRecord {
    pub id: String,
    pub account_id: String,
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl Record for TransactionRecord {
    const COLUMNS: &'static [&'static str] =
        &["id", "account_id", "date", "amount", "category", "description"];
}

impl From<&Transaction> for TransactionRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id.clone(),
            account_id: txn.account_id.clone(),
            date: txn.date.clone(),
            amount: txn.amount.to_string(),
            category: txn.category.clone(),
            description: txn.description.clone(),
        }
    }
}

/// One row of the budgets file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetRecord {
    pub id: String,
    pub month: String,
    pub category: String,
    pub limit_amount: String,
}

impl Record for BudgetRecord {
    const COLUMNS: &'static [&'static str] = &["id", "month", "category", "limit_amount"];
}

impl From<&Budget> for BudgetRecord {
    fn from(budget: &Budget) -> Self {
        Self {
            id: budget.id.clone(),
            month: budget.month.clone(),
            category: budget.category.clone(),
            limit_amount: budget.limit_amount.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_record_fields() {
        let account = Account::cash("A1", "Wallet", "HUF", 1200.0).unwrap();
        let record = AccountRecord::from(&account);
        assert_eq!(record.account_type, "cash");
        assert_eq!(record.balance, "1200");
    }

    #[test]
    fn test_fractional_amounts_keep_precision() {
        let txn = Transaction::new("T1", "A1", "2025-01-01", 12.75, "expense", "Lunch").unwrap();
        let record = TransactionRecord::from(&txn);
        assert_eq!(record.amount.parse::<f64>().unwrap(), 12.75);
    }

    #[test]
    fn test_budget_record_fields() {
        let budget = Budget::new("B1", "2025-01", "Food", 200.0).unwrap();
        let record = BudgetRecord::from(&budget);
        assert_eq!(record.month, "2025-01");
        assert_eq!(record.limit_amount, "200");
    }
}
