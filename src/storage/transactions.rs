//! Transaction manager
//!
//! Owns the ordered in-memory collection of transactions and persists it to
//! the transactions CSV file. It knows nothing about accounts: keeping
//! balances in step is the job of [`crate::services::Ledger`].

use std::path::Path;

use tracing::{debug, info};

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;
use crate::validation::{parse_number, validate_date, validate_positive_amount};

use super::file_io::{read_records, write_records_atomic};
use super::records::TransactionRecord;

/// Fields to change in [`TransactionManager::update`]
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl TransactionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }
}

fn check_category(category: &str) -> FinanceResult<()> {
    if category.trim().is_empty() {
        return Err(FinanceError::Validation(
            "Category must be a non-empty string".into(),
        ));
    }
    Ok(())
}

/// In-memory owner of all transactions, in insertion order
#[derive(Debug, Clone, Default)]
pub struct TransactionManager {
    transactions: Vec<Transaction>,
}

impl TransactionManager {
    /// Create an empty transaction manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction
    ///
    /// The referenced account is not checked, and no balance is touched.
    pub fn create(&mut self, txn: Transaction) -> FinanceResult<&Transaction> {
        if self.exists(&txn.id) {
            return Err(FinanceError::duplicate("Transaction", &txn.id));
        }

        if txn.id.trim().is_empty() {
            return Err(FinanceError::Validation(
                "Transaction ID cannot be empty".into(),
            ));
        }

        let amount = validate_positive_amount(txn.amount, "Amount")?;
        let date = validate_date(&txn.date, "Date")?;
        check_category(&txn.category)?;

        let txn = Transaction { amount, date, ..txn };
        debug!(id = %txn.id, account = %txn.account_id, "created transaction");

        self.transactions.push(txn);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Snapshot of all transactions in insertion order
    pub fn list_all(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Transactions that reference an account
    pub fn for_account(&self, account_id: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.account_id == account_id)
            .collect()
    }

    /// Get a transaction by id
    pub fn get(&self, id: &str) -> FinanceResult<&Transaction> {
        self.get_or_none(id)
            .ok_or_else(|| FinanceError::transaction_not_found(id))
    }

    /// Get a transaction by id, or `None`
    pub fn get_or_none(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Check if a transaction exists
    pub fn exists(&self, id: &str) -> bool {
        self.get_or_none(id).is_some()
    }

    /// Count transactions
    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    /// Update the supplied fields of a transaction
    ///
    /// Amount, date and category are validated before anything is written;
    /// the description is replaced verbatim.
    pub fn update(&mut self, id: &str, update: TransactionUpdate) -> FinanceResult<&Transaction> {
        if !self.exists(id) {
            return Err(FinanceError::transaction_not_found(id));
        }

        let amount = update
            .amount
            .map(|a| validate_positive_amount(a, "Amount"))
            .transpose()?;
        let date = update
            .date
            .as_deref()
            .map(|d| validate_date(d, "Date"))
            .transpose()?;
        if let Some(category) = &update.category {
            check_category(category)?;
        }

        let txn = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| FinanceError::transaction_not_found(id))?;

        if let Some(amount) = amount {
            txn.amount = amount;
        }
        if let Some(date) = date {
            txn.date = date;
        }
        if let Some(category) = update.category {
            txn.category = category;
        }
        if let Some(description) = update.description {
            txn.description = description;
        }

        debug!(id = %txn.id, "updated transaction");
        Ok(&*txn)
    }

    /// Delete a transaction, returning it
    pub fn delete(&mut self, id: &str) -> FinanceResult<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| FinanceError::transaction_not_found(id))?;

        debug!(id, "deleted transaction");
        Ok(self.transactions.remove(index))
    }

    /// Save all transactions to a CSV file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> FinanceResult<()> {
        let rows: Vec<TransactionRecord> = self
            .transactions
            .iter()
            .map(TransactionRecord::from)
            .collect();
        write_records_atomic(path.as_ref(), &rows)?;

        info!(count = rows.len(), path = %path.as_ref().display(), "saved transactions");
        Ok(())
    }

    /// Replace the collection with the contents of a CSV file
    ///
    /// One invalid row aborts the load; the current collection is kept.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> FinanceResult<()> {
        let rows: Vec<TransactionRecord> = read_records(path.as_ref())?;

        let mut loaded = Self::new();
        for row in rows {
            let amount = parse_number(&row.amount, "Amount")?;
            let txn = Transaction::new(
                row.id,
                row.account_id,
                &row.date,
                amount,
                row.category,
                row.description,
            )?;
            loaded.create(txn)?;
        }

        info!(count = loaded.count(), path = %path.as_ref().display(), "loaded transactions");
        *self = loaded;
        Ok(())
    }
}
