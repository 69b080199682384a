//! Ledger service
//!
//! Owns the three entity managers and pairs every transaction mutation with
//! the matching balance adjustment on the owning account:
//!
//! - record: `+amount` for income, `-amount` otherwise
//! - amend: undo the old effect, then apply the new one
//! - reverse: undo the effect, then remove the record
//!
//! A transaction whose account does not exist is still recorded; only the
//! balance step is skipped.

use tracing::{debug, warn};

use crate::config::LedgerFiles;
use crate::error::FinanceResult;
use crate::models::transaction::balance_effect;
use crate::models::Transaction;
use crate::storage::{AccountManager, BudgetManager, TransactionManager, TransactionUpdate};

/// Balance movement caused by a ledger operation
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceChange {
    pub account_id: String,
    pub before: f64,
    pub after: f64,
}

impl BalanceChange {
    /// Net signed change
    pub fn delta(&self) -> f64 {
        self.after - self.before
    }
}

/// Coordinator over accounts, transactions and budgets
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: AccountManager,
    transactions: TransactionManager,
    budgets: BudgetManager,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from existing managers
    pub fn from_parts(
        accounts: AccountManager,
        transactions: TransactionManager,
        budgets: BudgetManager,
    ) -> Self {
        Self {
            accounts,
            transactions,
            budgets,
        }
    }

    pub fn accounts(&self) -> &AccountManager {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut AccountManager {
        &mut self.accounts
    }

    /// Transactions are read-only here; mutate them through the ledger
    pub fn transactions(&self) -> &TransactionManager {
        &self.transactions
    }

    pub fn budgets(&self) -> &BudgetManager {
        &self.budgets
    }

    pub fn budgets_mut(&mut self) -> &mut BudgetManager {
        &mut self.budgets
    }

    /// Record a transaction and apply its effect to the account balance
    ///
    /// Returns the balance change, or `None` if the account doesn't exist.
    pub fn record_transaction(&mut self, txn: Transaction) -> FinanceResult<Option<BalanceChange>> {
        let created = self.transactions.create(txn)?;
        let account_id = created.account_id.clone();
        let effect = created.balance_effect();
        let txn_id = created.id.clone();

        let change = self.adjust(&account_id, &[effect]);
        if change.is_none() {
            warn!(
                transaction = %txn_id,
                account = %account_id,
                "account not found, balance not adjusted"
            );
        }

        Ok(change)
    }

    /// Update a transaction and move the balance by the difference
    ///
    /// The old effect is reversed first, then the new one applied, so a
    /// change of both amount and category nets out correctly.
    pub fn amend_transaction(
        &mut self,
        id: &str,
        update: TransactionUpdate,
    ) -> FinanceResult<Option<BalanceChange>> {
        let old = self.transactions.get(id)?;
        let old_effect = balance_effect(old.amount, &old.category);

        let updated = self.transactions.update(id, update)?;
        let new_effect = updated.balance_effect();
        let account_id = updated.account_id.clone();

        let change = self.adjust(&account_id, &[-old_effect, new_effect]);
        if change.is_none() {
            warn!(transaction = id, account = %account_id, "account not found, balance not adjusted");
        }

        Ok(change)
    }

    /// Undo a transaction's effect on its account, then delete it
    pub fn reverse_transaction(&mut self, id: &str) -> FinanceResult<Option<BalanceChange>> {
        let txn = self.transactions.get(id)?;
        let account_id = txn.account_id.clone();
        let effect = txn.balance_effect();

        let change = self.adjust(&account_id, &[-effect]);
        if change.is_none() {
            warn!(transaction = id, account = %account_id, "account not found, balance not adjusted");
        }

        self.transactions.delete(id)?;
        Ok(change)
    }

    fn adjust(&mut self, account_id: &str, deltas: &[f64]) -> Option<BalanceChange> {
        let account = self.accounts.get_mut(account_id).ok()?;

        let before = account.balance;
        for delta in deltas {
            account.adjust_balance(*delta);
        }

        debug!(account = account_id, before, after = account.balance, "adjusted balance");
        Some(BalanceChange {
            account_id: account_id.to_string(),
            before,
            after: account.balance,
        })
    }

    /// Load all three record files
    ///
    /// Nothing is replaced unless every file loads cleanly.
    pub fn load_all(&mut self, files: &LedgerFiles) -> FinanceResult<()> {
        let mut accounts = AccountManager::new();
        let mut transactions = TransactionManager::new();
        let mut budgets = BudgetManager::new();

        accounts.load(&files.accounts)?;
        transactions.load(&files.transactions)?;
        budgets.load(&files.budgets)?;

        *self = Self::from_parts(accounts, transactions, budgets);
        Ok(())
    }

    /// Save all three record files
    pub fn save_all(&self, files: &LedgerFiles) -> FinanceResult<()> {
        self.accounts.save(&files.accounts)?;
        self.transactions.save(&files.transactions)?;
        self.budgets.save(&files.budgets)?;
        Ok(())
    }
}
