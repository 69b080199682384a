//! Account manager
//!
//! Owns the ordered in-memory collection of accounts and persists it to the
//! accounts CSV file.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Account, AccountKind};
use crate::validation::{
    parse_number, validate_balance, validate_currency, validate_finite, validate_name,
    NAME_MAX_LEN,
};

use super::file_io::{read_records, write_records_atomic};
use super::records::AccountRecord;

/// Fields to change in [`AccountManager::update`]; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub balance: Option<f64>,
}

impl AccountUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn balance(mut self, balance: f64) -> Self {
        self.balance = Some(balance);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.currency.is_none() && self.balance.is_none()
    }
}

/// In-memory owner of all accounts, in insertion order
#[derive(Debug, Clone, Default)]
pub struct AccountManager {
    accounts: Vec<Account>,
}

impl AccountManager {
    /// Create an empty account manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account
    ///
    /// Fails if the id is taken. Name, currency and balance are validated and
    /// normalized again here, and the kind tag decides the stored variant.
    pub fn create(&mut self, account: Account) -> FinanceResult<&Account> {
        if self.exists(&account.id) {
            return Err(FinanceError::duplicate("Account", &account.id));
        }

        validate_balance(account.balance)?;
        let account = Self::normalize(account)?;
        debug!(id = %account.id, kind = account.kind.tag(), "created account");

        self.accounts.push(account);
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    /// Add a row read back from a file; the balance may have gone negative
    /// since the account was created
    fn insert_loaded(&mut self, account: Account) -> FinanceResult<()> {
        if self.exists(&account.id) {
            return Err(FinanceError::duplicate("Account", &account.id));
        }

        let account = Self::normalize(account)?;
        self.accounts.push(account);
        Ok(())
    }

    fn normalize(account: Account) -> FinanceResult<Account> {
        if account.id.trim().is_empty() {
            return Err(FinanceError::Validation(
                "Account ID must be a non-empty string".into(),
            ));
        }

        Ok(Account {
            name: validate_name(&account.name, "Name", NAME_MAX_LEN)?,
            currency: validate_currency(&account.currency)?,
            balance: validate_finite(account.balance, "Balance")?,
            kind: account.kind.normalized(),
            id: account.id,
        })
    }

    /// Snapshot of all accounts in insertion order
    pub fn list_all(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    /// Get an account by id
    pub fn get(&self, id: &str) -> FinanceResult<&Account> {
        self.get_or_none(id)
            .ok_or_else(|| FinanceError::account_not_found(id))
    }

    /// Get an account by id for direct field changes
    pub fn get_mut(&mut self, id: &str) -> FinanceResult<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| FinanceError::account_not_found(id))
    }

    /// Get an account by id, or `None`
    pub fn get_or_none(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Check if an account exists
    pub fn exists(&self, id: &str) -> bool {
        self.get_or_none(id).is_some()
    }

    /// Count accounts
    pub fn count(&self) -> usize {
        self.accounts.len()
    }

    /// Update name, currency and/or balance of an account
    ///
    /// All supplied fields are validated before any is written.
    pub fn update(&mut self, id: &str, update: AccountUpdate) -> FinanceResult<&Account> {
        if !self.exists(id) {
            return Err(FinanceError::account_not_found(id));
        }

        let name = update
            .name
            .as_deref()
            .map(|n| validate_name(n, "Name", NAME_MAX_LEN))
            .transpose()?;
        let currency = update.currency.as_deref().map(validate_currency).transpose()?;
        let balance = update.balance.map(validate_balance).transpose()?;

        let account = self.get_mut(id)?;
        if let Some(name) = name {
            account.name = name;
        }
        if let Some(currency) = currency {
            account.currency = currency;
        }
        if let Some(balance) = balance {
            account.balance = balance;
        }

        debug!(id = %account.id, "updated account");
        Ok(&*account)
    }

    /// Delete an account, returning it
    pub fn delete(&mut self, id: &str) -> FinanceResult<Account> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| FinanceError::account_not_found(id))?;

        debug!(id, "deleted account");
        Ok(self.accounts.remove(index))
    }

    /// Save all accounts to a CSV file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> FinanceResult<()> {
        let rows: Vec<AccountRecord> = self.accounts.iter().map(AccountRecord::from).collect();
        write_records_atomic(path.as_ref(), &rows)?;

        info!(count = rows.len(), path = %path.as_ref().display(), "saved accounts");
        Ok(())
    }

    /// Replace the collection with the contents of a CSV file
    ///
    /// Every row is validated; one bad row aborts the load and leaves the
    /// current collection untouched. A missing file loads as empty.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> FinanceResult<()> {
        let rows: Vec<AccountRecord> = read_records(path.as_ref())?;

        let mut loaded = Self::new();
        for row in rows {
            loaded.insert_loaded(Self::from_record(row)?)?;
        }

        info!(count = loaded.count(), path = %path.as_ref().display(), "loaded accounts");
        *self = loaded;
        Ok(())
    }

    fn from_record(row: AccountRecord) -> FinanceResult<Account> {
        // Legacy rows may leave the balance blank
        let balance = if row.balance.trim().is_empty() {
            0.0
        } else {
            parse_number(&row.balance, "Balance")?
        };

        Ok(Account {
            id: row.id.trim().to_string(),
            name: row.name,
            kind: AccountKind::from_tag(&row.account_type),
            currency: row.currency,
            balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn wallet() -> Account {
        Account::cash("A1", "Wallet", "HUF", 100.0).unwrap()
    }

    #[test]
    fn test_create_and_get() {
        let mut manager = AccountManager::new();
        manager.create(wallet()).unwrap();

        let account = manager.get("A1").unwrap();
        assert_eq!(account.name, "Wallet");
        assert!(manager.get_or_none("A2").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut manager = AccountManager::new();
        manager.create(wallet()).unwrap();

        let second = Account::bank("A1", "Other", "EUR", 5.0).unwrap();
        let err = manager.create(second).unwrap_err();
        assert!(err.is_validation());

        let all = manager.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Wallet");
    }

    #[test]
    fn test_create_revalidates_mutated_fields() {
        let mut manager = AccountManager::new();

        let mut account = wallet();
        account.balance = -1.0;
        assert!(manager.create(account).unwrap_err().is_validation());

        let mut account = wallet();
        account.name = "Wallet2".into();
        assert!(manager.create(account).is_err());

        let mut account = wallet();
        account.currency = " usd ".into();
        account.name = "  Pocket ".into();
        let created = manager.create(account).unwrap();
        assert_eq!(created.currency, "USD");
        assert_eq!(created.name, "Pocket");
    }

    #[test]
    fn test_create_reconciles_kind_with_tag() {
        let mut manager = AccountManager::new();
        let mut account = wallet();
        account.kind = AccountKind::Other("BANK".into());

        let created = manager.create(account).unwrap();
        assert_eq!(created.kind, AccountKind::Bank);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut manager = AccountManager::new();
        for (id, name) in [("Z", "Zeta"), ("A", "Alpha"), ("M", "Mid")] {
            manager
                .create(Account::bank(id, name, "EUR", 0.0).unwrap())
                .unwrap();
        }

        let ids: Vec<_> = manager.list_all().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_not_found_errors() {
        let mut manager = AccountManager::new();
        assert!(manager.get("UNKNOWN-ID").unwrap_err().is_not_found());
        assert!(manager.delete("UNKNOWN-ID").unwrap_err().is_not_found());
        assert!(manager
            .update("UNKNOWN-ID", AccountUpdate::new().name("X"))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_update_only_supplied_fields() {
        let mut manager = AccountManager::new();
        manager.create(wallet()).unwrap();

        let updated = manager
            .update("A1", AccountUpdate::new().currency("eur"))
            .unwrap();
        assert_eq!(updated.currency, "EUR");
        assert_eq!(updated.name, "Wallet");
        assert_eq!(updated.balance, 100.0);
    }

    #[test]
    fn test_failed_update_changes_nothing() {
        let mut manager = AccountManager::new();
        manager.create(wallet()).unwrap();

        let result = manager.update(
            "A1",
            AccountUpdate::new().name("New Name").balance(-5.0),
        );
        assert!(result.unwrap_err().is_validation());

        let account = manager.get("A1").unwrap();
        assert_eq!(account.name, "Wallet");
        assert_eq!(account.balance, 100.0);
    }

    #[test]
    fn test_delete() {
        let mut manager = AccountManager::new();
        manager.create(wallet()).unwrap();

        let removed = manager.delete("A1").unwrap();
        assert_eq!(removed.id, "A1");
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");

        let mut manager = AccountManager::new();
        manager.create(wallet()).unwrap();
        manager
            .create(Account::bank("A2", "Main Acc", "EUR", 500.5).unwrap())
            .unwrap();
        manager
            .create(Account::new("A3", "Stash", AccountKind::Other("crypto".into()), "BTC", 1.0).unwrap())
            .unwrap();
        manager.save(&path).unwrap();

        let mut loaded = AccountManager::new();
        loaded.load(&path).unwrap();
        assert_eq!(loaded.list_all(), manager.list_all());
    }

    #[test]
    fn test_overdrawn_balance_survives_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");

        let mut manager = AccountManager::new();
        manager.create(wallet()).unwrap();
        manager.get_mut("A1").unwrap().adjust_balance(-250.0);
        manager.save(&path).unwrap();

        let mut loaded = AccountManager::new();
        loaded.load(&path).unwrap();
        assert_eq!(loaded.get("A1").unwrap().balance, -150.0);
    }

    #[test]
    fn test_load_non_finite_balance_is_validation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");
        fs::write(
            &path,
            "id,name,account_type,currency,balance\nA1,Wallet,cash,HUF,NaN\n",
        )
        .unwrap();

        let mut manager = AccountManager::new();
        assert!(manager.load(&path).unwrap_err().is_validation());
    }

    #[test]
    fn test_load_replaces_collection() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");

        let mut saved = AccountManager::new();
        saved.create(wallet()).unwrap();
        saved.save(&path).unwrap();

        let mut manager = AccountManager::new();
        manager
            .create(Account::bank("OLD", "Old", "EUR", 1.0).unwrap())
            .unwrap();
        manager.load(&path).unwrap();

        assert!(manager.get_or_none("OLD").is_none());
        assert!(manager.exists("A1"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = AccountManager::new();
        manager.create(wallet()).unwrap();

        manager.load(temp_dir.path().join("missing.csv")).unwrap();
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn test_load_bad_row_is_validation_and_atomic() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");
        fs::write(
            &path,
            "id,name,account_type,currency,balance\n\
             A1,Wallet,cash,HUF,100\n\
             A2,Bad,cash,123,100\n",
        )
        .unwrap();

        let mut manager = AccountManager::new();
        manager
            .create(Account::bank("KEEP", "Keep", "EUR", 1.0).unwrap())
            .unwrap();

        let err = manager.load(&path).unwrap_err();
        assert!(err.is_validation());
        assert!(manager.exists("KEEP"));
        assert!(!manager.exists("A1"));
    }

    #[test]
    fn test_load_non_numeric_balance_is_validation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");
        fs::write(
            &path,
            "id,name,account_type,currency,balance\nA1,Wallet,cash,HUF,lots\n",
        )
        .unwrap();

        let mut manager = AccountManager::new();
        assert!(manager.load(&path).unwrap_err().is_validation());
    }

    #[test]
    fn test_load_blank_balance_defaults_to_zero() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");
        fs::write(
            &path,
            "id,name,account_type,currency,balance\nA1,Wallet,Cash,huf,\n",
        )
        .unwrap();

        let mut manager = AccountManager::new();
        manager.load(&path).unwrap();
        let account = manager.get("A1").unwrap();
        assert_eq!(account.balance, 0.0);
        assert_eq!(account.kind, AccountKind::Cash);
        assert_eq!(account.currency, "HUF");
    }

    #[test]
    fn test_load_unreadable_file_is_storage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");
        fs::write(
            &path,
            "id,name,account_type,currency,balance\nA1,Wallet\n",
        )
        .unwrap();

        let mut manager = AccountManager::new();
        assert!(manager.load(&path).unwrap_err().is_storage());
    }
}
