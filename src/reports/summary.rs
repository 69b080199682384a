//! Financial summary report
//!
//! Totals per currency: account balances, income and expense of the
//! transactions, and budget limits.

use std::collections::BTreeMap;

use crate::services::Ledger;

/// Currency label used for budgets when there are no accounts
pub const NO_CURRENCY: &str = "N/A";

/// Totals for one currency
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencySummary {
    pub currency: String,
    pub total_budget: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub total_balance: f64,
}

fn row<'a>(totals: &'a mut BTreeMap<String, CurrencySummary>, currency: &str) -> &'a mut CurrencySummary {
    totals
        .entry(currency.to_string())
        .or_insert_with(|| CurrencySummary {
            currency: currency.to_string(),
            ..Default::default()
        })
}

/// Summary across all currencies
#[derive(Debug, Clone, Default)]
pub struct FinancialSummary {
    /// One row per currency, sorted by currency code
    pub rows: Vec<CurrencySummary>,
}

impl FinancialSummary {
    /// Build the summary from the ledger's current state
    ///
    /// Transactions count under their account's currency and are skipped if
    /// the account is gone. Budgets carry no currency, so they are totalled
    /// under the first account's currency.
    pub fn build(ledger: &Ledger) -> Self {
        let mut totals: BTreeMap<String, CurrencySummary> = BTreeMap::new();

        let accounts = ledger.accounts().list_all();
        for account in &accounts {
            row(&mut totals, &account.currency).total_balance += account.balance;
        }

        for txn in ledger.transactions().list_all() {
            let Some(account) = ledger.accounts().get_or_none(&txn.account_id) else {
                continue;
            };
            let entry = row(&mut totals, &account.currency);
            if txn.is_income() {
                entry.total_income += txn.amount;
            } else {
                entry.total_expense += txn.amount;
            }
        }

        let budgets = ledger.budgets().list_all();
        if !budgets.is_empty() {
            let default_currency = accounts
                .first()
                .map(|a| a.currency.as_str())
                .unwrap_or(NO_CURRENCY);
            let entry = row(&mut totals, default_currency);
            for budget in &budgets {
                entry.total_budget += budget.limit_amount;
            }
        }

        Self {
            rows: totals.into_values().collect(),
        }
    }

    /// Row for a currency
    pub fn for_currency(&self, currency: &str) -> Option<&CurrencySummary> {
        self.rows.iter().find(|r| r.currency == currency)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
