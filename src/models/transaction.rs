//! Transaction model
//!
//! A transaction moves money into or out of one account. The amount is
//! always positive; the direction comes from the category.

use std::fmt;

use crate::error::{FinanceError, FinanceResult};
use crate::validation::{validate_date, validate_positive_amount};

/// Category name that credits the account; anything else debits it
pub const INCOME: &str = "income";

/// Category name used for debits
pub const EXPENSE: &str = "expense";

/// A financial transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Unique identifier
    pub id: String,

    /// The account this transaction belongs to. Not checked for existence.
    pub account_id: String,

    /// Transaction date (YYYY-MM-DD)
    pub date: String,

    /// Amount, strictly positive
    pub amount: f64,

    /// "income" or "expense" (free-form strings are accepted)
    pub category: String,

    /// Free text
    pub description: String,
}

impl Transaction {
    /// Create a validated transaction
    pub fn new(
        id: impl Into<String>,
        account_id: impl Into<String>,
        date: &str,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> FinanceResult<Self> {
        let txn = Self {
            id: id.into().trim().to_string(),
            account_id: account_id.into().trim().to_string(),
            date: date.trim().to_string(),
            amount,
            category: category.into(),
            description: description.into(),
        };
        txn.validate()?;
        Ok(txn)
    }

    /// Validate the transaction
    pub fn validate(&self) -> FinanceResult<()> {
        if self.id.trim().is_empty() {
            return Err(FinanceError::Validation(
                "Transaction ID cannot be empty".into(),
            ));
        }

        validate_date(&self.date, "Date")?;
        validate_positive_amount(self.amount, "Amount")?;

        if self.category.trim().is_empty() {
            return Err(FinanceError::Validation("Category cannot be empty".into()));
        }

        Ok(())
    }

    /// Whether this transaction credits its account
    pub fn is_income(&self) -> bool {
        is_income(&self.category)
    }

    /// Signed effect on the account balance
    pub fn balance_effect(&self) -> f64 {
        balance_effect(self.amount, &self.category)
    }
}

/// Case-insensitive check for the income category; surrounding spaces are
/// not ignored
pub fn is_income(category: &str) -> bool {
    category.to_lowercase() == INCOME
}

/// `+amount` for income, `-amount` for everything else
pub fn balance_effect(amount: f64, category: &str) -> f64 {
    if is_income(category) {
        amount
    } else {
        -amount
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} ({})",
            self.date, self.account_id, self.amount, self.category
        )
    }
}
