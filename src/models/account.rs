//! Account model
//!
//! Represents a place money is held (a wallet, a bank account, ...). The
//! concrete kind is a closed enum; unknown kind tags are kept verbatim.

use std::fmt;

use crate::error::{FinanceError, FinanceResult};
use crate::validation::{validate_balance, validate_currency, validate_name, NAME_MAX_LEN};

/// Kind of account, selected by its kind tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    /// Cash/wallet
    Cash,
    /// Bank account
    Bank,
    /// Any other tag, kept as written (defaults to "general")
    Other(String),
}

impl AccountKind {
    /// Build the kind from its tag; "cash" and "bank" match case-insensitively
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "cash" => Self::Cash,
            "bank" => Self::Bank,
            _ => Self::Other(tag.trim().to_string()),
        }
    }

    /// The tag written to the accounts file
    pub fn tag(&self) -> &str {
        match self {
            Self::Cash => "cash",
            Self::Bank => "bank",
            Self::Other(tag) => tag,
        }
    }

    /// Re-derive the variant from the tag, so a mis-built `Other("CASH")`
    /// becomes `Cash`
    pub fn normalized(&self) -> Self {
        Self::from_tag(self.tag())
    }
}

impl Default for AccountKind {
    fn default() -> Self {
        Self::Other("general".to_string())
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Bank => write!(f, "Bank"),
            Self::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// A financial account
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique identifier
    pub id: String,

    /// Display name (letters and spaces, at most 15 characters)
    pub name: String,

    /// Kind of account
    pub kind: AccountKind,

    /// Currency tag (1-3 letters, upper-case); never converted
    pub currency: String,

    /// Current balance. Non-negative when created, may go negative through
    /// expenses afterwards.
    pub balance: f64,
}

impl Account {
    /// Create a validated account
    pub fn new(
        id: impl Into<String>,
        name: &str,
        kind: AccountKind,
        currency: &str,
        balance: f64,
    ) -> FinanceResult<Self> {
        let account = Self {
            id: id.into().trim().to_string(),
            name: name.to_string(),
            kind,
            currency: currency.to_string(),
            balance,
        };
        account.validate()?;

        Ok(Self {
            name: validate_name(&account.name, "Account name", NAME_MAX_LEN)?,
            currency: validate_currency(&account.currency)?,
            ..account
        })
    }

    /// Create a cash account
    pub fn cash(
        id: impl Into<String>,
        name: &str,
        currency: &str,
        balance: f64,
    ) -> FinanceResult<Self> {
        Self::new(id, name, AccountKind::Cash, currency, balance)
    }

    /// Create a bank account
    pub fn bank(
        id: impl Into<String>,
        name: &str,
        currency: &str,
        balance: f64,
    ) -> FinanceResult<Self> {
        Self::new(id, name, AccountKind::Bank, currency, balance)
    }

    /// Validate the account
    pub fn validate(&self) -> FinanceResult<()> {
        if self.id.trim().is_empty() {
            return Err(FinanceError::Validation(
                "Account ID must be a non-empty string".into(),
            ));
        }

        validate_name(&self.name, "Account name", NAME_MAX_LEN)?;
        validate_currency(&self.currency)?;
        validate_balance(self.balance)?;

        Ok(())
    }

    /// Add a signed amount to the balance
    pub fn adjust_balance(&mut self, delta: f64) {
        self.balance += delta;
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}
