//! Budget model
//!
//! A spending limit for one category in one calendar month.

use std::fmt;

use crate::error::{FinanceError, FinanceResult};
use crate::validation::{validate_month, validate_positive_amount};

/// A monthly budget for a category
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    /// Unique identifier
    pub id: String,

    /// Budget month (YYYY-MM)
    pub month: String,

    /// Free-form category name
    pub category: String,

    /// Limit for the month, strictly positive
    pub limit_amount: f64,
}

impl Budget {
    /// Create a validated budget
    pub fn new(
        id: impl Into<String>,
        month: &str,
        category: impl Into<String>,
        limit_amount: f64,
    ) -> FinanceResult<Self> {
        let budget = Self {
            id: id.into().trim().to_string(),
            month: month.trim().to_string(),
            category: category.into(),
            limit_amount,
        };
        budget.validate()?;
        Ok(budget)
    }

    /// Validate the budget
    pub fn validate(&self) -> FinanceResult<()> {
        if self.id.trim().is_empty() {
            return Err(FinanceError::Validation("Budget ID cannot be empty".into()));
        }

        validate_month(&self.month, "Month")?;
        validate_positive_amount(self.limit_amount, "Limit")?;

        if self.category.trim().is_empty() {
            return Err(FinanceError::Validation("Category cannot be empty".into()));
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {:.2}",
            self.month, self.category, self.limit_amount
        )
    }
}
