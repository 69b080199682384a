//! Field validation helpers
//!
//! Each helper takes a raw value plus a field label (used only in the error
//! text) and returns the normalized value, or a `FinanceError::Validation`.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};

/// Default maximum length for account names
pub const NAME_MAX_LEN: usize = 15;

/// Maximum length of a currency tag
pub const CURRENCY_MAX_LEN: usize = 3;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a name: letters and whitespace only, 1..=max_len characters
pub fn validate_name(value: &str, field: &str, max_len: usize) -> FinanceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FinanceError::Validation(format!("{} cannot be empty", field)));
    }

    if trimmed.chars().count() > max_len {
        return Err(FinanceError::Validation(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }

    if !trimmed
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace())
    {
        return Err(FinanceError::Validation(format!(
            "{} must contain letters and spaces only",
            field
        )));
    }

    Ok(trimmed.to_string())
}

/// Validate a currency tag: 1..=3 letters, returned upper-cased
pub fn validate_currency(value: &str) -> FinanceResult<String> {
    let code = value.trim().to_uppercase();
    if code.is_empty() {
        return Err(FinanceError::Validation("Currency cannot be empty".into()));
    }

    if !code.chars().all(char::is_alphabetic) {
        return Err(FinanceError::Validation(
            "Currency must contain alphabetic characters only".into(),
        ));
    }

    if code.chars().count() > CURRENCY_MAX_LEN {
        return Err(FinanceError::Validation(
            "Currency must be at most 3 letters (e.g., HUF, USD)".into(),
        ));
    }

    Ok(code)
}

fn parse_digits(value: &str, field: &str, expected: &str) -> FinanceResult<u64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FinanceError::Validation(format!("{} cannot be empty", field)));
    }

    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(FinanceError::Validation(format!(
            "{} must be {}",
            field, expected
        )));
    }

    trimmed
        .parse::<u64>()
        .map_err(|_| FinanceError::Validation(format!("{} is too large", field)))
}

/// Validate a positive integer (digits only, greater than zero)
pub fn validate_positive_int(value: &str, field: &str) -> FinanceResult<u64> {
    let n = parse_digits(value, field, "a positive integer")?;
    if n == 0 {
        return Err(FinanceError::Validation(format!(
            "{} must be greater than 0",
            field
        )));
    }
    Ok(n)
}

/// Validate a non-negative integer (digits only, zero allowed)
pub fn validate_nonnegative_int(value: &str, field: &str) -> FinanceResult<u64> {
    parse_digits(value, field, "a non-negative integer (0 or positive)")
}

/// Validate a calendar date in `YYYY-MM-DD` form; the text is returned trimmed
pub fn validate_date(value: &str, field: &str) -> FinanceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FinanceError::Validation(format!("{} cannot be empty", field)));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
        FinanceError::Validation(format!("{} must be in YYYY-MM-DD format", field))
    })?;

    Ok(trimmed.to_string())
}

/// Validate a calendar month in `YYYY-MM` form; the text is returned trimmed
pub fn validate_month(value: &str, field: &str) -> FinanceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FinanceError::Validation(format!("{} cannot be empty", field)));
    }

    // chrono cannot parse a bare year-month, so pin the day to the 1st
    NaiveDate::parse_from_str(&format!("{}-01", trimmed), DATE_FORMAT).map_err(|_| {
        FinanceError::Validation(format!("{} must be in YYYY-MM format", field))
    })?;

    Ok(trimmed.to_string())
}

/// Map a category choice (`1`/`income`, `2`/`expense`) to its canonical name
pub fn validate_category_choice(value: &str) -> FinanceResult<&'static str> {
    match value.trim().to_lowercase().as_str() {
        "1" | "income" => Ok("income"),
        "2" | "expense" => Ok("expense"),
        _ => Err(FinanceError::Validation(
            "Category must be '1' (income) or '2' (expense)".into(),
        )),
    }
}

/// Validate that a value is a finite number
pub fn validate_finite(value: f64, field: &str) -> FinanceResult<f64> {
    if !value.is_finite() {
        return Err(FinanceError::Validation(format!("{} must be a number", field)));
    }
    Ok(value)
}

/// Validate a starting balance: finite and not negative
pub fn validate_balance(value: f64) -> FinanceResult<f64> {
    validate_finite(value, "Balance")?;
    if value < 0.0 {
        return Err(FinanceError::Validation(
            "Balance must be non-negative".into(),
        ));
    }
    Ok(value)
}

/// Validate an amount or limit: finite and strictly positive
pub fn validate_positive_amount(value: f64, field: &str) -> FinanceResult<f64> {
    if !value.is_finite() {
        return Err(FinanceError::Validation(format!("{} must be a number", field)));
    }
    if value <= 0.0 {
        return Err(FinanceError::Validation(format!("{} must be positive", field)));
    }
    Ok(value)
}

/// Parse a numeric cell loaded from a record file
pub fn parse_number(value: &str, field: &str) -> FinanceResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| FinanceError::Validation(format!("{} must be a number", field)))
}
