//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format_amount;
use crate::models::Budget;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
}

/// Format budgets as a table, labelling limits with `currency`
pub fn format_budget_list(budgets: &[Budget], currency: &str) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|b| BudgetRow {
            id: b.id.clone(),
            month: b.month.clone(),
            category: b.category.clone(),
            limit: format_amount(b.limit_amount, currency),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::modern()).to_string();
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_list() {
        let budgets = vec![Budget::new("B1", "2025-01", "Food", 200.0).unwrap()];
        let output = format_budget_list(&budgets, "HUF");
        assert!(output.contains("2025-01"));
        assert!(output.contains("200.00 HUF"));
        assert_eq!(format_budget_list(&[], "HUF"), "No budgets found.\n");
    }
}
