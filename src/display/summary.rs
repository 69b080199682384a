//! Summary report display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format_amount;
use crate::reports::FinancialSummary;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Total Budget")]
    budget: String,
    #[tabled(rename = "Total Income")]
    income: String,
    #[tabled(rename = "Total Expense")]
    expense: String,
    #[tabled(rename = "Total Balance")]
    balance: String,
}

/// Format the financial summary as a table
pub fn format_summary(summary: &FinancialSummary) -> String {
    if summary.is_empty() {
        return "Nothing to summarize yet.\n".to_string();
    }

    let rows: Vec<SummaryRow> = summary
        .rows
        .iter()
        .map(|r| SummaryRow {
            currency: r.currency.clone(),
            budget: format_amount(r.total_budget, &r.currency),
            income: format_amount(r.total_income, &r.currency),
            expense: format_amount(r.total_expense, &r.currency),
            balance: format_amount(r.total_balance, &r.currency),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::modern()).to_string();
    output.push('\n');
    output
}
