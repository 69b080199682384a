//! Budget CLI commands
//!
//! Implements CLI commands for monthly budget limits.

use clap::Subcommand;

use crate::display::budget::format_budget_list;
use crate::error::{FinanceError, FinanceResult};
use crate::models::ids::BUDGET_PREFIX;
use crate::models::Budget;
use crate::reports::summary::NO_CURRENCY;
use crate::services::Ledger;
use crate::storage::BudgetUpdate;
use crate::validation::{validate_month, validate_positive_int};

use super::id_or_generate;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a budget for a month and category
    Create {
        /// Budget month (YYYY-MM)
        month: String,
        /// Category name
        category: String,
        /// Limit amount (positive whole number)
        limit: String,
        /// Budget ID (generated if omitted)
        #[arg(long)]
        id: Option<String>,
    },
    /// List budgets
    List,
    /// Edit a budget's month or limit
    Edit {
        /// Budget ID
        id: String,
        /// New month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// New limit (positive whole number)
        #[arg(short, long)]
        limit: Option<String>,
    },
    /// Delete a budget
    Delete {
        /// Budget ID
        id: String,
    },
}

impl BudgetCommands {
    /// Whether the command changes stored data
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::List)
    }
}

/// Handle a budget command
pub fn handle_budget_command(ledger: &mut Ledger, cmd: BudgetCommands) -> FinanceResult<()> {
    match cmd {
        BudgetCommands::Create {
            month,
            category,
            limit,
            id,
        } => {
            let month = validate_month(&month, "Month")?;
            let category = category.trim().to_string();
            if category.is_empty() {
                return Err(FinanceError::Validation("Category cannot be empty".into()));
            }
            let limit = validate_positive_int(&limit, "Limit amount")?;
            let id = id_or_generate(id, BUDGET_PREFIX);

            let budget = Budget::new(id, &month, category, limit as f64)?;
            let budget = ledger.budgets_mut().create(budget)?;
            println!("Created budget: {} ({})", budget, budget.id);
        }

        BudgetCommands::List => {
            // Budgets carry no currency; label them with the first account's
            let accounts = ledger.accounts().list_all();
            let currency = accounts
                .first()
                .map(|a| a.currency.as_str())
                .unwrap_or(NO_CURRENCY);
            print!(
                "{}",
                format_budget_list(&ledger.budgets().list_all(), currency)
            );
        }

        BudgetCommands::Edit { id, month, limit } => {
            let mut update = BudgetUpdate::new();
            update.month = month.map(|m| validate_month(&m, "Month")).transpose()?;
            update.limit_amount = limit
                .map(|l| validate_positive_int(&l, "Limit amount").map(|n| n as f64))
                .transpose()?;

            if update.is_empty() {
                println!("No changes specified. Use --month or --limit.");
                return Ok(());
            }

            let updated = ledger.budgets_mut().update(&id, update)?;
            println!("Updated budget: {}", updated);
        }

        BudgetCommands::Delete { id } => {
            let removed = ledger.budgets_mut().delete(&id)?;
            println!("Deleted budget: {}", removed.id);
        }
    }

    Ok(())
}
