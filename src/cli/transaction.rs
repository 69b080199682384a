//! Transaction CLI commands
//!
//! Every mutation goes through the ledger so the account balance moves
//! with it.

use chrono::Local;
use clap::Subcommand;

use crate::display::transaction::format_transaction_list;
use crate::error::FinanceResult;
use crate::models::ids::TRANSACTION_PREFIX;
use crate::models::Transaction;
use crate::services::Ledger;
use crate::storage::TransactionUpdate;
use crate::validation::{validate_category_choice, validate_date, validate_positive_int};

use super::{id_or_generate, report_balance_change};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Account ID
        account: String,
        /// Amount (positive whole number)
        amount: String,
        /// Category: 1/income or 2/expense
        #[arg(short, long, default_value = "expense")]
        category: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Transaction ID (generated if omitted)
        #[arg(long)]
        id: Option<String>,
    },
    /// List transactions
    List {
        /// Filter by account
        #[arg(short, long)]
        account: Option<String>,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New amount (positive whole number)
        #[arg(short, long)]
        amount: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New category: 1/income or 2/expense
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Delete a transaction and undo its effect on the balance
    Delete {
        /// Transaction ID
        id: String,
    },
}

impl TransactionCommands {
    /// Whether the command changes stored data
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::List { .. })
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(ledger: &mut Ledger, cmd: TransactionCommands) -> FinanceResult<()> {
    match cmd {
        TransactionCommands::Add {
            account,
            amount,
            category,
            date,
            description,
            id,
        } => {
            // The ledger accepts unknown accounts, the command line does not
            ledger.accounts().get(&account)?;

            let amount = validate_positive_int(&amount, "Amount")?;
            let category = validate_category_choice(&category)?;
            let date = match date {
                Some(date) => validate_date(&date, "Date")?,
                None => Local::now().date_naive().format("%Y-%m-%d").to_string(),
            };
            let id = id_or_generate(id, TRANSACTION_PREFIX);

            let txn = Transaction::new(
                id.clone(),
                account,
                &date,
                amount as f64,
                category,
                description.unwrap_or_default(),
            )?;
            let change = ledger.record_transaction(txn)?;

            println!("Recorded transaction: {}", id);
            report_balance_change(change.as_ref());
        }

        TransactionCommands::List { account } => {
            let transactions: Vec<Transaction> = match account {
                Some(account) => ledger
                    .transactions()
                    .for_account(&account)
                    .into_iter()
                    .cloned()
                    .collect(),
                None => ledger.transactions().list_all(),
            };
            print!(
                "{}",
                format_transaction_list(&transactions, ledger.accounts())
            );
        }

        TransactionCommands::Edit {
            id,
            amount,
            date,
            category,
            description,
        } => {
            let mut update = TransactionUpdate::new();
            update.amount = amount
                .map(|a| validate_positive_int(&a, "Amount").map(|n| n as f64))
                .transpose()?;
            update.date = date.map(|d| validate_date(&d, "Date")).transpose()?;
            update.category = category
                .map(|c| validate_category_choice(&c).map(str::to_string))
                .transpose()?;
            update.description = description;

            if update.is_empty() {
                println!("No changes specified. Use --amount, --date, --category or --description.");
                return Ok(());
            }

            let change = ledger.amend_transaction(&id, update)?;
            println!("Updated transaction: {}", id);
            report_balance_change(change.as_ref());
        }

        TransactionCommands::Delete { id } => {
            let change = ledger.reverse_transaction(&id)?;
            println!("Deleted transaction: {}", id);
            report_balance_change(change.as_ref());
        }
    }

    Ok(())
}
