//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::FinanceResult;
use crate::models::ids::ACCOUNT_PREFIX;
use crate::models::{Account, AccountKind};
use crate::services::Ledger;
use crate::storage::AccountUpdate;
use crate::validation::{
    validate_currency, validate_name, validate_nonnegative_int, NAME_MAX_LEN,
};

use super::id_or_generate;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account name (letters and spaces, at most 15 characters)
        name: String,
        /// Account ID (generated if omitted)
        #[arg(long)]
        id: Option<String>,
        /// Account type (cash, bank, or any other tag)
        #[arg(short = 't', long, default_value = "cash")]
        account_type: String,
        /// Currency tag, e.g. HUF, EUR, USD (defaults to the configured one)
        #[arg(short, long)]
        currency: Option<String>,
        /// Starting balance (whole number)
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// List all accounts
    List,
    /// Show account details
    Show {
        /// Account ID
        account: String,
    },
    /// Edit an account
    Edit {
        /// Account ID
        account: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New currency tag
        #[arg(short, long)]
        currency: Option<String>,
        /// New balance (whole number)
        #[arg(short, long)]
        balance: Option<String>,
    },
    /// Delete an account
    Delete {
        /// Account ID
        account: String,
    },
}

impl AccountCommands {
    /// Whether the command changes stored data
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::List | Self::Show { .. })
    }
}

/// Handle an account command
pub fn handle_account_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: AccountCommands,
) -> FinanceResult<()> {
    match cmd {
        AccountCommands::Create {
            name,
            id,
            account_type,
            currency,
            balance,
        } => {
            let name = validate_name(&name, "Name", NAME_MAX_LEN)?;
            let currency = validate_currency(
                currency.as_deref().unwrap_or(&settings.default_currency),
            )?;
            let balance = validate_nonnegative_int(&balance, "Starting balance")?;
            let id = id_or_generate(id, ACCOUNT_PREFIX);

            let account = Account::new(
                id,
                &name,
                AccountKind::from_tag(&account_type),
                &currency,
                balance as f64,
            )?;
            let account = ledger.accounts_mut().create(account)?;

            println!("Created account: {}", account.name);
            println!("  Type: {}", account.kind);
            println!("  Balance: {:.2} {}", account.balance, account.currency);
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            print!("{}", format_account_list(&ledger.accounts().list_all()));
        }

        AccountCommands::Show { account } => {
            let found = ledger.accounts().get(&account)?;
            let count = ledger.transactions().for_account(&found.id).len();
            print!("{}", format_account_details(found, count));
        }

        AccountCommands::Edit {
            account,
            name,
            currency,
            balance,
        } => {
            let mut update = AccountUpdate::new();
            update.name = name;
            update.currency = currency;
            update.balance = balance
                .map(|b| validate_nonnegative_int(&b, "Balance").map(|n| n as f64))
                .transpose()?;

            if update.is_empty() {
                println!("No changes specified. Use --name, --currency or --balance.");
                return Ok(());
            }

            let updated = ledger.accounts_mut().update(&account, update)?;
            println!("Updated account: {}", updated);
        }

        AccountCommands::Delete { account } => {
            let removed = ledger.accounts_mut().delete(&account)?;
            println!("Deleted account: {}", removed.name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(ledger: &mut Ledger, id: &str, balance: &str) -> FinanceResult<()> {
        handle_account_command(
            ledger,
            &Settings::default(),
            AccountCommands::Create {
                name: "Wallet".into(),
                id: Some(id.into()),
                account_type: "cash".into(),
                currency: None,
                balance: balance.into(),
            },
        )
    }

    #[test]
    fn test_create_uses_default_currency() {
        let mut ledger = Ledger::new();
        create(&mut ledger, "A1", "100").unwrap();

        let account = ledger.accounts().get("A1").unwrap();
        assert_eq!(account.currency, "HUF");
        assert_eq!(account.balance, 100.0);
        assert_eq!(account.kind, AccountKind::Cash);
    }

    #[test]
    fn test_create_rejects_fractional_balance() {
        let mut ledger = Ledger::new();
        assert!(create(&mut ledger, "A1", "10.5").unwrap_err().is_validation());
        assert_eq!(ledger.accounts().count(), 0);
    }

    #[test]
    fn test_edit_without_fields_is_noop() {
        let mut ledger = Ledger::new();
        create(&mut ledger, "A1", "100").unwrap();

        handle_account_command(
            &mut ledger,
            &Settings::default(),
            AccountCommands::Edit {
                account: "A1".into(),
                name: None,
                currency: None,
                balance: None,
            },
        )
        .unwrap();
        assert_eq!(ledger.accounts().get("A1").unwrap().balance, 100.0);
    }

    #[test]
    fn test_is_mutating() {
        assert!(!AccountCommands::List.is_mutating());
        assert!(AccountCommands::Delete { account: "A1".into() }.is_mutating());
    }
}
