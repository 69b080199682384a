use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use finance::cli::{
    handle_account_command, handle_budget_command, handle_transaction_command, AccountCommands,
    BudgetCommands, TransactionCommands,
};
use finance::config::{FinancePaths, Settings};
use finance::display::format_summary;
use finance::reports::FinancialSummary;
use finance::services::Ledger;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Personal finance tracker",
    long_about = "Track accounts, income and expense transactions, and monthly \
                  budgets. Data is kept in CSV files; set FINANCE_TRACKER_DATA_DIR \
                  to choose where."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show totals per currency
    Summary,

    /// Show current configuration and paths
    Config,
}

impl Commands {
    fn is_mutating(&self) -> bool {
        match self {
            Commands::Account(cmd) => cmd.is_mutating(),
            Commands::Transaction(cmd) => cmd.is_mutating(),
            Commands::Budget(cmd) => cmd.is_mutating(),
            Commands::Summary | Commands::Config => false,
        }
    }
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings);

    let Some(command) = cli.command else {
        println!("Finance Tracker - accounts, transactions and budgets");
        println!();
        println!("Run 'finance --help' for usage information.");
        return Ok(());
    };

    let files = paths.ledger_files();
    let mut ledger = Ledger::new();
    ledger.load_all(&files)?;
    debug!(
        accounts = ledger.accounts().count(),
        transactions = ledger.transactions().count(),
        budgets = ledger.budgets().count(),
        "loaded ledger"
    );

    let mutating = command.is_mutating();

    match command {
        Commands::Account(cmd) => handle_account_command(&mut ledger, &settings, cmd)?,
        Commands::Transaction(cmd) => handle_transaction_command(&mut ledger, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut ledger, cmd)?,
        Commands::Summary => {
            print!("{}", format_summary(&FinancialSummary::build(&ledger)));
        }
        Commands::Config => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Accounts file:     {}", files.accounts.display());
            println!("Transactions file: {}", files.transactions.display());
            println!("Budgets file:      {}", files.budgets.display());
            println!();
            println!("Settings:");
            println!("  Auto save:        {}", settings.auto_save);
            println!("  Log level:        {}", settings.log_level);
            println!("  Default currency: {}", settings.default_currency);
        }
    }

    if mutating && settings.auto_save {
        paths.ensure_directories()?;
        ledger.save_all(&files)?;
        debug!(dir = %paths.data_dir().display(), "saved ledger");
    }

    Ok(())
}
