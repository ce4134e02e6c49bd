use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use trakr::cli::{
    handle_activity_command, handle_budget_command, handle_categories_command,
    handle_export_command, handle_report_command, handle_transaction_command,
    handle_wallet_command,
};
use trakr::config::{paths::TrakrPaths, settings::Settings};
use trakr::storage::{init, Storage};

#[derive(Parser)]
#[command(
    name = "trakr",
    version,
    about = "Personal finance tracker for the terminal",
    long_about = "Trakr is a terminal-based personal finance tracker. It records \
                  income and expenses across wallets, tracks spending against \
                  budgets, and reports where your money goes."
)]
struct Cli {
    /// Data directory override
    #[arg(long, global = true, env = "TRAKR_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Txn(trakr::cli::TransactionCommands),

    /// Reports over a time window
    #[command(subcommand)]
    Report(trakr::cli::ReportCommands),

    /// Wallet management commands
    #[command(subcommand)]
    Wallet(trakr::cli::WalletCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(trakr::cli::BudgetCommands),

    /// List the built-in category catalog
    Categories,

    /// Show recent activity log entries
    Activity {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Export all data
    #[command(subcommand)]
    Export(trakr::cli::ExportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TrakrPaths::with_base_dir(dir),
        None => TrakrPaths::new()?,
    };

    // First run: create the data layout and the seed wallet
    if init::needs_initialization(&paths) {
        init::initialize_storage(&paths)?;
    }

    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Txn(cmd)) => {
            handle_transaction_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Wallet(cmd)) => {
            handle_wallet_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, cmd)?;
        }
        Some(Commands::Categories) => {
            handle_categories_command()?;
        }
        Some(Commands::Activity { limit }) => {
            handle_activity_command(&storage, limit)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        None => {
            println!("Trakr - Personal finance tracking from the command line");
            println!();
            println!("Run 'trakr --help' for usage information.");
            println!("Run 'trakr txn add -a 12.50 -c food' to record your first expense.");
        }
    }

    Ok(())
}
