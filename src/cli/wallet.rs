//! Wallet CLI commands
//!
//! Implements CLI commands for wallet management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_wallet_details, format_wallet_list, format_with_currency};
use crate::error::{TrakrError, TrakrResult};
use crate::models::{Money, Wallet};
use crate::services::{CreateWalletInput, WalletService};
use crate::storage::Storage;

/// Wallet subcommands
#[derive(Subcommand)]
pub enum WalletCommands {
    /// Create a new wallet
    Create {
        /// Wallet name
        name: String,
        /// ISO 4217 currency code (defaults to the settings currency)
        #[arg(short, long)]
        currency: Option<String>,
        /// Starting balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0")]
        balance: String,
        /// Display color (hex)
        #[arg(long)]
        color: Option<String>,
    },
    /// List all wallets with balances
    List,
    /// Show wallet details
    Show {
        /// Wallet name or ID
        wallet: String,
    },
    /// Make a wallet the default for new transactions
    SetDefault {
        /// Wallet name or ID
        wallet: String,
    },
    /// Rename a wallet
    Rename {
        /// Wallet name or ID
        wallet: String,
        /// New name
        name: String,
    },
    /// Delete a wallet
    Delete {
        /// Wallet name or ID
        wallet: String,
    },
}

/// Handle a wallet command
pub fn handle_wallet_command(
    storage: &Storage,
    settings: &Settings,
    cmd: WalletCommands,
) -> TrakrResult<()> {
    let service = WalletService::new(storage);

    match cmd {
        WalletCommands::Create {
            name,
            currency,
            balance,
            color,
        } => {
            let starting_balance = Money::parse(&balance).map_err(|e| {
                TrakrError::Validation(format!(
                    "Invalid balance '{}'. Use a format like '1000.00'. Error: {}",
                    balance, e
                ))
            })?;

            let wallet = service.create(CreateWalletInput {
                name,
                currency: currency.or_else(|| Some(settings.currency.clone())),
                starting_balance: Some(starting_balance),
                color,
            })?;

            println!("Created wallet: {}", wallet.name);
            println!("  Currency:         {}", wallet.currency);
            println!(
                "  Starting Balance: {}",
                format_with_currency(wallet.starting_balance, &wallet.currency)
            );
            println!(
                "  Default:          {}",
                if wallet.is_default { "Yes" } else { "No" }
            );
            println!("  ID:               {}", wallet.id);
        }

        WalletCommands::List => {
            let summaries = service.list_with_balances()?;
            print!("{}", format_wallet_list(&summaries));
        }

        WalletCommands::Show { wallet } => {
            let found = find_required(&service, &wallet)?;
            let summary = service.summary(found.id)?;
            print!("{}", format_wallet_details(&summary));
        }

        WalletCommands::SetDefault { wallet } => {
            let found = find_required(&service, &wallet)?;
            let updated = service.set_default(found.id)?;
            println!("Default wallet is now: {}", updated.name);
        }

        WalletCommands::Rename { wallet, name } => {
            let found = find_required(&service, &wallet)?;
            let old_name = found.name.clone();
            let renamed = service.rename(found.id, &name)?;
            println!("Renamed wallet: '{}' -> '{}'", old_name, renamed.name);
        }

        WalletCommands::Delete { wallet } => {
            let found = find_required(&service, &wallet)?;
            let deleted = service.delete(found.id)?;
            println!("Deleted wallet: {}", deleted.name);
        }
    }

    Ok(())
}

fn find_required(service: &WalletService, identifier: &str) -> TrakrResult<Wallet> {
    service
        .find(identifier)?
        .ok_or_else(|| TrakrError::wallet_not_found(identifier))
}
