//! Transaction CLI commands
//!
//! Implements CLI commands for recording and managing transactions.

use chrono::{NaiveDate, TimeZone, Utc};
use clap::Subcommand;

use crate::display::transaction::{format_transaction_details, format_transaction_list};
use crate::error::{TrakrError, TrakrResult};
use crate::models::{CategoryCatalog, Money, Transaction, TransactionKind};
use crate::reports::TimeRange;
use crate::services::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
    WalletService,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (e.g., "42.50" or "$42.50")
        #[arg(short, long)]
        amount: String,
        /// Kind: income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Category key (e.g., "food", "salary")
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Payment method (e.g., "cash", "card")
        #[arg(short, long)]
        method: Option<String>,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
        /// Comma-separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
        /// Wallet name or ID (defaults to the default wallet)
        #[arg(short, long)]
        wallet: Option<String>,
    },
    /// List transactions
    List {
        /// Filter by kind: income or expense
        #[arg(short, long)]
        kind: Option<String>,
        /// Filter by category key
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by wallet name or ID
        #[arg(short, long)]
        wallet: Option<String>,
        /// Rolling window: 7days, 30days, 90days, or year
        #[arg(short, long)]
        range: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (full or short form)
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID (full or short form)
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New kind: income or expense
        #[arg(short, long)]
        kind: Option<String>,
        /// New category key
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New payment method
        #[arg(short, long)]
        method: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Attach to a wallet (name or ID)
        #[arg(short, long, conflicts_with = "detach_wallet")]
        wallet: Option<String>,
        /// Detach from its wallet
        #[arg(long)]
        detach_wallet: bool,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (full or short form)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> TrakrResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            kind,
            category,
            date,
            method,
            description,
            tags,
            wallet,
        } => {
            let amount = parse_amount(&amount)?;
            let kind = parse_kind(&kind)?;
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => Utc::now(),
            };

            let wallet_service = WalletService::new(storage);
            let wallet_id = match wallet {
                Some(identifier) => Some(
                    wallet_service
                        .find(&identifier)?
                        .ok_or_else(|| TrakrError::wallet_not_found(&identifier))?
                        .id,
                ),
                None => storage.wallets.get_default()?.map(|w| w.id),
            };

            let txn = service.create(CreateTransactionInput {
                date,
                amount,
                kind,
                category,
                payment_method: method,
                description,
                tags,
                wallet_id,
            })?;

            println!("Recorded {} transaction: {}", txn.kind, txn.id);
            println!("  Date:     {}", txn.day());
            println!("  Amount:   {}", txn.amount);
            println!("  Category: {}", txn.category);
            if let Some(wallet_id) = txn.wallet_id {
                if let Some(wallet) = storage.wallets.get(wallet_id)? {
                    println!("  Wallet:   {}", wallet.name);
                }
            }
            if !CategoryCatalog::default().contains(&txn.category) {
                println!(
                    "  Note: '{}' is not a built-in category. Run `trakr categories` to see the catalog.",
                    txn.category
                );
            }
        }

        TransactionCommands::List {
            kind,
            category,
            wallet,
            range,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);

            if let Some(kind) = kind {
                filter = filter.kind(parse_kind(&kind)?);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(identifier) = wallet {
                let wallet_service = WalletService::new(storage);
                let found = wallet_service
                    .find(&identifier)?
                    .ok_or_else(|| TrakrError::wallet_not_found(&identifier))?;
                filter = filter.wallet(found.id);
            }
            if let Some(range) = range {
                filter = filter.range(TimeRange::parse(&range));
            }

            let transactions = service.list(filter)?;
            print!("{}", format_transaction_list(&transactions));
        }

        TransactionCommands::Show { id } => {
            let txn = find_required(&service, &id)?;
            let catalog = CategoryCatalog::default();
            print!("{}", format_transaction_details(&txn, &catalog));
        }

        TransactionCommands::Edit {
            id,
            amount,
            kind,
            category,
            date,
            method,
            description,
            wallet,
            detach_wallet,
        } => {
            let txn = find_required(&service, &id)?;

            let no_changes = amount.is_none()
                && kind.is_none()
                && category.is_none()
                && date.is_none()
                && method.is_none()
                && description.is_none()
                && wallet.is_none()
                && !detach_wallet;
            if no_changes {
                println!("No changes specified. See `trakr txn edit --help` for options.");
                return Ok(());
            }

            let wallet_id = if detach_wallet {
                Some(None)
            } else if let Some(identifier) = wallet {
                let wallet_service = WalletService::new(storage);
                let found = wallet_service
                    .find(&identifier)?
                    .ok_or_else(|| TrakrError::wallet_not_found(&identifier))?;
                Some(Some(found.id))
            } else {
                None
            };

            let input = UpdateTransactionInput {
                date: date.map(|s| parse_date(&s)).transpose()?,
                amount: amount.map(|s| parse_amount(&s)).transpose()?,
                kind: kind.map(|s| parse_kind(&s)).transpose()?,
                category,
                payment_method: method,
                description,
                wallet_id,
            };

            let updated = service.update(txn.id, input)?;
            println!("Updated transaction: {}", updated.id);
        }

        TransactionCommands::Delete { id } => {
            let txn = find_required(&service, &id)?;
            let deleted = service.delete(txn.id)?;
            println!(
                "Deleted transaction: {} ({} {} {})",
                deleted.id,
                deleted.day(),
                deleted.category,
                deleted.amount
            );
        }
    }

    Ok(())
}

fn find_required(service: &TransactionService, id: &str) -> TrakrResult<Transaction> {
    service
        .find(id)?
        .ok_or_else(|| TrakrError::transaction_not_found(id))
}

fn parse_amount(s: &str) -> TrakrResult<Money> {
    Money::parse(s).map_err(|e| {
        TrakrError::Validation(format!(
            "Invalid amount '{}'. Use a format like '42.50'. Error: {}",
            s, e
        ))
    })
}

fn parse_kind(s: &str) -> TrakrResult<TransactionKind> {
    TransactionKind::parse(s).ok_or_else(|| {
        TrakrError::Validation(format!(
            "Invalid kind '{}'. Valid kinds: income, expense",
            s
        ))
    })
}

/// Parse a YYYY-MM-DD date as midnight UTC
fn parse_date(s: &str) -> TrakrResult<chrono::DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        TrakrError::Validation(format!("Invalid date '{}'. Use the format YYYY-MM-DD", s))
    })?;

    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| TrakrError::Validation(format!("Invalid date '{}'", s)))?;

    Ok(Utc.from_utc_datetime(&midnight))
}
