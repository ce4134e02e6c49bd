//! CLI commands for reports
//!
//! Renders the aggregation reports over a rolling time window, as a
//! terminal table or as CSV on stdout.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::TrakrResult;
use crate::models::{CategoryCatalog, Transaction};
use crate::reports::{
    filter_by_range, CashFlowReport, PaymentMethodReport, SpendingReport, Statistics, TimeRange,
};
use crate::services::BudgetService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending by category
    Spending {
        /// Window: 7days, 30days, 90days, or year
        #[arg(short, long)]
        range: Option<String>,
        /// Write CSV to stdout instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Income and expenses over time
    CashFlow {
        /// Window: 7days, 30days, 90days, or year
        #[arg(short, long)]
        range: Option<String>,
        /// Write CSV to stdout instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Spending by payment method
    Methods {
        /// Window: 7days, 30days, 90days, or year
        #[arg(short, long)]
        range: Option<String>,
        /// Write CSV to stdout instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Summary statistics
    Summary {
        /// Window: 7days, 30days, 90days, or year
        #[arg(short, long)]
        range: Option<String>,
        /// Write CSV to stdout instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Budget status for the current periods
    Budgets {
        /// Write CSV to stdout instead of a table
        #[arg(long)]
        csv: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrakrResult<()> {
    let catalog = CategoryCatalog::default();

    match cmd {
        ReportCommands::Spending { range, csv } => {
            let (range, transactions) = windowed(storage, settings, range.as_deref())?;
            let report = SpendingReport::generate(&transactions, &catalog);

            if csv {
                report.export_csv(&mut std::io::stdout().lock())?;
            } else {
                println!("Window: {}", range.label());
                println!();
                print!("{}", report.format_terminal());
            }
        }

        ReportCommands::CashFlow { range, csv } => {
            let (range, transactions) = windowed(storage, settings, range.as_deref())?;
            let report = CashFlowReport::generate(&transactions);

            if csv {
                report.export_csv(&mut std::io::stdout().lock())?;
            } else {
                println!("Window: {}", range.label());
                println!();
                print!("{}", report.format_terminal());
            }
        }

        ReportCommands::Methods { range, csv } => {
            let (range, transactions) = windowed(storage, settings, range.as_deref())?;
            let report = PaymentMethodReport::generate(&transactions);

            if csv {
                report.export_csv(&mut std::io::stdout().lock())?;
            } else {
                println!("Window: {}", range.label());
                println!();
                print!("{}", report.format_terminal());
            }
        }

        ReportCommands::Summary { range, csv } => {
            let (range, transactions) = windowed(storage, settings, range.as_deref())?;
            let report = Statistics::generate(&transactions, &catalog);

            if csv {
                report.export_csv(&mut std::io::stdout().lock())?;
            } else {
                println!("Window: {}", range.label());
                println!();
                print!("{}", report.format_terminal());
            }
        }

        ReportCommands::Budgets { csv } => {
            let service = BudgetService::new(storage);
            let report = service.status_today()?;

            if csv {
                report.export_csv(&mut std::io::stdout().lock())?;
            } else {
                print!("{}", report.format_terminal());
            }
        }
    }

    Ok(())
}

/// Resolve the window and filter transactions into it
///
/// Falls back to the settings default when no range is given; unknown
/// range strings degrade to the 30-day window.
fn windowed(
    storage: &Storage,
    settings: &Settings,
    range: Option<&str>,
) -> TrakrResult<(TimeRange, Vec<Transaction>)> {
    let range = TimeRange::parse(range.unwrap_or(&settings.default_range));
    let all = storage.transactions.get_all()?;
    Ok((range, filter_by_range(&all, range)))
}
