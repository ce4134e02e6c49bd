//! Budget CLI commands
//!
//! Implements CLI commands for spending caps: set, list with progress,
//! and remove.

use clap::Subcommand;

use crate::display::{double_separator, format_bar, format_percentage, right_align, separator};
use crate::error::{TrakrError, TrakrResult};
use crate::models::{BudgetPeriod, Money};
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a spending cap for a category (creates or replaces)
    Set {
        /// Category key (e.g., "food")
        category: String,
        /// Amount (e.g., "400" or "400.00")
        amount: String,
        /// Budget period: weekly, monthly, or yearly
        #[arg(short, long, default_value = "monthly")]
        period: String,
    },

    /// List budgets with progress for the current window
    List,

    /// Remove a spending cap
    Remove {
        /// Category key
        category: String,
        /// Budget period: weekly, monthly, or yearly
        #[arg(short, long, default_value = "monthly")]
        period: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> TrakrResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            period,
        } => {
            let amount = parse_amount(&amount)?;
            let period = parse_period(&period)?;

            let budget = service.set(&category, amount, period)?;

            println!("Budget set for '{}'", budget.category);
            println!("  Amount: {}", budget.amount);
            println!("  Period: {}", budget.period);
        }

        BudgetCommands::List => {
            let report = service.status_today()?;

            if report.rows.is_empty() {
                println!("No budgets set. Add one with `trakr budget set <category> <amount>`.");
                return Ok(());
            }

            println!("Budget Progress (as of {})", report.as_of);
            println!("{}", double_separator(60));

            for row in &report.rows {
                let bar = format_bar(row.spent.cents() as f64, row.budgeted.cents() as f64, 30);
                let pct = right_align(&format_percentage(row.percent_used), 6);
                let marker = if row.is_overspent() { " *" } else { "" };

                println!();
                println!("{} ({})", row.category, row.period);
                println!("  [{}] {}{}", bar, pct, marker);
                if row.is_overspent() {
                    println!(
                        "  Spent {} of {}, over by {}",
                        row.spent,
                        row.budgeted,
                        row.remaining.abs()
                    );
                } else {
                    println!(
                        "  Spent {} of {}, {} remaining",
                        row.spent, row.budgeted, row.remaining
                    );
                }
            }

            println!();
            println!("{}", separator(60));
            if report.overspent_count() > 0 {
                println!(
                    "{} budget(s), {} overspent",
                    report.rows.len(),
                    report.overspent_count()
                );
            } else {
                println!("{} budget(s)", report.rows.len());
            }
        }

        BudgetCommands::Remove { category, period } => {
            let period = parse_period(&period)?;
            let removed = service.remove(&category, period)?;

            println!(
                "Removed {} budget for '{}'",
                removed.period, removed.category
            );
        }
    }

    Ok(())
}

fn parse_amount(input: &str) -> TrakrResult<Money> {
    Money::parse(input).map_err(|e| {
        TrakrError::Validation(format!(
            "Invalid amount '{}'. Use a format like '400.00'. Error: {}",
            input, e
        ))
    })
}

fn parse_period(input: &str) -> TrakrResult<BudgetPeriod> {
    BudgetPeriod::parse(input).ok_or_else(|| {
        TrakrError::Validation(format!(
            "Invalid period '{}'. Valid periods: weekly, monthly, yearly",
            input
        ))
    })
}
