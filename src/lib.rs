//! Trakr - Personal finance tracking for the terminal
//!
//! This library provides the core functionality for the Trakr finance
//! tracker. It records income and expense transactions across wallets,
//! tracks spending against per-category budgets, and aggregates history
//! into spending, cash-flow, and summary reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, wallets, budgets, money)
//! - `storage`: JSON file storage layer
//! - `activity`: Append-only activity logging
//! - `services`: Business logic layer
//! - `reports`: Pure aggregation over transaction history
//! - `display`: Terminal rendering helpers
//! - `export`: Full-state export and import
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use trakr::config::{paths::TrakrPaths, settings::Settings};
//!
//! let paths = TrakrPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod activity;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrakrError, TrakrResult};
