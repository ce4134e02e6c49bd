//! Configuration module for Trakr
//!
//! This module provides configuration management including:
//! - Data-directory path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrakrPaths;
pub use settings::Settings;
