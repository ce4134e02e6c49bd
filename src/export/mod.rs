//! Export module for Trakr
//!
//! Provides complete data export functionality in multiple formats:
//! - JSON: For machine-readable full data export
//! - YAML: For human-readable full data export
//!
//! Per-report CSV output lives with the reports themselves.

pub mod json;
pub mod yaml;

pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
