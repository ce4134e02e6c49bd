//! Category catalog
//!
//! Categories are reference data, not user-managed entities: transactions
//! store a category *key* (e.g. "food"), and the catalog maps keys to a
//! display name and chart color. Unknown keys degrade gracefully to the raw
//! key and a fallback color rather than erroring.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Color used when a transaction references a key the catalog doesn't know
pub const FALLBACK_COLOR: &str = "#CBD5E0";

/// Which transaction kinds a category applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
    Both,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Both => write!(f, "Both"),
        }
    }
}

/// A single catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDef {
    /// Stable lookup key stored on transactions
    pub key: String,

    /// Display name
    pub name: String,

    /// Hex color for charts and legends
    pub color: String,

    /// Applicability
    pub kind: CategoryKind,
}

impl CategoryDef {
    /// Create a new catalog entry
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        kind: CategoryKind,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            color: color.into(),
            kind,
        }
    }
}

impl fmt::Display for CategoryDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.key)
    }
}

/// Result of resolving a category key against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCategory {
    pub name: String,
    pub color: String,
}

/// Read-only mapping from category keys to display data
///
/// Injected into the report builders so they stay pure and testable; the
/// catalog itself is never persisted.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    defs: Vec<CategoryDef>,
    index: HashMap<String, usize>,
}

impl CategoryCatalog {
    /// Build a catalog from a list of entries
    ///
    /// Later entries win on duplicate keys.
    pub fn new(defs: Vec<CategoryDef>) -> Self {
        let index = defs
            .iter()
            .enumerate()
            .map(|(i, d)| (d.key.clone(), i))
            .collect();
        Self { defs, index }
    }

    /// Look up a catalog entry by key
    pub fn get(&self, key: &str) -> Option<&CategoryDef> {
        self.index.get(key).map(|&i| &self.defs[i])
    }

    /// Check whether a key is known
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Resolve a key to display data, falling back to the raw key and the
    /// fallback color for unknown keys
    pub fn resolve(&self, key: &str) -> ResolvedCategory {
        match self.get(key) {
            Some(def) => ResolvedCategory {
                name: def.name.clone(),
                color: def.color.clone(),
            },
            None => ResolvedCategory {
                name: key.to_string(),
                color: FALLBACK_COLOR.to_string(),
            },
        }
    }

    /// Resolve just the display name
    pub fn resolve_name(&self, key: &str) -> String {
        self.resolve(key).name
    }

    /// All entries in catalog order
    pub fn defs(&self) -> &[CategoryDef] {
        &self.defs
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl Default for CategoryCatalog {
    /// The built-in catalog
    fn default() -> Self {
        use CategoryKind::*;
        Self::new(vec![
            CategoryDef::new("food", "Food", "#3182CE", Expense),
            CategoryDef::new("transport", "Transport", "#38A169", Expense),
            CategoryDef::new("housing", "Housing", "#E53E3E", Expense),
            CategoryDef::new("utilities", "Utilities", "#805AD5", Expense),
            CategoryDef::new("entertainment", "Entertainment", "#DD6B20", Expense),
            CategoryDef::new("shopping", "Shopping", "#38B2AC", Expense),
            CategoryDef::new("health", "Health", "#D69E2E", Expense),
            CategoryDef::new("education", "Education", "#667EEA", Expense),
            CategoryDef::new("salary", "Salary", "#48BB78", Income),
            CategoryDef::new("freelance", "Freelance", "#4299E1", Income),
            CategoryDef::new("investment", "Investment", "#9F7AEA", Income),
            CategoryDef::new("other", "Other", "#F56565", Both),
        ])
    }
}
