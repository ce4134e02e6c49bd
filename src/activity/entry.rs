//! Activity entry data structures
//!
//! Defines the structure of activity log entries including operation types,
//! entity kinds, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;

/// Types of operations that can be recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created
    Create,
    /// Entity was updated
    Update,
    /// Entity was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Kinds of entities that appear in the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Transaction,
    Wallet,
    Budget,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Transaction => write!(f, "Transaction"),
            EntityKind::Wallet => write!(f, "Wallet"),
            EntityKind::Budget => write!(f, "Budget"),
        }
    }
}

/// A single activity log entry
///
/// Records a single operation on an entity with optional before/after values
/// for tracking changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Kind of entity affected
    pub entity_kind: EntityKind,

    /// ID of the affected entity
    pub entity_id: String,

    /// Human-readable description of the entity (e.g., wallet name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation of the entity before the operation (for updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON representation of the entity after the operation (for creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl ActivityEntry {
    /// Create a new entry for a create operation
    pub fn create<T: Serialize>(
        entity_kind: EntityKind,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_kind,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: serde_json::to_value(entity).ok(),
            diff_summary: None,
        }
    }

    /// Create a new entry for an update operation
    pub fn update<T: Serialize>(
        entity_kind: EntityKind,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_kind,
            entity_id: entity_id.into(),
            entity_name,
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
        }
    }

    /// Create a new entry for a delete operation
    pub fn delete<T: Serialize>(
        entity_kind: EntityKind,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_kind,
            entity_id: entity_id.into(),
            entity_name,
            before: serde_json::to_value(entity).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_kind,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = self.diff_text() {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }

    /// The diff summary, derived from the snapshots when the writer
    /// did not provide one
    fn diff_text(&self) -> Option<String> {
        if let Some(summary) = &self.diff_summary {
            return Some(summary.clone());
        }

        match (&self.before, &self.after) {
            (Some(before), Some(after)) => generate_diff(before, after),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::Wallet.to_string(), "Wallet");
        assert_eq!(EntityKind::Transaction.to_string(), "Transaction");
        assert_eq!(EntityKind::Budget.to_string(), "Budget");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"name": "Cash", "currency": "USD"});
        let entry = ActivityEntry::create(
            EntityKind::Wallet,
            "wal-12345678",
            Some("Cash".to_string()),
            &data,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_kind, EntityKind::Wallet);
        assert_eq!(entry.entity_id, "wal-12345678");
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_entry() {
        let before = json!({"category": "food", "amount": 50000});
        let after = json!({"category": "food", "amount": 60000});

        let entry = ActivityEntry::update(
            EntityKind::Budget,
            "bud-12345678",
            Some("food".to_string()),
            &before,
            &after,
            Some("amount: 50000 -> 60000".to_string()),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(
            entry.diff_summary,
            Some("amount: 50000 -> 60000".to_string())
        );
    }

    #[test]
    fn test_delete_entry() {
        let data = json!({"category": "food"});
        let entry = ActivityEntry::delete(
            EntityKind::Transaction,
            "txn-12345678",
            Some("2025-01-15 food".to_string()),
            &data,
        );

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let data = json!({"name": "Test"});
        let entry = ActivityEntry::create(EntityKind::Wallet, "wal-123", None, &data);

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: ActivityEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.entity_kind, EntityKind::Wallet);
    }

    #[test]
    fn test_human_readable_format() {
        let data = json!({"name": "Cash"});
        let entry = ActivityEntry::create(
            EntityKind::Wallet,
            "wal-12345678",
            Some("Cash".to_string()),
            &data,
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("Wallet"));
        assert!(formatted.contains("wal-12345678"));
        assert!(formatted.contains("Cash"));
    }

    #[test]
    fn test_human_readable_derives_diff_from_snapshots() {
        let before = json!({"name": "Old Name", "currency": "USD"});
        let after = json!({"name": "New Name", "currency": "USD"});

        let entry = ActivityEntry::update(
            EntityKind::Wallet,
            "wal-12345678",
            Some("New Name".to_string()),
            &before,
            &after,
            None,
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("Changes: name: \"Old Name\" -> \"New Name\""));
    }
}
