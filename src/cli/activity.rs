//! Activity CLI command
//!
//! Shows the most recent entries from the activity log.

use crate::display::separator;
use crate::error::TrakrResult;
use crate::storage::Storage;

/// Handle the activity command
pub fn handle_activity_command(storage: &Storage, limit: usize) -> TrakrResult<()> {
    let logger = storage.activity();

    let total = logger.entry_count()?;
    if total == 0 {
        println!("No activity recorded yet.");
        return Ok(());
    }

    let entries = logger.read_recent(limit)?;

    println!("Recent Activity ({} of {} entries)", entries.len(), total);
    println!("{}", separator(76));

    // Most recent first
    for entry in entries.iter().rev() {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
