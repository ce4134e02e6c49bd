//! Activity logger for the append-only activity log
//!
//! Provides the ActivityLogger struct that writes entries to a log file.
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{TrakrError, TrakrResult};

use super::entry::ActivityEntry;

/// Handles writing activity entries to the log file
///
/// The log file uses a line-delimited JSON format (JSONL) where each line
/// is a complete JSON object representing one entry.
pub struct ActivityLogger {
    /// Path to the activity log file
    log_path: PathBuf,
}

impl ActivityLogger {
    /// Create a new ActivityLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Log an activity entry
    ///
    /// Appends the entry as a JSON line to the log file.
    /// Each write is flushed immediately to ensure durability.
    pub fn log(&self, entry: &ActivityEntry) -> TrakrResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TrakrError::Io(format!("Failed to open activity log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| TrakrError::Json(format!("Failed to serialize activity entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| TrakrError::Io(format!("Failed to write activity entry: {}", e)))?;

        file.flush()
            .map_err(|e| TrakrError::Io(format!("Failed to flush activity log: {}", e)))?;

        Ok(())
    }

    /// Log multiple activity entries with a single flush
    pub fn log_batch(&self, entries: &[ActivityEntry]) -> TrakrResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TrakrError::Io(format!("Failed to open activity log: {}", e)))?;

        for entry in entries {
            let json = serde_json::to_string(entry).map_err(|e| {
                TrakrError::Json(format!("Failed to serialize activity entry: {}", e))
            })?;

            writeln!(file, "{}", json)
                .map_err(|e| TrakrError::Io(format!("Failed to write activity entry: {}", e)))?;
        }

        file.flush()
            .map_err(|e| TrakrError::Io(format!("Failed to flush activity log: {}", e)))?;

        Ok(())
    }

    /// Read all activity entries from the log file
    ///
    /// Returns entries in chronological order (oldest first).
    pub fn read_all(&self) -> TrakrResult<Vec<ActivityEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| TrakrError::Io(format!("Failed to open activity log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                TrakrError::Io(format!(
                    "Failed to read activity log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let entry: ActivityEntry = serde_json::from_str(&line).map_err(|e| {
                TrakrError::Json(format!(
                    "Failed to parse activity entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the log
    pub fn read_recent(&self, count: usize) -> TrakrResult<Vec<ActivityEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Get the number of entries in the activity log
    pub fn entry_count(&self) -> TrakrResult<usize> {
        if !self.log_path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.log_path)
            .map_err(|e| TrakrError::Io(format!("Failed to open activity log: {}", e)))?;

        let reader = BufReader::new(file);
        let count = reader.lines().filter(|l| l.is_ok()).count();

        Ok(count)
    }

    /// Check if the activity log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the activity log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
