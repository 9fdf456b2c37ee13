//! The warning log.
//!
//! An ordered, append-only record of every warning the device has raised
//! this session. Insertion order is arrival order. There is no eviction,
//! no cap, and no deduplication: if the device repeats itself, the log
//! repeats itself.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One received warning and when it arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningEntry {
    pub message: String,
    pub received_at: DateTime<Utc>,
}

/// Append-only warning history for the current session.
#[derive(Debug, Default)]
pub struct WarningLog {
    entries: Vec<WarningEntry>,
}

impl WarningLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a warning stamped with the current time and return a
    /// reference to the stored entry.
    pub fn append(&mut self, message: impl Into<String>) -> &WarningEntry {
        self.entries.push(WarningEntry {
            message: message.into(),
            received_at: Utc::now(),
        });
        self.entries.last().expect("entry was just pushed")
    }

    /// Number of warnings received so far. Monotonically non-decreasing.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &WarningEntry> {
        self.entries.iter()
    }

    /// The most recently received warning, if any.
    pub fn latest(&self) -> Option<&WarningEntry> {
        self.entries.last()
    }
}
