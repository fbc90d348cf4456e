//! Log of completed evaluations
//!
//! Bounded queue so a long-lived session cannot grow without limit. Entries
//! serialize to JSON so a host application can persist or export them.

use crate::core::ops::format_value;
use crate::core::BinaryOp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One completed evaluation: `lhs op rhs = value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Left operand
    pub lhs: f64,
    /// The operator applied
    pub op: BinaryOp,
    /// Right operand
    pub rhs: f64,
    /// The computed value
    pub value: f64,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(lhs: f64, op: BinaryOp, rhs: f64, value: f64) -> Self {
        Self {
            lhs,
            op,
            rhs,
            value,
        }
    }

    /// The evaluated expression, e.g. `"7 + 3"`.
    #[must_use]
    pub fn expression(&self) -> String {
        format!(
            "{} {} {}",
            format_value(self.lhs),
            self.op.symbol(),
            format_value(self.rhs)
        )
    }

    /// Full display string, e.g. `"7 + 3 = 10"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression(), format_value(self.value))
    }
}

/// Bounded log of completed evaluations, oldest first.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a new history with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates a history with a custom maximum size
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Records a completed evaluation, evicting the oldest entry when full.
    pub fn record(&mut self, lhs: f64, op: BinaryOp, rhs: f64, value: f64) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry::new(lhs, op, rhs, value));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Iterates newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// The most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Serializes the entries to JSON, oldest first.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Restores a history from JSON produced by [`History::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::new();
        for entry in entries {
            history.entries.push_back(entry);
        }
        Ok(history)
    }
}
