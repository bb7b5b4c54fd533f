//! Computation history.
//!
//! History is insertion ordered and immutable: `record` and the removal
//! operations return a new history and leave the original untouched.
//! Presentation shows entries most-recent-first; display indices are
//! mapped back to insertion indices here so callers never do the
//! arithmetic themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single computation.
///
/// # Example
///
/// ```rust
/// use shopcalc::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("2+3*4", 14.0);
/// assert_eq!(entry.label, "2+3*4");
/// assert_eq!(entry.value, 14.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Text description of the operation
    pub label: String,
    /// The computed value
    pub value: f64,
    /// When the entry was recorded
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered history of computations.
///
/// # Example
///
/// ```rust
/// use shopcalc::core::{History, HistoryEntry};
///
/// let history = History::new()
///     .record(HistoryEntry::new("first", 10.0))
///     .record(HistoryEntry::new("second", 20.0));
///
/// assert_eq!(history.total(), 30.0);
///
/// // Display index 0 is the most recent entry
/// let (history, removed) = history.remove_display(0);
/// assert_eq!(removed.unwrap().label, "second");
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// This is a pure function: the existing history is not mutated.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Remove the entry at insertion index `index`.
    ///
    /// Returns the new history and the removed entry. An out-of-range
    /// index yields an unchanged history and `None`.
    pub fn remove(&self, index: usize) -> (Self, Option<HistoryEntry>) {
        if index >= self.entries.len() {
            return (self.clone(), None);
        }
        let mut entries = self.entries.clone();
        let removed = entries.remove(index);
        (Self { entries }, Some(removed))
    }

    /// Remove the entry at display index `display_index`.
    ///
    /// Display index 0 is the most recent entry, so display index `i`
    /// addresses insertion index `len - 1 - i`.
    pub fn remove_display(&self, display_index: usize) -> (Self, Option<HistoryEntry>) {
        match self.insertion_index(display_index) {
            Some(index) => self.remove(index),
            None => (self.clone(), None),
        }
    }

    /// Map a display index to its insertion index.
    pub fn insertion_index(&self, display_index: usize) -> Option<usize> {
        self.entries
            .len()
            .checked_sub(1)
            .and_then(|last| last.checked_sub(display_index))
    }

    /// Sum of all entry values (0 for an empty history).
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.value).sum()
    }

    /// An empty history.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries most recent first, paired with their display index.
    pub fn iter_recent(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        self.entries.iter().rev().enumerate()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
