//! Search history model.
//!
//! The history is an ordered list of previously searched words, most recent
//! first, each word appearing at most once. Resubmitting a word that is already
//! present neither duplicates nor moves it. Entries track when they were first
//! searched so the presentation layer can show a relative age.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Default number of entries kept before the oldest is evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// A single previously searched word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub word: String,
    pub searched_at: DateTime<Utc>,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(word: String) -> Self {
        Self {
            word,
            searched_at: Utc::now(),
        }
    }

    /// Returns a human-readable string describing how long ago the word was searched.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "7d ago")
    ///
    /// # Examples
    ///
    /// ```
    /// use synoscope::domain::HistoryEntry;
    ///
    /// let mut entry = HistoryEntry::new("happy".to_string());
    /// assert_eq!(entry.time_ago(), "just now");
    ///
    /// entry.searched_at = chrono::Utc::now() - chrono::Duration::seconds(300);
    /// assert_eq!(entry.time_ago(), "5m ago");
    /// ```
    #[must_use]
    pub fn time_ago(&self) -> String {
        let diff = (Utc::now() - self.searched_at).num_seconds();

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

/// Bounded, most-recent-first list of unique searched words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Creates an empty history. A capacity of zero is treated as one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Records a searched word.
    ///
    /// Returns `true` when the word was new and has been prepended. Existing
    /// words and empty words leave the history untouched. When the capacity is
    /// exceeded the oldest entry is evicted.
    pub fn record(&mut self, word: &str) -> bool {
        if word.is_empty() || self.contains(word) {
            return false;
        }
        self.entries.insert(0, HistoryEntry::new(word.to_string()));
        if self.entries.len() > self.capacity {
            let evicted = self.entries.pop();
            tracing::debug!(evicted = ?evicted.map(|e| e.word), "history capacity reached");
        }
        true
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry.word == word)
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterates the words, most recent first.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.word.as_str())
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
