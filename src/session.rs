// 📋 Session Tracker - bounded validation history + running statistics
// Keeps the 10 most recent results (most-recent-first) and valid/invalid
// counters for the lifetime of the session. No persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// History keeps this many entries; inserting beyond it evicts the oldest.
pub const HISTORY_CAPACITY: usize = 10;

// ============================================================================
// HISTORY ENTRY
// ============================================================================

/// One recorded validation attempt. The timestamp is supplied by the caller
/// so the tracker itself never reads a clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Normalized candidate as it was classified (owned copy)
    pub tin: String,

    /// Classification outcome, collapsed to pass/fail
    pub is_valid: bool,

    /// Capture-time wall clock, caller-supplied
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(tin: impl Into<String>, is_valid: bool, timestamp: DateTime<Utc>) -> Self {
        HistoryEntry {
            tin: tin.into(),
            is_valid,
            timestamp,
        }
    }
}

// ============================================================================
// STATISTICS
// ============================================================================

/// Running pass/fail counters. Every recorded entry increments exactly one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub valid: u64,
    pub invalid: u64,
}

impl Statistics {
    pub fn total(&self) -> u64 {
        self.valid + self.invalid
    }
}

// ============================================================================
// SESSION TRACKER
// ============================================================================

/// Read-only view of the tracker state: entries most-recent-first plus the
/// counters, detached from the live tracker.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub entries: Vec<HistoryEntry>,
    pub stats: Statistics,
}

/// Bounded log + counters for one validation session.
///
/// Not thread-safe on its own; callers with concurrent mutation wrap it in a
/// mutex around `record` and `reset`.
#[derive(Debug, Default)]
pub struct SessionTracker {
    entries: VecDeque<HistoryEntry>,
    stats: Statistics,
}

impl SessionTracker {
    pub fn new() -> Self {
        SessionTracker {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
            stats: Statistics::default(),
        }
    }

    /// Insert at the front of the log, evicting from the back when the log
    /// exceeds capacity. Bumps the matching counter exactly once.
    pub fn record(&mut self, entry: HistoryEntry) {
        if entry.is_valid {
            self.stats.valid += 1;
        } else {
            self.stats.invalid += 1;
        }

        self.entries.push_front(entry);
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_back();
        }
    }

    /// Detached copy of the current log and counters. Does not mutate.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            entries: self.entries.iter().cloned().collect(),
            stats: self.stats.clone(),
        }
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Share of `count` against everything recorded so far, as a percentage
    /// rounded to 2 decimal places. An empty tracker yields 0 rather than a
    /// division error.
    pub fn percentage(&self, count: u64) -> f64 {
        let total = self.stats.total();
        if total == 0 {
            return 0.0;
        }
        let pct = (count as f64 / total as f64) * 100.0;
        (pct * 100.0).round() / 100.0
    }

    /// Clear the log and both counters together.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.stats = Statistics::default();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tin: &str, is_valid: bool) -> HistoryEntry {
        HistoryEntry::new(tin, is_valid, Utc::now())
    }

    #[test]
    fn test_record_keeps_most_recent_first() {
        let mut tracker = SessionTracker::new();
        tracker.record(entry("C123456789", true));
        tracker.record(entry("XYZ123", false));
        tracker.record(entry("IG1234567890", true));

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.entries.len(), 3);
        assert_eq!(snapshot.entries[0].tin, "IG1234567890");
        assert_eq!(snapshot.entries[1].tin, "XYZ123");
        assert_eq!(snapshot.entries[2].tin, "C123456789");
    }

    #[test]
    fn test_eviction_beyond_capacity() {
        let mut tracker = SessionTracker::new();
        for i in 0..15 {
            tracker.record(entry(&format!("TIN{:02}", i), true));
        }

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.entries.len(), HISTORY_CAPACITY);
        // The 10 most recent survive (14 down to 5), the first 5 are evicted
        assert_eq!(snapshot.entries[0].tin, "TIN14");
        assert_eq!(snapshot.entries[9].tin, "TIN05");
        // Counters are untouched by eviction
        assert_eq!(tracker.stats().valid, 15);
    }

    #[test]
    fn test_counters_track_outcomes() {
        let mut tracker = SessionTracker::new();
        for _ in 0..7 {
            tracker.record(entry("IG1234567890", true));
        }
        for _ in 0..3 {
            tracker.record(entry("XYZ123", false));
        }

        assert_eq!(tracker.stats().valid, 7);
        assert_eq!(tracker.stats().invalid, 3);
        assert_eq!(tracker.stats().total(), 10);
        assert_eq!(tracker.percentage(tracker.stats().valid), 70.0);
        assert_eq!(tracker.percentage(tracker.stats().invalid), 30.0);
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        let mut tracker = SessionTracker::new();
        tracker.record(entry("IG1234567890", true));
        tracker.record(entry("XYZ123", false));
        tracker.record(entry("ABC999", false));

        assert_eq!(tracker.percentage(1), 33.33);
        assert_eq!(tracker.percentage(2), 66.67);
    }

    #[test]
    fn test_percentage_on_empty_tracker() {
        let tracker = SessionTracker::new();
        assert_eq!(tracker.percentage(0), 0.0);
        assert_eq!(tracker.percentage(5), 0.0);
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let mut tracker = SessionTracker::new();
        tracker.record(entry("C123456789", true));

        let first = tracker.snapshot();
        let second = tracker.snapshot();
        assert_eq!(first.entries, second.entries);
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut tracker = SessionTracker::new();
        for i in 0..12 {
            tracker.record(entry(&format!("TIN{:02}", i), i % 2 == 0));
        }

        tracker.reset();

        let snapshot = tracker.snapshot();
        assert!(snapshot.entries.is_empty());
        assert_eq!(snapshot.stats, Statistics::default());
        assert_eq!(tracker.percentage(0), 0.0);
    }
}
