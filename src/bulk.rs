// 📦 Bulk validation - classify and record many candidates in one pass
// The caller-side loop over multi-line input: split, normalize, drop blank
// lines, classify each independently, record each in the session tracker.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classifier::{classify, normalize, ClassificationOutcome};
use crate::session::{HistoryEntry, SessionTracker};

// ============================================================================
// BULK REPORT
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BulkResult {
    /// Normalized candidate as classified
    pub tin: String,
    pub outcome: ClassificationOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkReport {
    pub results: Vec<BulkResult>,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl BulkReport {
    pub fn summary(&self) -> String {
        format!(
            "{} candidates: {} valid, {} invalid",
            self.results.len(),
            self.valid_count,
            self.invalid_count
        )
    }
}

// ============================================================================
// BULK VALIDATION
// ============================================================================

/// Validate every non-empty line of `input` and record each result in the
/// tracker. Blank and whitespace-only lines are discarded before
/// classification; they are neither classified nor recorded. All entries in
/// one batch share the caller-supplied timestamp.
pub fn bulk_validate(
    input: &str,
    tracker: &mut SessionTracker,
    timestamp: DateTime<Utc>,
) -> BulkReport {
    let mut results = Vec::new();
    let mut valid_count = 0;
    let mut invalid_count = 0;

    for line in input.lines() {
        let tin = normalize(line);
        if tin.is_empty() {
            continue;
        }

        let outcome = classify(&tin);
        if outcome.is_valid() {
            valid_count += 1;
        } else {
            invalid_count += 1;
        }

        tracker.record(HistoryEntry::new(tin.clone(), outcome.is_valid(), timestamp));
        results.push(BulkResult { tin, outcome });
    }

    BulkReport {
        results,
        valid_count,
        invalid_count,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_validates_each_line() {
        let mut tracker = SessionTracker::new();
        let input = "IG1234567890\nC1234567890\nXYZ123";

        let report = bulk_validate(input, &mut tracker, Utc::now());

        assert_eq!(report.results.len(), 3);
        assert_eq!(report.valid_count, 2);
        assert_eq!(report.invalid_count, 1);
        assert!(report.results[0].outcome.is_valid());
        assert!(report.results[1].outcome.is_valid());
        assert!(!report.results[2].outcome.is_valid());
    }

    #[test]
    fn test_bulk_skips_blank_lines() {
        let mut tracker = SessionTracker::new();
        let input = "IG1234567890\n\n   \nSG123456789\n";

        let report = bulk_validate(input, &mut tracker, Utc::now());

        assert_eq!(report.results.len(), 2);
        assert_eq!(tracker.stats().total(), 2);
    }

    #[test]
    fn test_bulk_normalizes_candidates() {
        let mut tracker = SessionTracker::new();
        let input = "  ig1234567890  \nog123456789";

        let report = bulk_validate(input, &mut tracker, Utc::now());

        assert_eq!(report.results[0].tin, "IG1234567890");
        assert_eq!(report.results[1].tin, "OG123456789");
        assert_eq!(report.valid_count, 2);
    }

    #[test]
    fn test_bulk_records_into_tracker() {
        let mut tracker = SessionTracker::new();
        let input = "IG1234567890\nXYZ123\nC123456789";

        bulk_validate(input, &mut tracker, Utc::now());

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.entries.len(), 3);
        // Most recent first: the last line of the batch leads the log
        assert_eq!(snapshot.entries[0].tin, "C123456789");
        assert_eq!(snapshot.stats.valid, 2);
        assert_eq!(snapshot.stats.invalid, 1);
    }

    #[test]
    fn test_bulk_summary_line() {
        let mut tracker = SessionTracker::new();
        let report = bulk_validate("IG1234567890\nXYZ123", &mut tracker, Utc::now());

        assert_eq!(report.summary(), "2 candidates: 1 valid, 1 invalid");
    }

    #[test]
    fn test_large_bulk_respects_history_capacity() {
        let mut tracker = SessionTracker::new();
        let input: String = (0..20)
            .map(|i| format!("TIN{:02}\n", i))
            .collect();

        let report = bulk_validate(&input, &mut tracker, Utc::now());

        assert_eq!(report.results.len(), 20);
        // Counters see every candidate, the log keeps only the last 10
        assert_eq!(tracker.stats().total(), 20);
        assert_eq!(tracker.snapshot().entries.len(), 10);
    }
}
