// 💾 History export - CSV rendering of a session snapshot
// Writes a TIN,Valid,Timestamp header plus one row per entry in snapshot
// order (most recent first).

use anyhow::{Context, Result};
use std::path::Path;

use crate::session::HistoryEntry;

/// Timestamps are rendered as a plain wall-clock label, not RFC 3339
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render history entries as CSV text.
pub fn history_to_csv(entries: &[HistoryEntry]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(["TIN", "Valid", "Timestamp"])
        .context("Failed to write CSV header")?;

    for entry in entries {
        wtr.write_record([
            entry.tin.as_str(),
            if entry.is_valid { "true" } else { "false" },
            &entry.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        ])
        .context("Failed to write CSV row")?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Write history entries to a CSV file at `path`.
pub fn export_history(entries: &[HistoryEntry], path: &Path) -> Result<()> {
    let csv = history_to_csv(entries)?;
    std::fs::write(path, csv)
        .with_context(|| format!("Failed to write history CSV: {:?}", path))?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
