//! Textual rendering of query results.
//!
//! Each entry renders as `[<timestamp>][<severity>] <source>: <message>`,
//! reconstructing both bracket groups exactly as the file carried them, with
//! the source key spliced in so interleaved output stays attributable.

use wml_core::LogEntry;

/// Render one entry on one line using its verbatim bracket text.
pub fn render_entry(entry: &LogEntry) -> String {
    format!(
        "[{}][{}] {}: {}",
        entry.raw_ts, entry.raw_severity, entry.source, entry.message
    )
}

/// Render entries newline-joined, in the order given. Empty input renders
/// as the empty string.
pub fn render(entries: &[LogEntry]) -> String {
    entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
