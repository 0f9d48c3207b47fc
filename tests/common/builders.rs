//! Test builders — ergonomic constructors for `LogEntry` values, raw log
//! lines, on-disk source files, and in-memory engines.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use wml::{LogEntry, LogQuery, Registry, Severity};

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// All fixture entries live on this date unless a test says otherwise.
pub const FIXTURE_DATE: (i32, u32, u32) = (2020, 2, 28);

/// A `NaiveDateTime` at `h:m:s` on the fixture date.
pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    let (year, month, day) = FIXTURE_DATE;
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

/// The fixture timestamp rendered the way a log line carries it: no leading
/// zero on the hour, two-digit fraction.
pub fn ts_text(h: u32, m: u32, s: u32) -> String {
    format!("02/28/2020 {h}:{m:02}:{s:02}.00")
}

// ---------------------------------------------------------------------------
// Raw log lines
// ---------------------------------------------------------------------------

/// Format a raw line in the `[timestamp][severity] message` shape.
pub fn log_line(ts: &str, severity: &str, message: &str) -> String {
    format!("[{ts}][{severity}] {message}")
}

/// A well-formed line at `h:m:s` on the fixture date.
pub fn line_at(h: u32, m: u32, s: u32, severity: &str, message: &str) -> String {
    log_line(&ts_text(h, m, s), severity, message)
}

// ---------------------------------------------------------------------------
// LogEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`LogEntry`] test fixtures.
///
/// The verbatim fields are synthesised from the decoded values, so entries
/// built here render the way a parsed line would.
///
/// # Example
///
/// ```rust
/// let entry = LogEntryBuilder::new("timeout connecting to db")
///     .severity(Severity::Error)
///     .source("db_server")
///     .at(5, 20, 57)
///     .build();
/// ```
pub struct LogEntryBuilder {
    message: String,
    ts: NaiveDateTime,
    severity: Severity,
    source: String,
}

impl LogEntryBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ts: at(0, 0, 0),
            severity: Severity::Info,
            source: "test-source".to_string(),
        }
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn at(mut self, h: u32, m: u32, s: u32) -> Self {
        self.ts = at(h, m, s);
        self
    }

    pub fn ts(mut self, ts: NaiveDateTime) -> Self {
        self.ts = ts;
        self
    }

    pub fn build(self) -> LogEntry {
        LogEntry {
            raw_ts: format!("{}.00", self.ts.format("%m/%d/%Y %-H:%M:%S")),
            raw_severity: self.severity.to_string(),
            ts: self.ts,
            severity: self.severity,
            source: self.source,
            message: self.message,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build an info entry at `h:m:s`.
pub fn info_entry(source: &str, h: u32, m: u32, s: u32, message: &str) -> LogEntry {
    LogEntryBuilder::new(message)
        .source(source)
        .at(h, m, s)
        .build()
}

/// Build an error entry at `h:m:s`.
pub fn error_entry(source: &str, h: u32, m: u32, s: u32, message: &str) -> LogEntry {
    LogEntryBuilder::new(message)
        .source(source)
        .severity(Severity::Error)
        .at(h, m, s)
        .build()
}

// ---------------------------------------------------------------------------
// Source files on disk
// ---------------------------------------------------------------------------

/// Write `lines` to `dir/name`, newline-joined, and return the path.
pub fn write_source(dir: &Path, name: &str, lines: &[impl AsRef<str>]) -> PathBuf {
    let path = dir.join(name);
    let text = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(&path, text).unwrap();
    path
}

/// Build a source mapping from key/path pairs.
pub fn mapping(pairs: &[(&str, &Path)]) -> HashMap<String, PathBuf> {
    pairs
        .iter()
        .map(|(key, path)| (key.to_string(), path.to_path_buf()))
        .collect()
}

// ---------------------------------------------------------------------------
// In-memory engines
// ---------------------------------------------------------------------------

/// Engine over in-memory sources, one `(key, lines)` pair per source. Every
/// line must parse.
pub fn engine_from_lines(sources: &[(&str, &[&str])]) -> LogQuery {
    let mut map = HashMap::new();
    for (key, lines) in sources {
        let entries = lines
            .iter()
            .map(|line| wml::parse_line(line, key).unwrap())
            .collect();
        map.insert(key.to_string(), entries);
    }
    LogQuery::from_registry(Registry::from_entries(map))
}

/// Engine over pre-built entries.
pub fn engine_from_entries(sources: Vec<(&str, Vec<LogEntry>)>) -> LogQuery {
    LogQuery::from_registry(Registry::from_entries(
        sources
            .into_iter()
            .map(|(key, entries)| (key.to_string(), entries))
            .collect(),
    ))
}

/// Source keys as owned strings, the way `query` takes them.
pub fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
