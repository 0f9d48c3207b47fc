//! Core types for wml-core — Weave My Logs.
//!
//! This module defines the data structures shared across all layers: the
//! parsed [`LogEntry`] and the ordered [`Severity`] scale, together with the
//! static tag table used to recognise severities in log lines.

use serde::Serialize;

/// A parsed log entry held in the source registry.
///
/// Timestamp and severity are carried twice: decoded for ordering and
/// filtering, and verbatim as the text between the original brackets so
/// query output can reproduce the line exactly as it appeared in the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Timestamp decoded from the first bracket group. The log format carries
    /// no zone information, so the value is naive.
    pub ts: chrono::NaiveDateTime,
    /// Severity decoded from the second bracket group.
    pub severity: Severity,
    /// Key of the source this entry was read from.
    pub source: String,
    /// Message text after the bracket groups, verbatim.
    pub message: String,
    /// Timestamp text exactly as written between the first brackets.
    pub raw_ts: String,
    /// Severity tag exactly as written between the second brackets.
    pub raw_severity: String,
}

/// Log severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

// ---------------------------------------------------------------------------
// Severity tag table
// ---------------------------------------------------------------------------

/// The five recognised tags, keyed lowercase. Anything else, including the
/// empty string, is outside the ontology.
static SEVERITY_TAGS: phf::Map<&'static str, Severity> = phf::phf_map! {
    "debug" => Severity::Debug,
    "info" => Severity::Info,
    "warn" => Severity::Warn,
    "error" => Severity::Error,
    "fatal" => Severity::Fatal,
};

impl Severity {
    /// Look up a severity tag, ignoring ASCII case.
    pub fn parse_tag(tag: &str) -> Option<Severity> {
        SEVERITY_TAGS.get(tag.to_ascii_lowercase().as_str()).copied()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Debug => write!(f, "debug"),
            Severity::Info => write!(f, "info"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = crate::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::parse_tag(s).ok_or_else(|| crate::error::ParseError::Severity {
            tag: s.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
