//! Line parser for the bracketed log format.
//!
//! A well-formed line is `[<timestamp>][<severity>] <message>`:
//!
//! ```text
//! [02/28/2020 5:20:57.35][error] Could not create database my_db7.
//! ```
//!
//! Parsing is a three-stage sieve: the line must match the bracket shape,
//! the first group must decode as a timestamp, and the second group must be
//! one of the five severity tags. The first stage to fail names the
//! [`ParseError`]. Callers skip failed lines and keep going.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::types::{LogEntry, Severity};

// ---------------------------------------------------------------------------
// Line shape
// ---------------------------------------------------------------------------

/// Anchored shape of a log line. Bracket groups cannot contain `]`, which
/// keeps the match unambiguous; the message is everything after the single
/// space and may itself contain brackets.
static LINE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\]]*)\]\[([^\]]*)\] (.*)$")
        .expect("built-in line shape must be a valid regex")
});

/// Timestamp layout inside the first bracket group. The hour may be one or
/// two digits and is read at face value on the 24-hour scale; the format
/// carries no AM/PM marker.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S%.f";

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse one log line into an entry tagged with `source`.
///
/// The returned entry keeps the text between each bracket pair verbatim
/// alongside the decoded values. No side effects on failure.
pub fn parse_line(line: &str, source: &str) -> Result<LogEntry, ParseError> {
    let caps = LINE_SHAPE.captures(line).ok_or(ParseError::Structure)?;
    let raw_ts = &caps[1];
    let raw_severity = &caps[2];
    let message = &caps[3];

    let ts = parse_timestamp(raw_ts)?;
    let severity = Severity::parse_tag(raw_severity).ok_or_else(|| ParseError::Severity {
        tag: raw_severity.to_string(),
    })?;

    Ok(LogEntry {
        ts,
        severity,
        source: source.to_string(),
        message: message.to_string(),
        raw_ts: raw_ts.to_string(),
        raw_severity: raw_severity.to_string(),
    })
}

/// Parse a timestamp in the bracket layout, e.g. `02/28/2020 5:20:57.35`.
///
/// chrono has no fixed-width two-digit fraction specifier (`%.f` accepts one
/// to nine digits), so the fraction width is checked here before the text is
/// handed to chrono.
pub fn parse_timestamp(text: &str) -> Result<chrono::NaiveDateTime, ParseError> {
    let fraction_ok = match text.rsplit_once('.') {
        Some((_, frac)) => frac.len() == 2 && frac.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    };
    if !fraction_ok {
        return Err(ParseError::Timestamp {
            text: text.to_string(),
        });
    }
    chrono::NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|_| {
        ParseError::Timestamp {
            text: text.to_string(),
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
