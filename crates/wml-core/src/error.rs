//! Error taxonomy for wml.
//!
//! Each layer has its own enum: [`ParseError`] for single lines,
//! [`SourceError`] for whole files, and [`ConstructionError`] for the
//! registry build. Parse failures are recoverable (the offending line is
//! skipped); source failures drop the source; construction failures are
//! systemic and abort startup.

use std::path::PathBuf;
use thiserror::Error;

/// A single log line could not be parsed.
///
/// The variants form a sieve: a line must first match the bracketed shape,
/// then carry a valid timestamp, then a recognised severity tag. The first
/// check to fail names the error.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The line does not match the `[timestamp][severity] message` shape.
    #[error("line does not match the [timestamp][severity] message shape")]
    Structure,

    /// The first bracket group is not a valid timestamp.
    #[error("unparseable timestamp {text:?}, expected MM/DD/YYYY H:MM:SS.CC")]
    Timestamp { text: String },

    /// The second bracket group is not a recognised severity tag.
    #[error("unrecognised severity tag {tag:?}")]
    Severity { tag: String },
}

/// A whole source file could not be ingested.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file opened but reading it failed partway.
    #[error("read failed on {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Registry construction failed for a systemic reason.
///
/// Per-source failures are not construction errors; they drop the source and
/// are reported in the ingest report instead.
#[derive(Error, Debug)]
pub enum ConstructionError {
    /// A loader task panicked or was aborted by the runtime.
    #[error("source loader task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
