//! Per-source file loading.
//!
//! [`load_source`] reads one log file line by line, parses each line, and
//! keeps the entries in file order. Lines that fail to parse are counted and
//! skipped; the file as a whole only fails when it cannot be opened or read.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use wml_core::error::{ParseError, SourceError};
use wml_core::parse::parse_line;
use wml_core::LogEntry;

/// Entries and skip counts from a single source file.
#[derive(Debug, Default)]
pub struct LoadedSource {
    /// Parsed entries in file order. The loader never sorts; the merge
    /// relies on the file itself being time-ordered.
    pub entries: Vec<LogEntry>,
    pub skipped: SkipCounts,
}

/// How many lines were skipped, per parse failure kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SkipCounts {
    pub structure: usize,
    pub timestamp: usize,
    pub severity: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.structure + self.timestamp + self.severity
    }

    fn record(&mut self, err: &ParseError) {
        match err {
            ParseError::Structure => self.structure += 1,
            ParseError::Timestamp { .. } => self.timestamp += 1,
            ParseError::Severity { .. } => self.severity += 1,
        }
    }
}

/// Read and parse one source file, tagging every entry with `key`.
///
/// Lines are read as bytes and converted lossily, so a stray non-UTF-8 byte
/// spoils one line rather than the whole source. Unparseable lines are
/// logged at debug level with their line number and otherwise left out of
/// the result.
pub async fn load_source(key: &str, path: &Path) -> Result<LoadedSource, SourceError> {
    let file = File::open(path)
        .await
        .map_err(|source| SourceError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

    let mut reader = BufReader::new(file);
    let mut loaded = LoadedSource::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(|source| SourceError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        line_no += 1;
        let line = String::from_utf8_lossy(&buf);
        match parse_line(&line, key) {
            Ok(entry) => loaded.entries.push(entry),
            Err(err) => {
                loaded.skipped.record(&err);
                tracing::debug!(source = %key, line = line_no, error = %err, "skipping line");
            }
        }
    }

    Ok(loaded)
}
