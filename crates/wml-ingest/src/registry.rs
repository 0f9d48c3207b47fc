//! The frozen source registry and its concurrent construction.
//!
//! [`Registry::load`] spawns one loader task per source on a
//! [`JoinSet`](tokio::task::JoinSet) and collects results as tasks finish.
//! A source that fails to load is dropped from the registry and noted in the
//! [`IngestReport`]; only a dead loader task aborts construction. Once
//! built, the registry is never mutated.

use std::collections::HashMap;
use std::path::PathBuf;

use tokio::task::JoinSet;

use wml_core::error::ConstructionError;
use wml_core::LogEntry;

use crate::loader::{self, SkipCounts};

/// Immutable map of source key to entries in file order.
#[derive(Debug, Default)]
pub struct Registry {
    sources: HashMap<String, Vec<LogEntry>>,
}

/// Per-source ingest outcome, keyed like the registry.
#[derive(Debug, Default, Clone)]
pub struct IngestReport {
    /// Sources that loaded, with their entry and skip counts.
    pub loaded: HashMap<String, SourceStats>,
    /// Sources that were dropped, with the reason rendered as text.
    pub dropped: HashMap<String, String>,
}

/// Counts for one successfully loaded source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceStats {
    pub entries: usize,
    pub skipped: SkipCounts,
}

impl Registry {
    /// Load every source in `mapping` concurrently and freeze the result.
    ///
    /// A source that cannot be opened or read is dropped and recorded in the
    /// report; construction itself fails only when a loader task panics or
    /// is aborted by the runtime.
    pub async fn load(
        mapping: HashMap<String, PathBuf>,
    ) -> Result<(Registry, IngestReport), ConstructionError> {
        let mut tasks = JoinSet::new();
        for (key, path) in mapping {
            tasks.spawn(async move {
                let outcome = loader::load_source(&key, &path).await;
                (key, path, outcome)
            });
        }

        let mut sources = HashMap::new();
        let mut report = IngestReport::default();
        while let Some(joined) = tasks.join_next().await {
            let (key, path, outcome) = joined?;
            match outcome {
                Ok(loaded) => {
                    tracing::debug!(
                        source = %key,
                        path = %path.display(),
                        entries = loaded.entries.len(),
                        skipped = loaded.skipped.total(),
                        "source loaded"
                    );
                    report.loaded.insert(
                        key.clone(),
                        SourceStats {
                            entries: loaded.entries.len(),
                            skipped: loaded.skipped,
                        },
                    );
                    sources.insert(key, loaded.entries);
                }
                Err(err) => {
                    tracing::warn!(source = %key, error = %err, "source dropped");
                    report.dropped.insert(key, err.to_string());
                }
            }
        }

        Ok((Registry { sources }, report))
    }

    /// Build a registry directly from already-parsed entries, bypassing the
    /// file loaders. Entry lists must be in the order the file carried them.
    pub fn from_entries(sources: HashMap<String, Vec<LogEntry>>) -> Registry {
        Registry { sources }
    }

    /// Entries for `key` in file order, or `None` for an unknown source.
    pub fn entries(&self, key: &str) -> Option<&[LogEntry]> {
        self.sources.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sources.contains_key(key)
    }

    /// Keys of every loaded source, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.sources.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
