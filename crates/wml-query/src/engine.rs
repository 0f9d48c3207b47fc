//! The query engine: parallel per-source filtering feeding the merge.
//!
//! [`LogQuery`] owns the frozen registry. A query spawns one filter task per
//! requested source, collects the filtered lists into slots fixed by request
//! position, and hands them to [`merge_by_timestamp`](crate::merge_by_timestamp).

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tokio::task::JoinSet;

use wml_core::error::ConstructionError;
use wml_core::{LogEntry, Severity};
use wml_ingest::{IngestReport, Registry};

use crate::merge;

/// Read-only query surface over loaded log sources.
///
/// The trait is the seam for swapping the engine out, e.g. for a canned
/// implementation in tests.
#[allow(async_fn_in_trait)]
pub trait Queryable {
    /// Entries strictly after `start`, restricted to `sources` and to
    /// severities at or above `min_severity`, merged in time order and
    /// capped at `limit`. Unknown keys are skipped and a key repeated in
    /// `sources` counts once.
    async fn query(
        &self,
        start: NaiveDateTime,
        limit: usize,
        sources: &[String],
        min_severity: Severity,
    ) -> Vec<LogEntry>;
}

/// The standard engine: sources are read once at construction, queries run
/// against the in-memory registry thereafter.
pub struct LogQuery {
    registry: Arc<Registry>,
    report: IngestReport,
}

impl LogQuery {
    /// Load every source in `mapping` concurrently and build the engine.
    ///
    /// Sources that fail to load are omitted rather than failing
    /// construction; [`LogQuery::report`] says which ones and why.
    pub async fn load(mapping: HashMap<String, PathBuf>) -> Result<LogQuery, ConstructionError> {
        let (registry, report) = Registry::load(mapping).await?;
        Ok(LogQuery {
            registry: Arc::new(registry),
            report,
        })
    }

    /// Wrap an already-built registry. The report is empty.
    pub fn from_registry(registry: Registry) -> LogQuery {
        LogQuery {
            registry: Arc::new(registry),
            report: IngestReport::default(),
        }
    }

    /// What happened to each source during construction.
    pub fn report(&self) -> &IngestReport {
        &self.report
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Queryable for LogQuery {
    async fn query(
        &self,
        start: NaiveDateTime,
        limit: usize,
        sources: &[String],
        min_severity: Severity,
    ) -> Vec<LogEntry> {
        if limit == 0 {
            return Vec::new();
        }

        // Unknown keys contribute nothing and a repeated key counts once,
        // at its first position. Known keys get one filter task each,
        // writing into a slot fixed by request position so the merge sees a
        // deterministic input order no matter which task finishes first.
        let mut seen = HashSet::new();
        let selected: Vec<String> = sources
            .iter()
            .filter(|key| self.registry.contains(key) && seen.insert(key.as_str()))
            .cloned()
            .collect();

        let mut tasks = JoinSet::new();
        for (slot, key) in selected.iter().enumerate() {
            let registry = Arc::clone(&self.registry);
            let key = key.clone();
            tasks.spawn(async move {
                (
                    slot,
                    filter_source(&registry, &key, start, limit, min_severity),
                )
            });
        }

        let mut filtered: Vec<Vec<LogEntry>> = vec![Vec::new(); selected.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((slot, entries)) => filtered[slot] = entries,
                Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
                // Tasks are never cancelled; an aborted task contributes
                // nothing.
                Err(_) => {}
            }
        }

        tracing::debug!(
            sources = selected.len(),
            candidates = filtered.iter().map(Vec::len).sum::<usize>(),
            limit,
            "merging filtered sources"
        );
        merge::merge_by_timestamp(filtered, limit)
    }
}

/// Scan one source in file order, keeping entries that pass the time and
/// severity filters. The scan examines at most `limit` entries; the cap
/// counts entries examined, not entries matched, so a source whose early
/// entries fail the filter contributes fewer than `limit` matches even when
/// later matches exist.
fn filter_source(
    registry: &Registry,
    key: &str,
    start: NaiveDateTime,
    limit: usize,
    min_severity: Severity,
) -> Vec<LogEntry> {
    let Some(entries) = registry.entries(key) else {
        return Vec::new();
    };
    entries
        .iter()
        .take(limit)
        .filter(|entry| entry.ts > start && entry.severity >= min_severity)
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
