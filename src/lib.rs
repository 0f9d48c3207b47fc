//! wml — Weave My Logs
//!
//! Time-ordered queries across multiple log files. This crate re-exports the
//! workspace layers so integration tests and the CLI can import everything
//! from one place.
//!
//! # Architecture
//!
//! ```text
//! log files ──► Loader ──► Registry ──► Query engine ──► rendered output
//! ```
//!
//! The registry is built exactly once at startup by concurrent loader tasks
//! and never mutated again. A query fans per-source filter tasks out over
//! the registry, then merges the filtered lists sequentially into one
//! time-ordered, capped result.

pub use wml_core::config::Config;
pub use wml_core::error::{ConstructionError, ParseError, SourceError};
pub use wml_core::parse::{parse_line, parse_timestamp, TIMESTAMP_FORMAT};
pub use wml_core::{LogEntry, Severity};
pub use wml_ingest::{load_source, IngestReport, LoadedSource, Registry, SkipCounts, SourceStats};
pub use wml_query::{merge_by_timestamp, render, render_entry, LogQuery, Queryable};
