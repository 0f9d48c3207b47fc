//! wml-core — Weave My Logs core library.
//!
//! This crate holds everything the ingestion and query layers share: the
//! parsed entry types, the line parser for the bracketed log format, the
//! error taxonomy, and the configuration loader.
//!
//! # Architecture
//!
//! ```text
//! log files ──► Loader ──► Registry ──► Query engine ──► rendered output
//!                 │
//!                 └──► per-line parser (this crate)
//! ```
//!
//! The registry is built exactly once at startup and never mutated again;
//! queries only ever read from it.

pub mod config;
pub mod error;
pub mod parse;
pub mod types;

pub use types::{LogEntry, Severity};
