//! wml-ingest — source loading and registry construction for wml.
//!
//! The loader turns one log file into parsed entries; the registry fans the
//! loaders out across a task set at startup and freezes the result. Queries
//! only ever read the frozen registry.

pub mod loader;
pub mod registry;

pub use loader::{load_source, LoadedSource, SkipCounts};
pub use registry::{IngestReport, Registry, SourceStats};
