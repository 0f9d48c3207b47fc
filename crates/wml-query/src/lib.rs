//! wml-query — the query engine for wml.
//!
//! A query fans per-source filter tasks out over the frozen registry, then
//! merges the filtered lists into one time-ordered, capped result.

pub mod engine;
pub mod merge;
pub mod render;

pub use engine::{LogQuery, Queryable};
pub use merge::merge_by_timestamp;
pub use render::{render, render_entry};
