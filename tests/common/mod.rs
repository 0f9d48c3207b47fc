//! Shared test utilities for wml integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Builders panic on invalid input rather than returning
//! `Result`; they are for test readability, not production use.

pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
