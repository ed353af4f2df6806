//! Shared test utilities for medfix integration tests.
//!
//! This module provides:
//! - `RowBuilder`/`CsvBuilder` for assembling sheet exports
//! - `TestHarness` with a temp directory, and `QueuedFetcher` for sync tests

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::{QueuedFetcher, TestHarness};
