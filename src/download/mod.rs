//! Download module for the harvesting run.
//!
//! This module provides:
//! - The sequential page → link → file pipeline
//! - Per-run statistics

pub mod pipeline;
pub mod state;

pub use pipeline::{LinkOutcome, Pipeline};
pub use state::{RunReport, RunStats};
