//! Timing and reporting
//!
//! This module provides:
//! - Clock/Timestamp: monotonic microsecond sampling shared across workers
//! - MetricsReporter: text/JSON/CSV rendering of results
//! - BenchmarkResults: JSON/CSV export

pub mod reporter;
pub mod timer;

pub use reporter::{format_count, BenchmarkResults, MetricsReporter};
pub use timer::{Clock, Timestamp};
