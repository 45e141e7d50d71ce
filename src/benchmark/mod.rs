//! Benchmark orchestration and workers
//!
//! This module provides the benchmark execution system:
//! - SharedAccumulator: the one location contended by concurrent workers
//! - ConcurrentHarness: partitions work, spawns and joins workers
//! - access: single-threaded sequential/random/cache-miss/volatile loops
//! - Orchestrator: runs the configured patterns and collects results

pub mod access;
pub mod accumulator;
pub mod harness;
pub mod orchestrator;
pub mod partition;
pub mod result;
pub mod task;

pub use accumulator::SharedAccumulator;
pub use harness::{aggregate_interval, ConcurrentHarness};
pub use orchestrator::Orchestrator;
pub use partition::{covered, partition};
pub use result::{BenchmarkResult, TaskSpread};
pub use task::{Strategy, TaskResult, WorkerTask};
