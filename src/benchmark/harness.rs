//! Concurrent benchmark harness
//!
//! Spawns one worker thread per partition, joins all of them, and folds the
//! per-task windows into a single `(min start, max end)` interval. The join
//! is the only synchronization point: no locks, no timeouts, no cancellation.
//! A worker that never finishes hangs the whole run.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::accumulator::SharedAccumulator;
use super::partition::{dropped, partition};
use super::result::BenchmarkResult;
use super::task::{Strategy, TaskResult, WorkerTask};
use crate::config::RemainderPolicy;
use crate::metrics::{Clock, Timestamp};
use crate::utils::{BenchmarkError, Result};
use crate::workload::{Pattern, WorkBuffer};

/// Runs one concurrent pattern across `thread_count` workers
#[derive(Debug, Clone)]
pub struct ConcurrentHarness {
    thread_count: usize,
    remainder: RemainderPolicy,
    task_delay: Duration,
    clock: Clock,
}

impl ConcurrentHarness {
    /// Create harness; `thread_count` must be at least 1
    pub fn new(thread_count: usize, clock: Clock) -> Self {
        Self {
            thread_count,
            remainder: RemainderPolicy::Drop,
            task_delay: Duration::ZERO,
            clock,
        }
    }

    /// Set how the `len % thread_count` tail is handled
    pub fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    /// Set the artificial delay each worker sleeps inside its timed window
    pub fn with_task_delay(mut self, delay: Duration) -> Self {
        self.task_delay = delay;
        self
    }

    /// Run `strategy` over `buffer` and aggregate the result
    pub fn run(&self, buffer: Arc<WorkBuffer>, strategy: Strategy) -> Result<BenchmarkResult> {
        if self.thread_count == 0 {
            return Err(BenchmarkError::Config(
                "Need at least 1 worker thread".to_string(),
            ));
        }

        let ranges = partition(buffer.len(), self.thread_count, self.remainder);
        let tail = dropped(buffer.len(), self.thread_count, self.remainder);
        if tail > 0 {
            warn!(
                "{} trailing elements not assigned to any worker ({} elements / {} threads)",
                tail,
                buffer.len(),
                self.thread_count
            );
        }
        debug!("Partitions: {:?}", ranges);

        // Fresh per run, injected into every worker
        let accumulator = Arc::new(SharedAccumulator::new());

        let mut handles: Vec<thread::JoinHandle<TaskResult>> =
            Vec::with_capacity(self.thread_count);

        for (task_id, range) in ranges.into_iter().enumerate() {
            let task = WorkerTask {
                task_id,
                buffer: Arc::clone(&buffer),
                range,
                accumulator: Arc::clone(&accumulator),
                clock: self.clock,
                delay: self.task_delay,
            };

            let handle = thread::Builder::new()
                .name(format!("{}-worker-{}", strategy.as_str(), task_id))
                .spawn(move || task.run(strategy))
                .map_err(|e| {
                    BenchmarkError::Worker(format!("Failed to spawn worker {}: {}", task_id, e))
                })?;

            handles.push(handle);
        }

        // Wait for every worker; a partial set is never aggregated
        let mut tasks = Vec::with_capacity(handles.len());
        for (task_id, handle) in handles.into_iter().enumerate() {
            let result = handle
                .join()
                .map_err(|_| BenchmarkError::Worker(format!("Worker {} panicked", task_id)))?;
            debug!(
                "Worker {} joined: range={:?} elapsed={:?}",
                result.task_id,
                result.range,
                result.elapsed()
            );
            tasks.push(result);
        }

        let (interval_start, interval_end) = aggregate_interval(&tasks);
        let expected = tasks
            .iter()
            .fold(0u64, |acc, t| acc.wrapping_add(t.local_contribution));

        let pattern = match strategy {
            Strategy::Atomic => Pattern::Atomic,
            Strategy::Racy => Pattern::Race,
        };

        Ok(BenchmarkResult {
            pattern,
            interval_start,
            interval_end,
            sum: accumulator.load(),
            expected,
            tasks,
        })
    }
}

/// Earliest start and latest end across all tasks
pub fn aggregate_interval(tasks: &[TaskResult]) -> (Timestamp, Timestamp) {
    let start = tasks.iter().map(|t| t.start).min().unwrap_or_default();
    let end = tasks.iter().map(|t| t.end).max().unwrap_or(start);
    (start, end.max(start))
}
