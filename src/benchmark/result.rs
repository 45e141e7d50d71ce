//! Benchmark result summary

use std::time::Duration;

use hdrhistogram::Histogram;

use super::task::TaskResult;
use crate::metrics::Timestamp;
use crate::workload::Pattern;

/// Per-task span distribution (microseconds)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskSpread {
    pub tasks: usize,
    pub min_us: u64,
    pub p50_us: u64,
    pub max_us: u64,
}

/// Outcome of one benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub pattern: Pattern,
    pub interval_start: Timestamp,
    pub interval_end: Timestamp,
    /// Value read from the accumulator (or the local sum for single-threaded patterns)
    pub sum: u64,
    /// What a fully synchronized run would have produced
    pub expected: u64,
    /// Worker tasks that produced this result (empty for single-threaded patterns)
    pub tasks: Vec<TaskResult>,
}

impl BenchmarkResult {
    /// Result of a single-threaded pass
    pub fn single(pattern: Pattern, start: Timestamp, end: Timestamp, sum: u64) -> Self {
        Self {
            pattern,
            interval_start: start,
            interval_end: end,
            sum,
            expected: sum,
            tasks: Vec::new(),
        }
    }

    /// Wall-clock span of the run
    pub fn elapsed(&self) -> Duration {
        self.interval_end.duration_since(self.interval_start)
    }

    /// Wall-clock span in milliseconds
    pub fn latency_ms(&self) -> f64 {
        (self.interval_end.as_micros_f64() - self.interval_start.as_micros_f64()).max(0.0)
            / 1000.0
    }

    /// Updates lost to unsynchronized increments
    pub fn lost_updates(&self) -> u64 {
        self.expected.saturating_sub(self.sum)
    }

    /// Distribution of per-task spans, if the run had worker tasks
    pub fn task_spread(&self) -> Option<TaskSpread> {
        if self.tasks.is_empty() {
            return None;
        }

        let mut histogram = Histogram::<u64>::new_with_bounds(1, 3_600_000_000, 3).ok()?;
        for task in &self.tasks {
            histogram.saturating_record((task.elapsed().as_micros() as u64).max(1));
        }

        Some(TaskSpread {
            tasks: self.tasks.len(),
            min_us: histogram.min(),
            p50_us: histogram.value_at_percentile(50.0),
            max_us: histogram.max(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(task_id: usize, start_us: u64, end_us: u64) -> TaskResult {
        TaskResult {
            task_id,
            range: 0..0,
            start: Timestamp::from_micros(start_us),
            end: Timestamp::from_micros(end_us),
            local_contribution: 0,
        }
    }

    #[test]
    fn test_latency_ms() {
        let result = BenchmarkResult::single(
            Pattern::Sequential,
            Timestamp::from_micros(1_000),
            Timestamp::from_micros(3_500),
            10,
        );
        assert_eq!(result.latency_ms(), 2.5);
        assert_eq!(result.elapsed(), Duration::from_micros(2_500));
        assert_eq!(result.lost_updates(), 0);
        assert!(result.task_spread().is_none());
    }

    #[test]
    fn test_lost_updates() {
        let mut result = BenchmarkResult::single(
            Pattern::Race,
            Timestamp::default(),
            Timestamp::default(),
            900,
        );
        result.expected = 1000;
        assert_eq!(result.lost_updates(), 100);
    }

    #[test]
    fn test_task_spread() {
        let mut result = BenchmarkResult::single(
            Pattern::Atomic,
            Timestamp::from_micros(0),
            Timestamp::from_micros(400),
            0,
        );
        result.tasks = vec![task(0, 0, 100), task(1, 0, 200), task(2, 50, 450)];

        let spread = result.task_spread().unwrap();
        assert_eq!(spread.tasks, 3);
        assert_eq!(spread.min_us, 100);
        assert_eq!(spread.p50_us, 200);
        assert!(spread.max_us >= 400);
    }
}
