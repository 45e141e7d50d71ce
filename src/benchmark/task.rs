//! Worker tasks for the concurrent patterns
//!
//! Each task owns its partition bounds and an explicit handle to the shared
//! accumulator. It samples the clock around its own loop only, so spawn and
//! join overhead never shows up in the reported span.

use std::ops::Range;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::accumulator::SharedAccumulator;
use crate::metrics::{Clock, Timestamp};
use crate::workload::WorkBuffer;

/// How a worker updates the shared accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Relaxed fetch-add of each element's value
    Atomic,
    /// Unsynchronized increment once per element
    Racy,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Atomic => "atomic",
            Strategy::Racy => "racy",
        }
    }
}

/// Result of one worker task, returned through its join handle
#[derive(Debug, Clone, PartialEq)]
pub struct TaskResult {
    pub task_id: usize,
    pub range: Range<usize>,
    pub start: Timestamp,
    pub end: Timestamp,
    /// What this task tried to add to the accumulator
    pub local_contribution: u64,
}

impl TaskResult {
    /// Span of this task's timed window
    pub fn elapsed(&self) -> Duration {
        self.end.duration_since(self.start)
    }
}

/// Everything a worker thread needs, moved into the thread at spawn time
pub struct WorkerTask {
    pub task_id: usize,
    pub buffer: Arc<WorkBuffer>,
    pub range: Range<usize>,
    pub accumulator: Arc<SharedAccumulator>,
    pub clock: Clock,
    /// Slept inside the timed window (zero outside of sanity checks)
    pub delay: Duration,
}

impl WorkerTask {
    /// Run the task to completion
    pub fn run(self, strategy: Strategy) -> TaskResult {
        let start = self.clock.now();

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let local_contribution = match strategy {
            Strategy::Atomic => self.atomic_add(),
            Strategy::Racy => self.racy_add(),
        };

        let end = self.clock.now();

        TaskResult {
            task_id: self.task_id,
            range: self.range,
            start,
            end,
            local_contribution,
        }
    }

    /// Relaxed fetch-add of every element in the partition
    fn atomic_add(&self) -> u64 {
        let mut contributed = 0u64;
        for &value in &self.buffer[self.range.clone()] {
            let delta = value as u64;
            self.accumulator.add_relaxed(delta);
            contributed = contributed.wrapping_add(delta);
        }
        contributed
    }

    /// One unsynchronized increment per element in the partition
    fn racy_add(&self) -> u64 {
        for _ in self.range.clone() {
            self.accumulator.racy_increment();
        }
        self.range.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(range: Range<usize>, delay: Duration) -> (WorkerTask, Arc<SharedAccumulator>) {
        let accumulator = Arc::new(SharedAccumulator::new());
        let task = WorkerTask {
            task_id: 0,
            buffer: Arc::new(WorkBuffer::filled(100, 1).unwrap()),
            range,
            accumulator: Arc::clone(&accumulator),
            clock: Clock::start(),
            delay,
        };
        (task, accumulator)
    }

    #[test]
    fn test_atomic_task() {
        let (task, acc) = task(10..60, Duration::ZERO);
        let result = task.run(Strategy::Atomic);

        assert_eq!(acc.load(), 50);
        assert_eq!(result.local_contribution, 50);
        assert_eq!(result.range, 10..60);
        assert!(result.end >= result.start);
    }

    #[test]
    fn test_racy_task_alone_is_exact() {
        let (task, acc) = task(0..100, Duration::ZERO);
        let result = task.run(Strategy::Racy);

        assert_eq!(acc.load(), 100);
        assert_eq!(result.local_contribution, 100);
    }

    #[test]
    fn test_empty_range() {
        let (task, acc) = task(40..40, Duration::ZERO);
        let result = task.run(Strategy::Atomic);

        assert_eq!(acc.load(), 0);
        assert_eq!(result.local_contribution, 0);
    }

    #[test]
    fn test_delay_is_inside_timed_window() {
        let (task, _) = task(0..10, Duration::from_millis(5));
        let result = task.run(Strategy::Atomic);

        assert!(result.elapsed() >= Duration::from_millis(5));
    }
}
