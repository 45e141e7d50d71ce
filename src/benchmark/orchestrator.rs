//! Benchmark orchestrator
//!
//! Runs the configured patterns in order, owns the session clock and the
//! per-pattern buffers, and exports results.

use std::path::Path;
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::access;
use super::harness::ConcurrentHarness;
use super::result::BenchmarkResult;
use super::task::Strategy;
use crate::config::BenchmarkConfig;
use crate::metrics::{BenchmarkResults, Clock, MetricsReporter};
use crate::utils::{BenchmarkError, Result};
use crate::workload::{random_indices, Element, Pattern, WorkBuffer};

/// Fill value of every benchmark buffer
const FILL_VALUE: Element = 1;

/// Benchmark orchestrator
pub struct Orchestrator {
    config: BenchmarkConfig,
    clock: Clock,
}

impl Orchestrator {
    /// Create new orchestrator
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate().map_err(BenchmarkError::Config)?;

        Ok(Self {
            config,
            clock: Clock::start(),
        })
    }

    /// Configuration this orchestrator runs with
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Harness for the concurrent patterns
    fn harness(&self) -> ConcurrentHarness {
        ConcurrentHarness::new(self.config.thread_count, self.clock)
            .with_remainder(self.config.remainder)
            .with_task_delay(self.config.task_delay)
    }

    /// Run a single pattern
    ///
    /// The pattern's buffer is allocated here and dropped before returning.
    pub fn run_pattern(&self, pattern: Pattern) -> Result<BenchmarkResult> {
        let array_size = self.config.array_size;

        let result = match pattern {
            Pattern::Sequential => {
                let buffer = WorkBuffer::filled(array_size, FILL_VALUE)?;
                access::sequential(&buffer, &self.clock)
            }
            Pattern::Random => {
                let buffer = WorkBuffer::filled(array_size, FILL_VALUE)?;
                let indices = random_indices(array_size, buffer.len(), self.config.seed)?;
                access::random(&buffer, &indices, &self.clock)
            }
            Pattern::CacheMiss => {
                let buffer = WorkBuffer::filled(self.config.cache_miss_len(), FILL_VALUE)?;
                debug!(
                    "Cache-miss buffer: {} elements, stride {}",
                    buffer.len(),
                    self.config.stride()
                );
                access::cache_miss(&buffer, self.config.stride(), &self.clock)
            }
            Pattern::Atomic => {
                let buffer = Arc::new(WorkBuffer::filled(array_size, FILL_VALUE)?);
                self.harness().run(buffer, Strategy::Atomic)?
            }
            Pattern::Race => {
                let buffer = Arc::new(WorkBuffer::filled(array_size, FILL_VALUE)?);
                self.harness().run(buffer, Strategy::Racy)?
            }
            Pattern::Volatile => {
                let buffer = WorkBuffer::filled(array_size, FILL_VALUE)?;
                access::volatile(&buffer, &self.clock)
            }
        };

        debug!(
            "{}: sum={} elapsed={:?}",
            pattern.as_str(),
            result.sum,
            result.elapsed()
        );

        Ok(result)
    }

    /// Run all configured patterns, rendering each result as it completes
    pub fn run_all(&self, reporter: &mut MetricsReporter) -> Result<Vec<BenchmarkResult>> {
        let patterns = &self.config.patterns;
        let pb = if self.config.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(patterns.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb
        };

        let mut results = Vec::with_capacity(patterns.len());

        for &pattern in patterns {
            info!("Running pattern: {}", pattern);
            pb.set_message(pattern.as_str());

            let result = self.run_pattern(pattern)?;
            pb.suspend(|| reporter.report(&result));
            pb.inc(1);

            results.push(result);
        }

        pb.finish_and_clear();
        Ok(results)
    }

    /// Export results to JSON file
    pub fn export_json(&self, results: &[BenchmarkResult], path: &Path) -> Result<()> {
        BenchmarkResults::new(&self.config.summary(), results).write_json(path)?;
        Ok(())
    }

    /// Export results to CSV file
    pub fn export_csv(&self, results: &[BenchmarkResult], path: &Path) -> Result<()> {
        BenchmarkResults::new(&self.config.summary(), results).write_csv(path)?;
        Ok(())
    }
}
