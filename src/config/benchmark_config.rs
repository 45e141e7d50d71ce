//! Benchmark configuration derived from CLI arguments

use super::cli::{
    CliArgs, OutputFormat, RemainderPolicy, DEFAULT_ARRAY_SIZE, DEFAULT_CACHE_LINE_SIZE,
    DEFAULT_THREAD_COUNT,
};
use crate::workload::{Pattern, ELEMENT_SIZE};
use std::path::PathBuf;
use std::time::Duration;

/// Complete benchmark configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    // Sizing
    pub array_size: usize,
    pub cache_line_size: usize,
    pub thread_count: usize,

    // Workload
    pub patterns: Vec<Pattern>,
    pub remainder: RemainderPolicy,
    pub seed: u64,
    pub task_delay: Duration,

    // Output
    pub output_path: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub csv_output: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
}

impl BenchmarkConfig {
    /// Configuration with the given sizing and defaults for everything else
    pub fn new(array_size: usize, cache_line_size: usize, thread_count: usize) -> Self {
        Self {
            array_size,
            cache_line_size,
            thread_count,
            patterns: Pattern::ALL.to_vec(),
            remainder: RemainderPolicy::Drop,
            seed: 0,
            task_delay: Duration::ZERO,
            output_path: None,
            output_format: OutputFormat::Text,
            csv_output: None,
            quiet: true,
            verbose: false,
        }
    }

    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, String> {
        // Validate first
        args.validate()?;

        Ok(Self {
            array_size: args.array_size,
            cache_line_size: args.cache_line_size,
            thread_count: args.threads,

            patterns: args.patterns(),
            remainder: args.remainder,
            seed: args.seed,
            task_delay: Duration::from_micros(args.task_delay_us),

            output_path: args.output.clone(),
            output_format: args.output_format,
            csv_output: args.csv_output.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }

    /// Check sizing invariants for configurations built without the CLI
    pub fn validate(&self) -> Result<(), String> {
        if self.thread_count == 0 {
            return Err("thread count must be at least 1".to_string());
        }
        if self.cache_line_size < ELEMENT_SIZE {
            return Err(format!(
                "cache line size must be at least {} bytes",
                ELEMENT_SIZE
            ));
        }
        Ok(())
    }

    /// Elements per cache line
    pub fn stride(&self) -> usize {
        self.cache_line_size / ELEMENT_SIZE
    }

    /// Buffer length of the cache-miss pattern
    pub fn cache_miss_len(&self) -> usize {
        self.array_size.saturating_mul(self.stride())
    }

    /// One-line summary used in banners and exports
    pub fn summary(&self) -> String {
        format!(
            "array_size={}, cache_line_size={}, threads={}, remainder={}",
            self.array_size,
            self.cache_line_size,
            self.thread_count,
            self.remainder.as_str()
        )
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_ARRAY_SIZE,
            DEFAULT_CACHE_LINE_SIZE,
            DEFAULT_THREAD_COUNT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli() {
        let args = CliArgs::parse_from(["test", "-t", "4", "--task-delay-us", "250", "-q"]);
        let config = BenchmarkConfig::from_cli(&args).unwrap();
        assert_eq!(config.thread_count, 4);
        assert_eq!(config.task_delay, Duration::from_micros(250));
        assert!(config.quiet);
    }

    #[test]
    fn test_from_cli_rejects_invalid() {
        let args = CliArgs::parse_from(["test", "-t", "0"]);
        assert!(BenchmarkConfig::from_cli(&args).is_err());
    }

    #[test]
    fn test_stride_and_cache_miss_len() {
        let config = BenchmarkConfig::new(8, 64, 2);
        assert_eq!(config.stride(), 16);
        assert_eq!(config.cache_miss_len(), 128);
    }

    #[test]
    fn test_validate() {
        assert!(BenchmarkConfig::new(10, 64, 1).validate().is_ok());
        assert!(BenchmarkConfig::new(10, 64, 0).validate().is_err());
        assert!(BenchmarkConfig::new(10, 3, 1).validate().is_err());
    }

    #[test]
    fn test_default() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.array_size, 1000);
        assert_eq!(config.cache_line_size, 64);
        assert_eq!(config.thread_count, 2);
    }
}
