//! Command-line argument parsing
//!
//! Flags keep the short forms of the classic harness (`-t`, `-c`, `-a`);
//! everything else is long-form only.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::workload::{Pattern, ELEMENT_SIZE};

/// Default number of worker threads
pub const DEFAULT_THREAD_COUNT: usize = 2;
/// Default cache-line size in bytes
pub const DEFAULT_CACHE_LINE_SIZE: usize = 64;
/// Default logical array size
pub const DEFAULT_ARRAY_SIZE: usize = 1000;

/// Memory-access and concurrent-increment microbenchmarks
#[derive(Parser, Debug, Clone)]
#[command(name = "memaccess-bench")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    // ===== Benchmark Parameters =====
    /// Number of worker threads for the atomic and race patterns
    #[arg(short = 't', long = "threads", default_value_t = DEFAULT_THREAD_COUNT)]
    pub threads: usize,

    /// Cache-line size in bytes (sets the cache-miss stride)
    #[arg(short = 'c', long = "cache-line", default_value_t = DEFAULT_CACHE_LINE_SIZE)]
    pub cache_line_size: usize,

    /// Logical array size
    #[arg(short = 'a', long = "array-size", default_value_t = DEFAULT_ARRAY_SIZE)]
    pub array_size: usize,

    // ===== Pattern Selection =====
    /// Pattern(s) to run: sequential, random, cache-miss, atomic, race, volatile
    #[arg(long = "tests", value_delimiter = ',')]
    pub tests: Option<Vec<String>>,

    /// What to do with the elements left over when threads don't divide the array
    #[arg(long = "remainder", value_enum, default_value_t = RemainderPolicy::Drop)]
    pub remainder: RemainderPolicy,

    /// Seed for the random pattern (0 = random seed)
    #[arg(long = "seed", default_value_t = 0)]
    pub seed: u64,

    /// Artificial delay slept inside each worker's timed window, in microseconds
    #[arg(long = "task-delay-us", default_value_t = 0, hide = true)]
    pub task_delay_us: u64,

    // ===== Output Options =====
    /// Output file path (JSON)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format on stdout
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Output CSV file
    #[arg(long = "csv")]
    pub csv_output: Option<PathBuf>,

    /// Quiet mode (results only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose output (per-task spans, debug logging)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Handling of the `array_size % threads` tail
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainderPolicy {
    /// Tail elements belong to no worker and are never summed
    #[default]
    Drop,
    /// Leading workers take one extra element each
    Spread,
}

impl RemainderPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemainderPolicy::Drop => "drop",
            RemainderPolicy::Spread => "spread",
        }
    }
}

/// Output format for results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.threads == 0 {
            return Err("--threads must be at least 1".to_string());
        }

        // A stride of zero would never advance through the buffer
        if self.cache_line_size < ELEMENT_SIZE {
            return Err(format!(
                "--cache-line must be at least {} bytes (one element)",
                ELEMENT_SIZE
            ));
        }

        if self.quiet && self.verbose {
            return Err("--quiet and --verbose are mutually exclusive".to_string());
        }

        if let Some(ref tests) = self.tests {
            if let Some(unknown) = tests.iter().find(|t| Pattern::parse(t).is_none()) {
                return Err(format!("Unknown test: {}", unknown));
            }
        }

        Ok(())
    }

    /// Patterns to run, in the order given (all patterns if none given)
    pub fn patterns(&self) -> Vec<Pattern> {
        match self.tests {
            Some(ref tests) => tests.iter().filter_map(|t| Pattern::parse(t)).collect(),
            None => Pattern::ALL.to_vec(),
        }
    }
}
