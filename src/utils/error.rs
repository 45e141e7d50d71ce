//! Error types for memaccess-bench

use std::io;
use thiserror::Error;

/// Top-level application error
///
/// Every variant is fatal: the binary logs it and exits with status 1.
/// A racy under-count is an observation, not an error, and has no variant here.
#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Memory allocation error: {elements} elements ({bytes} bytes)")]
    Allocation { elements: usize, bytes: usize },

    #[error("Worker error: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, BenchmarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_message() {
        let err = BenchmarkError::Allocation {
            elements: 10,
            bytes: 40,
        };
        assert_eq!(
            err.to_string(),
            "Memory allocation error: 10 elements (40 bytes)"
        );
    }

    #[test]
    fn test_io_conversion() {
        let err: BenchmarkError = io::Error::new(io::ErrorKind::Other, "disk full").into();
        assert!(matches!(err, BenchmarkError::Io(_)));
    }
}
