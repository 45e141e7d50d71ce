//! memaccess-bench library
//!
//! Microbenchmarks for memory-access patterns (sequential, random,
//! cache-line-strided) and for atomic, racy and volatile increments under a
//! configurable thread count.

pub mod benchmark;
pub mod config;
pub mod metrics;
pub mod utils;
pub mod workload;
