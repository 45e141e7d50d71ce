//! Single-threaded access loops
//!
//! Sequential, random and cache-line-strided sums, plus the volatile
//! accumulation that acts as a compiler-reordering control for the
//! concurrent patterns. Index generation and buffer setup happen before the
//! clock is sampled.

use std::hint::black_box;
use std::ptr;

use super::result::BenchmarkResult;
use crate::metrics::Clock;
use crate::workload::{Element, Pattern, WorkBuffer};

#[inline]
fn widen(value: Element) -> u64 {
    value as u64
}

/// Sum every element in order
pub fn sequential(buffer: &WorkBuffer, clock: &Clock) -> BenchmarkResult {
    let start = clock.now();
    let mut sum = 0u64;
    for &value in buffer.iter() {
        sum = sum.wrapping_add(widen(value));
    }
    let end = clock.now();

    BenchmarkResult::single(Pattern::Sequential, start, end, black_box(sum))
}

/// Sum `buffer[i]` for each pre-generated index
pub fn random(buffer: &WorkBuffer, indices: &[usize], clock: &Clock) -> BenchmarkResult {
    let start = clock.now();
    let mut sum = 0u64;
    for &idx in indices {
        sum = sum.wrapping_add(widen(buffer[idx]));
    }
    let end = clock.now();

    BenchmarkResult::single(Pattern::Random, start, end, black_box(sum))
}

/// Sum one element per `stride`, so each read touches a new cache line
///
/// `stride` must be non-zero.
pub fn cache_miss(buffer: &WorkBuffer, stride: usize, clock: &Clock) -> BenchmarkResult {
    let start = clock.now();
    let mut sum = 0u64;
    for &value in buffer.iter().step_by(stride.max(1)) {
        sum = sum.wrapping_add(widen(value));
    }
    let end = clock.now();

    BenchmarkResult::single(Pattern::CacheMiss, start, end, black_box(sum))
}

/// Accumulate through volatile reads and writes of a local
///
/// Every load and store of `sum` is emitted as written. Nothing here makes
/// the location safe to share between threads.
pub fn volatile(buffer: &WorkBuffer, clock: &Clock) -> BenchmarkResult {
    let mut sum = 0u64;
    let slot: *mut u64 = &mut sum;

    let start = clock.now();
    for &value in buffer.iter() {
        // SAFETY: `slot` points at a live, aligned local that nothing else aliases.
        unsafe {
            let current = ptr::read_volatile(slot);
            ptr::write_volatile(slot, current.wrapping_add(widen(value)));
        }
    }
    let end = clock.now();

    // SAFETY: same local as above, still live.
    let sum = unsafe { ptr::read_volatile(slot) };
    BenchmarkResult::single(Pattern::Volatile, start, end, sum)
}
