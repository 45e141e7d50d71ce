//! Work partitioning
//!
//! Splits `[0, len)` into one contiguous range per worker. With
//! `RemainderPolicy::Drop` every range has `len / workers` elements and the
//! `len % workers` tail is never assigned.

use std::ops::Range;

use crate::config::RemainderPolicy;

/// Split `len` indices across `workers` contiguous, disjoint ranges
///
/// `workers` must be at least 1; the config layer enforces it.
pub fn partition(len: usize, workers: usize, policy: RemainderPolicy) -> Vec<Range<usize>> {
    debug_assert!(workers >= 1, "partition requires at least one worker");
    let workers = workers.max(1);
    let base = len / workers;
    let extra = match policy {
        RemainderPolicy::Drop => 0,
        RemainderPolicy::Spread => len % workers,
    };

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for i in 0..workers {
        let size = base + usize::from(i < extra);
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}

/// Number of indices covered by `ranges`
pub fn covered(ranges: &[Range<usize>]) -> usize {
    ranges.iter().map(|r| r.len()).sum()
}

/// Indices assigned to no range under the given policy
pub fn dropped(len: usize, workers: usize, policy: RemainderPolicy) -> usize {
    match policy {
        RemainderPolicy::Drop => len % workers.max(1),
        RemainderPolicy::Spread => 0,
    }
}
