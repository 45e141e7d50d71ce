//! Shared accumulator for the concurrent patterns
//!
//! This is the ONLY mutable state shared between worker threads. How it is
//! updated is the experimental variable: `add_relaxed` never loses an
//! update, `racy_increment` may.

use std::sync::atomic::{AtomicU64, Ordering};

/// Single integer location contended by every worker of one run
///
/// Created fresh (zero) per run and handed to each worker explicitly.
#[derive(Debug, Default)]
pub struct SharedAccumulator {
    value: AtomicU64,
}

impl SharedAccumulator {
    /// Create accumulator initialized to zero
    pub fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    /// Indivisible add with no ordering beyond the add itself
    #[inline]
    pub fn add_relaxed(&self, delta: u64) {
        self.value.fetch_add(delta, Ordering::Relaxed);
    }

    /// Unsynchronized increment: a plain load followed by a plain store
    ///
    /// Another worker's store can land between the two, in which case one of
    /// the increments is lost. Both halves are relaxed atomics, so the lost
    /// update is observable without the access itself being undefined.
    #[inline]
    pub fn racy_increment(&self) {
        let current = self.value.load(Ordering::Relaxed);
        self.value.store(current.wrapping_add(1), Ordering::Relaxed);
    }

    /// Read the accumulated value (after all workers have joined)
    pub fn load(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }

    /// Reset to zero before reuse
    pub fn reset(&self) {
        self.value.store(0, Ordering::SeqCst);
    }
}
