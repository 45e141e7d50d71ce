//! Wall-clock sampling
//!
//! A `Clock` pins a monotonic origin once; every `Timestamp` taken from the
//! same clock is comparable, including across worker threads.

use std::fmt;
use std::time::{Duration, Instant};

/// Point in time, measured as an offset from the owning clock's origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(Duration);

impl Timestamp {
    /// Build a timestamp from an offset in microseconds
    pub fn from_micros(us: u64) -> Self {
        Self(Duration::from_micros(us))
    }

    /// Offset from the clock origin in microseconds (sub-microsecond precision kept)
    #[inline]
    pub fn as_micros_f64(&self) -> f64 {
        self.0.as_nanos() as f64 / 1_000.0
    }

    /// Time elapsed since `earlier`, zero if `earlier` is later than `self`
    #[inline]
    pub fn duration_since(&self, earlier: Timestamp) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}us", self.as_micros_f64())
    }
}

/// Monotonic clock shared by one benchmark session
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    /// Start a new clock; its origin is "now"
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Sample the clock
    #[inline]
    pub fn now(&self) -> Timestamp {
        Timestamp(self.origin.elapsed())
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_now_is_nondecreasing() {
        let clock = Clock::start();
        let mut last = clock.now();
        for _ in 0..1000 {
            let ts = clock.now();
            assert!(ts >= last);
            last = ts;
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let clock = Clock::start();
        let before = clock.now();
        let inside = thread::spawn(move || clock.now()).join().unwrap();
        let after = clock.now();

        assert!(inside >= before);
        assert!(after >= inside);
    }

    #[test]
    fn test_duration_since_saturates() {
        let early = Timestamp::from_micros(10);
        let late = Timestamp::from_micros(250);

        assert_eq!(late.duration_since(early), Duration::from_micros(240));
        assert_eq!(early.duration_since(late), Duration::ZERO);
        assert_eq!(late.as_micros_f64(), 250.0);
    }
}
