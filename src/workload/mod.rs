//! Workload definitions
//!
//! This module provides:
//! - Pattern: the benchmark catalogue and its run order
//! - WorkBuffer: fallible allocation of the integer buffers the patterns read

pub mod buffer;
pub mod pattern;

pub use buffer::{random_indices, Element, WorkBuffer, ELEMENT_SIZE};
pub use pattern::Pattern;
