//! Work buffer allocation
//!
//! Buffers are allocated fallibly so that an oversized `--array-size`
//! surfaces as `BenchmarkError::Allocation` instead of an abort inside the
//! allocator.

use std::ops::Deref;

use crate::utils::{BenchmarkError, Result};

/// Element type of every benchmark buffer (four bytes, like a C `int`)
pub type Element = i32;

/// Size of one element in bytes
pub const ELEMENT_SIZE: usize = std::mem::size_of::<Element>();

/// Owned, fully initialized, fixed-length integer buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkBuffer {
    data: Box<[Element]>,
}

impl WorkBuffer {
    /// Allocate `len` elements, each set to `value`
    pub fn filled(len: usize, value: Element) -> Result<Self> {
        let alloc_error = || BenchmarkError::Allocation {
            elements: len,
            bytes: len.saturating_mul(ELEMENT_SIZE),
        };

        let mut data: Vec<Element> = Vec::new();
        data.try_reserve_exact(len).map_err(|_| alloc_error())?;
        data.resize(len, value);

        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len() * ELEMENT_SIZE
    }
}

impl Deref for WorkBuffer {
    type Target = [Element];

    fn deref(&self) -> &[Element] {
        &self.data
    }
}

impl From<Vec<Element>> for WorkBuffer {
    fn from(data: Vec<Element>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }
}

/// Allocate `len` random indices in `[0, bound)`
///
/// `seed == 0` draws a fresh seed, like the rest of the tool.
pub fn random_indices(len: usize, bound: usize, seed: u64) -> Result<Vec<usize>> {
    let mut indices: Vec<usize> = Vec::new();
    indices
        .try_reserve_exact(len)
        .map_err(|_| BenchmarkError::Allocation {
            elements: len,
            bytes: len.saturating_mul(std::mem::size_of::<usize>()),
        })?;

    if bound == 0 {
        return Ok(indices);
    }

    let seed = if seed == 0 { fastrand::u64(..) } else { seed };
    let mut rng = fastrand::Rng::with_seed(seed);
    indices.extend((0..len).map(|_| rng.usize(0..bound)));
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled() {
        let buffer = WorkBuffer::filled(16, 1).unwrap();
        assert_eq!(buffer.len(), 16);
        assert_eq!(buffer.size_bytes(), 64);
        assert!(buffer.iter().all(|&v| v == 1));
    }

    #[test]
    fn test_filled_empty() {
        let buffer = WorkBuffer::filled(0, 7).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_allocation_failure() {
        let err = WorkBuffer::filled(usize::MAX / 2, 1).unwrap_err();
        assert!(matches!(
            err,
            BenchmarkError::Allocation { elements, .. } if elements == usize::MAX / 2
        ));
    }

    #[test]
    fn test_random_indices_in_bounds() {
        let indices = random_indices(1000, 37, 42).unwrap();
        assert_eq!(indices.len(), 1000);
        assert!(indices.iter().all(|&i| i < 37));
    }

    #[test]
    fn test_random_indices_seeded() {
        let a = random_indices(100, 1000, 7).unwrap();
        let b = random_indices(100, 1000, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_indices_empty_bound() {
        assert!(random_indices(10, 0, 1).unwrap().is_empty());
    }
}
