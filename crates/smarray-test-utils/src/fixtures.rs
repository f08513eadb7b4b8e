//! Reusable container test fixtures.
//!
//! - [`Counted`]: an element that records how often its value was cloned.
//! - [`ReallocCounter`]: counts capacity changes across a run of operations.
//! - [`sample_sequence`]: deterministic pseudo-random element values.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// An element that counts clones of its value.
///
/// Every clone shares the counter of the value it was cloned from, so the
/// count covers the whole lineage of one original value. This tells
/// element-wise assignment (a clone) apart from relocation (a move).
/// Equality compares values only.
#[derive(Default)]
pub struct Counted {
    value: i64,
    clones: Arc<AtomicUsize>,
}

impl Counted {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            clones: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// How many times this value's lineage has been cloned.
    pub fn clones(&self) -> usize {
        self.clones.load(Ordering::Relaxed)
    }
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        self.clones.fetch_add(1, Ordering::Relaxed);
        Self {
            value: self.value,
            clones: Arc::clone(&self.clones),
        }
    }
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Counted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counted({}, clones={})", self.value, self.clones())
    }
}

/// Counts how often an observed capacity changes.
///
/// Feed it the container's capacity after every operation; each observed
/// change (including the first allocation) counts as one reallocation.
#[derive(Debug, Default)]
pub struct ReallocCounter {
    last: usize,
    reallocations: usize,
}

impl ReallocCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, capacity: usize) {
        if capacity != self.last {
            self.reallocations += 1;
            self.last = capacity;
        }
    }

    pub fn reallocations(&self) -> usize {
        self.reallocations
    }
}

/// Generate `len` deterministic values from `seed`.
///
/// A linear congruential sequence: cheap, repeatable across platforms and
/// good enough to avoid sorted or constant inputs.
pub fn sample_sequence(len: usize, seed: u64) -> Vec<i64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as i64
        })
        .collect()
}
