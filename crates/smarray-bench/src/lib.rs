//! Benchmark profiles and utilities for the smarray container.
//!
//! Provides deterministic inputs shared by the Criterion benches:
//!
//! - [`reference_input`]: 10K pseudo-random `i64` values
//! - [`stress_input`]: ~1M values for growth-heavy runs
//! - [`prefilled`]: a `DynArray` built from a profile without extra reallocations

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use smarray::array::DynArray;
use smarray_test_utils::sample_sequence;

/// Element count of the reference profile.
pub const REFERENCE_LEN: usize = 10_000;

/// Element count of the stress profile.
pub const STRESS_LEN: usize = 1_000_000;

/// Reference profile: [`REFERENCE_LEN`] deterministic values.
pub fn reference_input(seed: u64) -> Vec<i64> {
    sample_sequence(REFERENCE_LEN, seed)
}

/// Stress profile: [`STRESS_LEN`] deterministic values.
pub fn stress_input(seed: u64) -> Vec<i64> {
    sample_sequence(STRESS_LEN, seed)
}

/// Range-construct an array over `input`.
///
/// One allocation of `next_capacity(input.len())` slots.
pub fn prefilled(input: &[i64]) -> DynArray<i64> {
    DynArray::from_slice(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_input_has_expected_len() {
        assert_eq!(reference_input(42).len(), REFERENCE_LEN);
    }

    #[test]
    fn prefilled_matches_input() {
        let input = reference_input(1);
        let array = prefilled(&input);
        assert_eq!(array.as_slice(), input.as_slice());
        assert_eq!(array.capacity(), REFERENCE_LEN + REFERENCE_LEN / 2 + 3);
    }
}
