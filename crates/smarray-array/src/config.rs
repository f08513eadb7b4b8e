//! Capacity growth configuration.

/// Growth policy for [`DynArray`](crate::DynArray) reallocations.
///
/// Every reallocation that is not an exact [`reserve`](crate::DynArray::reserve)
/// sizes the new buffer as `size + size / 2 + extra`, where `size` is the
/// element count *after* the operation that triggered it. The constant
/// term keeps tiny arrays from reallocating on every push; the half term
/// gives ~1.5x amortised growth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    /// Constant number of spare slots added on every reallocation.
    ///
    /// Default: 3.
    pub extra: usize,
}

impl GrowthPolicy {
    /// Default constant term of the growth function.
    pub const DEFAULT_EXTRA: usize = 3;

    /// Create a policy with the given constant term.
    pub const fn new(extra: usize) -> Self {
        Self { extra }
    }

    /// Capacity to allocate for an array about to hold `size` elements.
    ///
    /// Saturates at `usize::MAX` instead of wrapping.
    pub const fn next_capacity(&self, size: usize) -> usize {
        size.saturating_add(size / 2).saturating_add(self.extra)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXTRA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_extra_is_three() {
        assert_eq!(GrowthPolicy::default().extra, 3);
    }

    #[test]
    fn growth_is_size_plus_half_plus_extra() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(0), 3);
        assert_eq!(policy.next_capacity(1), 4);
        assert_eq!(policy.next_capacity(4), 9);
        assert_eq!(policy.next_capacity(10), 18);
    }

    #[test]
    fn custom_extra() {
        assert_eq!(GrowthPolicy::new(0).next_capacity(8), 12);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        assert_eq!(GrowthPolicy::default().next_capacity(usize::MAX), usize::MAX);
    }
}
