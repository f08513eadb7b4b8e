//! Owned contiguous element storage.
//!
//! A [`Buffer`] is a fixed-length boxed slice. Its length *is* the owning
//! array's capacity: it never grows or shrinks in place. Growing an array
//! means allocating a fresh buffer, moving the live prefix across and
//! dropping the old one.

/// A single contiguous block of `capacity` initialised slots.
///
/// Every slot always holds a valid `T`. Slots are default-initialised at
/// allocation and afterwards hold whatever was last written, so the spare
/// region past an array's live prefix contains defaults or stale values.
/// A zero-capacity buffer owns no allocation.
pub struct Buffer<T> {
    /// Backing storage. Length fixed at allocation.
    slots: Box<[T]>,
}

impl<T> Buffer<T> {
    /// A buffer with no slots and no allocation.
    pub fn empty() -> Self {
        Self {
            slots: Vec::new().into_boxed_slice(),
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// All slots, live or not.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// All slots, live or not, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

impl<T: Default> Buffer<T> {
    /// Allocate `capacity` default-initialised slots.
    ///
    /// `capacity == 0` yields [`Buffer::empty`].
    pub fn allocate(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::empty();
        }
        Self {
            slots: (0..capacity).map(|_| T::default()).collect(),
        }
    }

    /// Move `src` into the front of this buffer, leaving defaults behind.
    ///
    /// # Panics
    ///
    /// Panics if `src` is longer than this buffer.
    pub fn relocate_from(&mut self, src: &mut [T]) {
        self.relocate_at(0, src);
    }

    /// Move `src` into this buffer starting at slot `at`, leaving defaults
    /// behind in `src`.
    ///
    /// # Panics
    ///
    /// Panics if `at + src.len()` exceeds the capacity.
    pub fn relocate_at(&mut self, at: usize, src: &mut [T]) {
        let end = at + src.len();
        for (dst, slot) in self.slots[at..end].iter_mut().zip(src) {
            *dst = std::mem::take(slot);
        }
    }
}

impl<T: Clone> Buffer<T> {
    /// Clone `src` into the front of this buffer.
    ///
    /// # Panics
    ///
    /// Panics if `src` is longer than this buffer.
    pub fn copy_from(&mut self, src: &[T]) {
        self.slots[..src.len()].clone_from_slice(src);
    }

    /// Overwrite the slots in `[start, end)` with clones of `value`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn fill(&mut self, start: usize, end: usize, value: &T) {
        for slot in &mut self.slots[start..end] {
            slot.clone_from(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_owns_nothing() {
        let buf: Buffer<u64> = Buffer::empty();
        assert_eq!(buf.capacity(), 0);
        assert!(buf.as_slice().is_empty());
    }

    #[test]
    fn allocate_zero_is_empty() {
        let buf: Buffer<u64> = Buffer::allocate(0);
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn allocate_default_initialises_every_slot() {
        let buf: Buffer<String> = Buffer::allocate(4);
        assert_eq!(buf.capacity(), 4);
        assert!(buf.as_slice().iter().all(String::is_empty));
    }

    #[test]
    fn relocate_moves_and_leaves_defaults() {
        let mut src = vec!["a".to_string(), "b".to_string()];
        let mut dst: Buffer<String> = Buffer::allocate(3);
        dst.relocate_from(&mut src);
        assert_eq!(dst.as_slice(), ["a", "b", ""]);
        assert!(src.iter().all(String::is_empty));
    }

    #[test]
    fn relocate_at_offsets_destination() {
        let mut src = vec![5, 6];
        let mut dst: Buffer<i32> = Buffer::allocate(4);
        dst.relocate_at(1, &mut src);
        assert_eq!(dst.as_slice(), [0, 5, 6, 0]);
    }

    #[test]
    fn copy_from_leaves_source_intact() {
        let src = [1, 2];
        let mut dst: Buffer<i32> = Buffer::allocate(4);
        dst.copy_from(&src);
        assert_eq!(dst.as_slice(), [1, 2, 0, 0]);
        assert_eq!(src, [1, 2]);
    }

    #[test]
    fn fill_covers_half_open_range() {
        let mut buf: Buffer<i32> = Buffer::allocate(5);
        buf.fill(1, 4, &7);
        assert_eq!(buf.as_slice(), [0, 7, 7, 7, 0]);
    }

    #[test]
    #[should_panic]
    fn relocate_longer_source_panics() {
        let mut src = vec![1, 2, 3];
        let mut dst: Buffer<i32> = Buffer::allocate(2);
        dst.relocate_from(&mut src);
    }
}
