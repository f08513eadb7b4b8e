//! The dynamic array.
//!
//! [`DynArray`] owns one [`Buffer`] and tracks how much of it is live:
//!
//! ```text
//!   0            size                capacity
//!   ├─────────────┼──────────────────────┤
//!   │    live     │  spare (stale/default)│
//! ```
//!
//! All growth goes through [`GrowthPolicy::next_capacity`], evaluated on
//! the element count the array will have once the current operation
//! finishes. Only [`DynArray::reserve`] allocates an exact capacity.

use std::fmt;
use std::ops::{Index, IndexMut};

use smarray_cursor::sequence::slot_index;
use smarray_cursor::{Cursor, CursorIter, RandomAccessCursor, ReverseCursor, Sequence};
use tracing::{debug, trace};

use crate::buffer::Buffer;
use crate::config::GrowthPolicy;
use crate::error::ArrayError;

/// A resizable contiguous container.
///
/// Elements live in `[0, size)` of a buffer of `capacity` slots. Slots past
/// `size` keep whatever they last held: shrinking operations (`pop_back`,
/// `clear`, `resize` down, `erase`) never destroy or reset them.
///
/// # Unchecked access
///
/// `array[i]` does not check `i` against [`size`](DynArray::size). It
/// reads the backing storage directly, so indices in `[size, capacity)`
/// return stale or default values. It panics only when `i` lies outside the
/// allocation. Use [`at`](DynArray::at) for checked access.
///
/// # Cursors
///
/// [`begin`](DynArray::begin), [`end`](DynArray::end),
/// [`rbegin`](DynArray::rbegin) and [`rend`](DynArray::rend) hand out plain
/// position handles. They are not updated by later mutations: after a
/// reallocation or a shrink a previously obtained cursor refers to whatever
/// now occupies its slot.
pub struct DynArray<T> {
    buffer: Buffer<T>,
    size: usize,
    policy: GrowthPolicy,
}

impl<T> DynArray<T> {
    /// An empty array: size 0, capacity 0, no allocation.
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// An empty array that will grow according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            buffer: Buffer::empty(),
            size: 0,
            policy,
        }
    }

    /// The growth policy used by reallocations.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of slots the current buffer holds.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Alias of [`is_empty`](DynArray::is_empty).
    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    /// Largest element count representable for `T`:
    /// `usize::MAX / size_of::<T>()`. An address-space bound, not a
    /// promise that such an allocation would succeed.
    pub fn max_size(&self) -> usize {
        usize::MAX / std::mem::size_of::<T>().max(1)
    }

    /// The live elements.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.size]
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer.as_mut_slice()[..self.size]
    }

    /// The whole backing storage, including the spare slots past `size`.
    pub fn storage(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Cursor at the first slot.
    pub fn begin(&self) -> Cursor<T> {
        Cursor::new(0)
    }

    /// Cursor one past the last live slot.
    pub fn end(&self) -> Cursor<T> {
        Cursor::from_index(self.size)
    }

    /// Reverse cursor built from [`end`](DynArray::end); reads the last
    /// live element.
    pub fn rbegin(&self) -> ReverseCursor<T> {
        ReverseCursor::new(self.end())
    }

    /// Reverse cursor built from [`begin`](DynArray::begin); sits one slot
    /// before the first element.
    pub fn rend(&self) -> ReverseCursor<T> {
        ReverseCursor::new(self.begin())
    }

    /// Walk `[first, last)` with either cursor variant.
    pub fn walk<C>(&self, first: C, last: C) -> CursorIter<'_, Self, C>
    where
        C: RandomAccessCursor<Item = T>,
    {
        CursorIter::new(self, first, last)
    }

    /// The first slot. Not checked against `size`.
    ///
    /// # Panics
    ///
    /// Panics if the array owns no buffer.
    pub fn front(&self) -> &T {
        &self.buffer.as_slice()[0]
    }

    /// The first slot, mutably. Not checked against `size`.
    ///
    /// # Panics
    ///
    /// Panics if the array owns no buffer.
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.buffer.as_mut_slice()[0]
    }

    /// The last live slot.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back(&self) -> &T {
        &self.buffer.as_slice()[self.size.wrapping_sub(1)]
    }

    /// The last live slot, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back_mut(&mut self) -> &mut T {
        let last = self.size.wrapping_sub(1);
        &mut self.buffer.as_mut_slice()[last]
    }

    /// Checked access to the live element at `index`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        if index < self.size {
            Ok(&self.buffer.as_slice()[index])
        } else {
            Err(ArrayError::OutOfRange {
                index,
                size: self.size,
            })
        }
    }

    /// Checked mutable access to the live element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        if index < self.size {
            Ok(&mut self.buffer.as_mut_slice()[index])
        } else {
            Err(ArrayError::OutOfRange {
                index,
                size: self.size,
            })
        }
    }

    /// Drop the last live element from the logical range.
    ///
    /// The slot itself is untouched and still readable through `[]`.
    /// Does nothing on an empty array.
    pub fn pop_back(&mut self) {
        if self.size > 0 {
            self.size -= 1;
        }
    }

    /// Set the size to 0, keeping the buffer and its contents.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Exchange buffers, sizes, capacities and growth policies with
    /// `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Install `fresh` as the backing buffer, releasing the old one.
    fn replace_buffer(&mut self, fresh: Buffer<T>) {
        trace!(
            old_capacity = self.buffer.capacity(),
            new_capacity = fresh.capacity(),
            size = self.size,
            "reallocated"
        );
        self.buffer = fresh;
    }

    /// A fresh array owning `buffer` with `size` live elements.
    fn adopt(buffer: Buffer<T>, size: usize, policy: GrowthPolicy) -> Self {
        let mut array = Self::with_policy(policy);
        array.replace_buffer(buffer);
        array.size = size;
        array
    }

    fn in_live_range(&self, pos: Cursor<T>, allow_end: bool) -> bool {
        let end = self.end();
        pos >= self.begin() && (pos < end || (allow_end && pos == end))
    }
}

impl<T: Clone + Default> DynArray<T> {
    /// `count` clones of `value`, in a buffer sized by the growth policy.
    ///
    /// `count == 0` still allocates the policy's minimum capacity.
    pub fn with_value(count: usize, value: T) -> Self {
        Self::with_value_in(count, value, GrowthPolicy::default())
    }

    /// `count` default values.
    pub fn with_len(count: usize) -> Self {
        Self::with_value(count, T::default())
    }

    /// Like [`with_value`](DynArray::with_value), growing by `policy`.
    pub fn with_value_in(count: usize, value: T, policy: GrowthPolicy) -> Self {
        let mut array = Self::with_policy(policy);
        array.assign(count, value);
        array
    }

    /// Copy the elements of `seq` between the endpoint cursors
    /// `[first, last)`.
    ///
    /// The element count is the cursor distance. A zero (or negative)
    /// distance yields the empty state with no allocation. Works with
    /// reverse cursors, producing the range back-to-front.
    ///
    /// # Panics
    ///
    /// Panics if the range addresses slots outside `seq`'s storage.
    pub fn from_range<S, C>(seq: &S, first: C, last: C) -> Self
    where
        S: Sequence<Item = T> + ?Sized,
        C: RandomAccessCursor<Item = T>,
    {
        Self::from_range_in(seq, first, last, GrowthPolicy::default())
    }

    /// Like [`from_range`](DynArray::from_range), growing by `policy`.
    pub fn from_range_in<S, C>(seq: &S, first: C, last: C, policy: GrowthPolicy) -> Self
    where
        S: Sequence<Item = T> + ?Sized,
        C: RandomAccessCursor<Item = T>,
    {
        let count = match usize::try_from(last.distance_from(first)) {
            Ok(count) if count > 0 => count,
            _ => return Self::with_policy(policy),
        };
        let mut buffer: Buffer<T> = Buffer::allocate(policy.next_capacity(count));
        for (slot, item) in buffer
            .as_mut_slice()
            .iter_mut()
            .zip(CursorIter::new(seq, first, last))
        {
            slot.clone_from(item);
        }
        Self::adopt(buffer, count, policy)
    }

    /// Copy every element of `items`.
    pub fn from_slice(items: &[T]) -> Self {
        Self::from_range(items, items.begin_cursor(), items.end_cursor())
    }

    fn from_vec(mut items: Vec<T>, policy: GrowthPolicy) -> Self {
        if items.is_empty() {
            return Self::with_policy(policy);
        }
        let mut buffer: Buffer<T> = Buffer::allocate(policy.next_capacity(items.len()));
        buffer.relocate_from(&mut items);
        Self::adopt(buffer, items.len(), policy)
    }

    /// Append `value`.
    ///
    /// With spare capacity this writes the next slot. Otherwise the array
    /// reallocates to `next_capacity(size + 1)`, moves the live elements
    /// across and then writes. The first push into an empty array always
    /// takes the reallocating path.
    pub fn push_back(&mut self, value: T) {
        if self.size < self.capacity() {
            self.buffer.as_mut_slice()[self.size] = value;
            self.size += 1;
            return;
        }
        let new_size = self.size + 1;
        let mut fresh: Buffer<T> = Buffer::allocate(self.policy.next_capacity(new_size));
        fresh.relocate_from(&mut self.buffer.as_mut_slice()[..self.size]);
        fresh.as_mut_slice()[self.size] = value;
        self.replace_buffer(fresh);
        self.size = new_size;
    }

    /// Insert `value` before `pos` and return a cursor to it.
    ///
    /// - `pos == end()` appends exactly like [`push_back`](DynArray::push_back).
    /// - `pos` outside `[begin(), end()]` changes nothing and returns `end()`.
    /// - With spare capacity the tail is moved out to a holding buffer,
    ///   `value` is written at `pos` and the tail moved back one slot later.
    /// - Otherwise a new buffer of `next_capacity(size + 1)` receives the
    ///   prefix, `value` and the tail.
    pub fn insert(&mut self, pos: Cursor<T>, value: T) -> Cursor<T> {
        if pos == self.end() {
            self.push_back(value);
            return Cursor::from_index(self.size - 1);
        }
        if !self.in_live_range(pos, true) {
            debug!(slot = pos.slot(), size = self.size, "insert outside live range ignored");
            return self.end();
        }

        let index = slot_index(pos.slot());
        let new_size = self.size + 1;
        if self.size < self.capacity() {
            let mut holding: Buffer<T> = Buffer::allocate(self.size - index);
            holding.relocate_from(&mut self.buffer.as_mut_slice()[index..self.size]);
            self.buffer.as_mut_slice()[index] = value;
            self.buffer.relocate_at(index + 1, holding.as_mut_slice());
        } else {
            let mut fresh: Buffer<T> = Buffer::allocate(self.policy.next_capacity(new_size));
            let old = self.buffer.as_mut_slice();
            fresh.relocate_from(&mut old[..index]);
            fresh.as_mut_slice()[index] = value;
            fresh.relocate_at(index + 1, &mut old[index..self.size]);
            self.replace_buffer(fresh);
        }
        self.size = new_size;
        pos
    }

    /// Remove the element at `pos`.
    ///
    /// - `pos` outside `[begin(), end())` (including `end()` itself) changes
    ///   nothing and returns `end()`.
    /// - `pos` on the last live element shrinks the size and returns the
    ///   new `end()`.
    /// - Otherwise every later element is assigned one slot earlier and
    ///   `pos` is returned, now referring to the element that followed the
    ///   erased one.
    ///
    /// Capacity never changes. The vacated last slot keeps a copy of the
    /// element that was shifted out of it.
    pub fn erase(&mut self, pos: Cursor<T>) -> Cursor<T> {
        if !self.in_live_range(pos, false) {
            debug!(slot = pos.slot(), size = self.size, "erase outside live range ignored");
            return self.end();
        }

        let index = slot_index(pos.slot());
        if index + 1 == self.size {
            self.size -= 1;
            return self.end();
        }
        let live = &mut self.buffer.as_mut_slice()[index..self.size];
        for next in 1..live.len() {
            let (head, tail) = live.split_at_mut(next);
            head[next - 1].clone_from(&tail[0]);
        }
        self.size -= 1;
        pos
    }

    /// Ensure room for at least `new_capacity` elements.
    ///
    /// Requests above [`max_size`](DynArray::max_size) fail with
    /// [`ArrayError::Length`]. A request above the current capacity
    /// reallocates to exactly `new_capacity`; anything else is a no-op.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let max = self.max_size();
        if new_capacity > max {
            return Err(ArrayError::Length {
                requested: new_capacity,
                max,
            });
        }
        if new_capacity > self.capacity() {
            self.relocate(new_capacity);
        }
        Ok(())
    }

    /// Change the live size to `new_size`.
    ///
    /// Shrinking only lowers the size; the slots past it keep their values.
    /// Growing past the capacity reallocates to `next_capacity(new_size)`,
    /// then `[old_size, new_size)` is filled with clones of `value`.
    pub fn resize(&mut self, new_size: usize, value: T) {
        let old_size = self.size;
        if new_size <= old_size {
            self.size = new_size;
            return;
        }
        if new_size > self.capacity() {
            self.relocate(self.policy.next_capacity(new_size));
        }
        self.buffer.fill(old_size, new_size, &value);
        self.size = new_size;
    }

    /// [`resize`](DynArray::resize) with `T::default()` as the fill value.
    pub fn resize_default(&mut self, new_size: usize) {
        self.resize(new_size, T::default());
    }

    /// Replace the contents with `count` clones of `value`.
    ///
    /// Always reallocates to `next_capacity(count)`, releasing the previous
    /// buffer.
    pub fn assign(&mut self, count: usize, value: T) {
        let mut fresh: Buffer<T> = Buffer::allocate(self.policy.next_capacity(count));
        fresh.fill(0, count, &value);
        self.replace_buffer(fresh);
        self.size = count;
    }

    /// Move the live elements into a fresh buffer of `new_capacity` slots.
    fn relocate(&mut self, new_capacity: usize) {
        let mut fresh: Buffer<T> = Buffer::allocate(new_capacity);
        fresh.relocate_from(&mut self.buffer.as_mut_slice()[..self.size]);
        self.replace_buffer(fresh);
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for DynArray<T> {
    /// Copy the live elements into a fresh buffer of
    /// `next_capacity(size)` slots. The spare region is not copied.
    fn clone(&self) -> Self {
        let mut buffer: Buffer<T> = Buffer::allocate(self.policy.next_capacity(self.size));
        buffer.copy_from(self.as_slice());
        Self::adopt(buffer, self.size, self.policy)
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    /// Equal sizes and equal live elements. Capacity and spare slots are
    /// ignored.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    /// Unchecked against `size`; see the type-level docs.
    fn index(&self, index: usize) -> &T {
        &self.buffer.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buffer.as_mut_slice()[index]
    }
}

impl<T> Index<Cursor<T>> for DynArray<T> {
    type Output = T;

    fn index(&self, pos: Cursor<T>) -> &T {
        self.resolve(pos.slot())
    }
}

impl<T> IndexMut<Cursor<T>> for DynArray<T> {
    fn index_mut(&mut self, pos: Cursor<T>) -> &mut T {
        self.resolve_mut(pos.slot())
    }
}

impl<T> Index<ReverseCursor<T>> for DynArray<T> {
    type Output = T;

    fn index(&self, pos: ReverseCursor<T>) -> &T {
        self.resolve(pos.slot())
    }
}

impl<T> IndexMut<ReverseCursor<T>> for DynArray<T> {
    fn index_mut(&mut self, pos: ReverseCursor<T>) -> &mut T {
        self.resolve_mut(pos.slot())
    }
}

impl<T> Sequence for DynArray<T> {
    type Item = T;

    /// Resolves against the whole storage, not just the live range.
    fn resolve(&self, slot: isize) -> &T {
        &self.buffer.as_slice()[slot_index(slot)]
    }

    fn resolve_mut(&mut self, slot: isize) -> &mut T {
        &mut self.buffer.as_mut_slice()[slot_index(slot)]
    }

    fn live_len(&self) -> usize {
        self.size
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Clone + Default> FromIterator<T> for DynArray<T> {
    /// Range construction over an iterator: empty input allocates nothing.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), GrowthPolicy::default())
    }
}

impl<T: Clone + Default> Extend<T> for DynArray<T> {
    /// Repeated [`push_back`](DynArray::push_back).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Clone + Default> From<&[T]> for DynArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T: Clone + Default> From<Vec<T>> for DynArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items, GrowthPolicy::default())
    }
}
