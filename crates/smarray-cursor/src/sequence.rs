//! Resolving cursor slots against concrete buffers.

use std::iter::FusedIterator;

use crate::cursor::{Cursor, RandomAccessCursor};

/// A contiguous buffer that cursors can be resolved against.
///
/// `resolve` addresses the whole *storage* of the sequence, which may be
/// larger than its live prefix (a container's spare capacity, for
/// instance). Cursors carry no bounds of their own; a slot outside the
/// storage panics here.
pub trait Sequence {
    /// Element type.
    type Item;

    /// The element at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is negative or beyond the addressable storage.
    fn resolve(&self, slot: isize) -> &Self::Item;

    /// The element at `slot`, mutably.
    ///
    /// # Panics
    ///
    /// Same as [`resolve`](Sequence::resolve).
    fn resolve_mut(&mut self, slot: isize) -> &mut Self::Item;

    /// Number of live elements.
    fn live_len(&self) -> usize;

    /// Cursor at the first live slot.
    fn begin_cursor(&self) -> Cursor<Self::Item> {
        Cursor::new(0)
    }

    /// Cursor one past the last live slot.
    fn end_cursor(&self) -> Cursor<Self::Item> {
        Cursor::from_index(self.live_len())
    }
}

/// Convert a cursor slot into a buffer index.
///
/// # Panics
///
/// Panics if `slot` is negative, i.e. lies before the start of any buffer.
pub fn slot_index(slot: isize) -> usize {
    match usize::try_from(slot) {
        Ok(index) => index,
        Err(_) => panic!("cursor slot {slot} lies before the start of the sequence"),
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn resolve(&self, slot: isize) -> &T {
        &self[slot_index(slot)]
    }

    fn resolve_mut(&mut self, slot: isize) -> &mut T {
        &mut self[slot_index(slot)]
    }

    fn live_len(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn resolve(&self, slot: isize) -> &T {
        self.as_slice().resolve(slot)
    }

    fn resolve_mut(&mut self, slot: isize) -> &mut T {
        self.as_mut_slice().resolve_mut(slot)
    }

    fn live_len(&self) -> usize {
        N
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn resolve(&self, slot: isize) -> &T {
        self.as_slice().resolve(slot)
    }

    fn resolve_mut(&mut self, slot: isize) -> &mut T {
        self.as_mut_slice().resolve_mut(slot)
    }

    fn live_len(&self) -> usize {
        self.len()
    }
}

/// Iterator over the half-open cursor range `[first, last)` of a
/// [`Sequence`].
///
/// Works with either cursor variant; with reverse cursors it yields
/// elements back-to-front. The range is measured in logical steps, so a
/// `last` that is not reachable from `first` (negative distance) yields
/// nothing.
#[derive(Debug)]
pub struct CursorIter<'a, S: ?Sized, C> {
    seq: &'a S,
    front: C,
    back: C,
}

impl<'a, S: ?Sized, C> CursorIter<'a, S, C> {
    /// Walk `seq` from `first` up to (not including) `last`.
    pub fn new(seq: &'a S, first: C, last: C) -> Self {
        Self {
            seq,
            front: first,
            back: last,
        }
    }
}

impl<S: ?Sized, C: Copy> Clone for CursorIter<'_, S, C> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, S, C> CursorIter<'a, S, C>
where
    S: Sequence + ?Sized,
    C: RandomAccessCursor<Item = S::Item>,
{
    fn remaining(&self) -> usize {
        usize::try_from(self.back.distance_from(self.front)).unwrap_or(0)
    }
}

impl<'a, S, C> Iterator for CursorIter<'a, S, C>
where
    S: Sequence + ?Sized,
    C: RandomAccessCursor<Item = S::Item>,
{
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let seq: &'a S = self.seq;
        let item = seq.resolve(self.front.post_increment().slot());
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<'a, S, C> DoubleEndedIterator for CursorIter<'a, S, C>
where
    S: Sequence + ?Sized,
    C: RandomAccessCursor<Item = S::Item>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let seq: &'a S = self.seq;
        let item = seq.resolve(self.back.decrement().slot());
        Some(item)
    }
}

impl<S, C> ExactSizeIterator for CursorIter<'_, S, C>
where
    S: Sequence + ?Sized,
    C: RandomAccessCursor<Item = S::Item>,
{
}

impl<S, C> FusedIterator for CursorIter<'_, S, C>
where
    S: Sequence + ?Sized,
    C: RandomAccessCursor<Item = S::Item>,
{
}
