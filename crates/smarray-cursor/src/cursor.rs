//! Forward and reverse random-access cursors.
//!
//! Both variants wrap the same thing: a signed slot offset into some
//! buffer. They differ only in which direction "forward" moves the slot
//! and in the reverse cursor's off-by-one construction rule (see
//! [`ReverseCursor::new`]).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::sequence::Sequence;

/// Shared behaviour of [`Cursor`] and [`ReverseCursor`].
///
/// A random-access cursor is a position handle over a contiguous buffer.
/// All movement is expressed in *logical* steps: advancing a forward cursor
/// moves its slot towards the back of the buffer, advancing a reverse
/// cursor moves its slot towards the front.
///
/// Ordering (`Ord`) is always the order of the stored slots, never the
/// logical traversal order. For reverse cursors the two disagree: for a
/// non-empty buffer `rbegin > rend`.
pub trait RandomAccessCursor: Copy + Ord {
    /// Element type of the buffer this cursor addresses.
    type Item;

    /// The working slot this cursor resolves to.
    fn slot(&self) -> isize;

    /// Move `n` logical steps (negative `n` moves backwards).
    ///
    /// Slot arithmetic wraps; a cursor moved far outside its buffer is
    /// simply a slot that resolves to nothing.
    #[must_use]
    fn advance_by(self, n: isize) -> Self;

    /// Signed logical distance from `origin` to `self`, i.e. the `n` for
    /// which `origin.advance_by(n) == self`.
    fn distance_from(self, origin: Self) -> isize;

    /// Pre-increment: advance one step and return the moved cursor.
    fn increment(&mut self) -> &mut Self {
        *self = self.advance_by(1);
        self
    }

    /// Pre-decrement: retreat one step and return the moved cursor.
    fn decrement(&mut self) -> &mut Self {
        *self = self.advance_by(-1);
        self
    }

    /// Post-increment: advance one step, returning the cursor as it was.
    fn post_increment(&mut self) -> Self {
        let prev = *self;
        self.increment();
        prev
    }

    /// Post-decrement: retreat one step, returning the cursor as it was.
    fn post_decrement(&mut self) -> Self {
        let prev = *self;
        self.decrement();
        prev
    }

    /// Dereference against `seq`.
    ///
    /// # Panics
    ///
    /// Panics if the slot lies outside the storage `seq` can address.
    /// Reading an end sentinel that still lies inside the storage returns
    /// whatever the slot currently holds.
    fn read<S>(self, seq: &S) -> &Self::Item
    where
        S: Sequence<Item = Self::Item> + ?Sized,
    {
        seq.resolve(self.slot())
    }

    /// Mutable dereference against `seq`.
    ///
    /// # Panics
    ///
    /// Same as [`read`](RandomAccessCursor::read).
    fn read_mut<S>(self, seq: &mut S) -> &mut Self::Item
    where
        S: Sequence<Item = Self::Item> + ?Sized,
    {
        seq.resolve_mut(self.slot())
    }
}

/// A forward random-access cursor.
///
/// Holds a single slot offset. `begin()` of a container is slot `0`,
/// `end()` is slot `size`.
pub struct Cursor<T> {
    slot: isize,
    marker: PhantomData<fn() -> T>,
}

impl<T> Cursor<T> {
    /// A cursor at `slot`.
    pub const fn new(slot: isize) -> Self {
        Self {
            slot,
            marker: PhantomData,
        }
    }

    /// A cursor at buffer index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` exceeds `isize::MAX`. Buffers of sized elements
    /// never hold that many slots.
    pub const fn from_index(index: usize) -> Self {
        assert!(index <= isize::MAX as usize, "cursor index exceeds isize::MAX");
        Self::new(index as isize)
    }
}

impl<T> RandomAccessCursor for Cursor<T> {
    type Item = T;

    fn slot(&self) -> isize {
        self.slot
    }

    fn advance_by(self, n: isize) -> Self {
        Self::new(self.slot.wrapping_add(n))
    }

    fn distance_from(self, origin: Self) -> isize {
        self.slot.wrapping_sub(origin.slot)
    }
}

/// A reverse random-access cursor.
///
/// Built from a forward position `p`, it works on slot `p - 1`: the
/// element it dereferences, the slot it compares by and the base of all
/// its arithmetic are that predecessor slot. `rbegin()` is therefore built
/// from `end()` and reads the last live element, while `rend()` is built
/// from `begin()` and sits on slot `-1`.
///
/// Incrementing a reverse cursor moves its slot one towards the front.
pub struct ReverseCursor<T> {
    slot: isize,
    marker: PhantomData<fn() -> T>,
}

impl<T> ReverseCursor<T> {
    /// A reverse cursor built from the forward position `forward`.
    ///
    /// The working slot is `forward.slot() - 1`.
    pub const fn new(forward: Cursor<T>) -> Self {
        Self::from_forward_slot(forward.slot)
    }

    /// A reverse cursor built from the forward slot `slot`; its working
    /// slot is `slot - 1`.
    pub const fn from_forward_slot(slot: isize) -> Self {
        Self {
            slot: slot.wrapping_sub(1),
            marker: PhantomData,
        }
    }

    /// The forward cursor this reverse cursor was (or could have been)
    /// built from: the slot immediately after the working slot.
    pub fn base(self) -> Cursor<T> {
        Cursor::from(self)
    }
}

impl<T> RandomAccessCursor for ReverseCursor<T> {
    type Item = T;

    fn slot(&self) -> isize {
        self.slot
    }

    fn advance_by(self, n: isize) -> Self {
        Self {
            slot: self.slot.wrapping_sub(n),
            marker: PhantomData,
        }
    }

    fn distance_from(self, origin: Self) -> isize {
        origin.slot.wrapping_sub(self.slot)
    }
}

impl<T> From<ReverseCursor<T>> for Cursor<T> {
    fn from(rev: ReverseCursor<T>) -> Self {
        Cursor::new(rev.slot.wrapping_add(1))
    }
}

impl<T> From<Cursor<T>> for ReverseCursor<T> {
    fn from(forward: Cursor<T>) -> Self {
        ReverseCursor::new(forward)
    }
}

/// Trait impls that would otherwise need `T` bounds under `derive`.
macro_rules! cursor_impls {
    ($name:ident) => {
        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                self.slot == other.slot
            }
        }

        impl<T> Eq for $name<T> {}

        impl<T> PartialOrd for $name<T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<T> Ord for $name<T> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.slot.cmp(&other.slot)
            }
        }

        impl<T> Hash for $name<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.slot.hash(state);
            }
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.slot).finish()
            }
        }

        impl<T> Add<usize> for $name<T> {
            type Output = Self;

            fn add(self, n: usize) -> Self {
                self.advance_by(n as isize)
            }
        }

        impl<T> Sub<usize> for $name<T> {
            type Output = Self;

            fn sub(self, n: usize) -> Self {
                self.advance_by((n as isize).wrapping_neg())
            }
        }

        impl<T> AddAssign<usize> for $name<T> {
            fn add_assign(&mut self, n: usize) {
                *self = *self + n;
            }
        }

        impl<T> SubAssign<usize> for $name<T> {
            fn sub_assign(&mut self, n: usize) {
                *self = *self - n;
            }
        }

        impl<T> Sub for $name<T> {
            type Output = isize;

            fn sub(self, origin: Self) -> isize {
                self.distance_from(origin)
            }
        }
    };
}

cursor_impls!(Cursor);
cursor_impls!(ReverseCursor);
