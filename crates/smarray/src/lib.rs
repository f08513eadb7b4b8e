//! smarray: a resizable contiguous container with random-access cursors.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the smarray sub-crates. For most users, adding `smarray` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use smarray::prelude::*;
//!
//! let mut array = DynArray::new();
//! array.push_back(1);
//! array.push_back(2);
//! array.push_back(3);
//! assert_eq!(array.capacity(), 4);
//!
//! let pos = array.insert(array.begin(), 0);
//! assert_eq!(array[pos], 0);
//! assert_eq!(array.as_slice(), [0, 1, 2, 3]);
//!
//! // Reverse cursors walk back-to-front and convert back to forward ones.
//! let backwards: Vec<i32> = array.walk(array.rbegin(), array.rend()).copied().collect();
//! assert_eq!(backwards, [3, 2, 1, 0]);
//! assert_eq!(Cursor::from(array.rend()), array.begin());
//!
//! // Checked access fails; unchecked access reads the spare slot.
//! array.pop_back();
//! assert!(matches!(array.at(3), Err(ArrayError::OutOfRange { .. })));
//! assert_eq!(array[3], 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `smarray-array` | `DynArray`, growth policy, errors, construction chooser |
//! | [`cursor`] | `smarray-cursor` | `Cursor`, `ReverseCursor`, `Sequence`, cursor iteration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The container, its storage and growth policy (`smarray-array`).
///
/// [`array::DynArray`] is also available in the [`prelude`].
pub use smarray_array as array;

/// Position cursors and sequence resolution (`smarray-cursor`).
///
/// Contains the [`cursor::RandomAccessCursor`] trait and its two
/// implementations, plus [`cursor::Sequence`] for resolving cursors against
/// slices, vectors and arrays.
pub use smarray_cursor as cursor;

/// Common imports for typical smarray usage.
///
/// ```rust
/// use smarray::prelude::*;
/// ```
pub mod prelude {
    // Container
    pub use smarray_array::{ArrayError, ConstructArgs, DynArray, GrowthPolicy, InitKind};

    // Cursors
    pub use smarray_cursor::{Cursor, CursorIter, RandomAccessCursor, ReverseCursor, Sequence};
}
