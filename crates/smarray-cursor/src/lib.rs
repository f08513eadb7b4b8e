//! Random-access position cursors for the smarray container.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! cursor hierarchy used throughout the smarray workspace: a forward
//! [`Cursor`], a [`ReverseCursor`] and the [`RandomAccessCursor`] trait
//! they share, plus the [`Sequence`] trait that resolves a cursor's slot
//! against a concrete buffer.
//!
//! # Cursors are weak
//!
//! A cursor is nothing more than a signed slot offset tagged with the
//! element type. It holds no borrow of the container it came from, so it
//! survives every mutation of that container. After a reallocating or
//! shrinking mutation it silently refers to whatever slot now sits at its
//! offset (or to no slot at all). Nothing tracks this; callers that keep
//! cursors across mutations must re-derive them.
//!
//! ```text
//!  slot:     -1     0     1     2     3
//!           rend  begin              end
//!                       ┌─────┬─────┬─────┐
//!  buffer:              │ 10  │ 20  │ 30  │
//!                       └─────┴─────┴─────┘
//!                                   rbegin (working slot 2)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod sequence;

pub use cursor::{Cursor, RandomAccessCursor, ReverseCursor};
pub use sequence::{CursorIter, Sequence};
