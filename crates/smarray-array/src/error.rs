//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors raised by [`DynArray`](crate::DynArray) operations.
///
/// Only checked access and capacity requests can fail. Inserting or
/// erasing at an out-of-range cursor and popping an empty array are
/// absorbed as no-ops that return the end cursor instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Checked element access outside the live range `[0, size)`.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of live elements at the time of the call.
        size: usize,
    },
    /// A capacity request exceeding [`max_size`](crate::DynArray::max_size).
    Length {
        /// Capacity that was requested, in elements.
        requested: usize,
        /// Largest representable element count for this element type.
        max: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "index {index} is out of range for size {size}")
            }
            Self::Length { requested, max } => {
                write!(
                    f,
                    "requested capacity {requested} exceeds maximum size {max}"
                )
            }
        }
    }
}

impl Error for ArrayError {}
