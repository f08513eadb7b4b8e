//! Resizable contiguous container with an explicit growth policy.
//!
//! [`DynArray`] owns a single fixed-size [`Buffer`](buffer::Buffer) and
//! replaces it wholesale whenever it needs more room. The sizing of every
//! replacement is part of the observable contract, so it is spelled out by
//! [`GrowthPolicy`] rather than left to `Vec`.
//!
//! # Architecture
//!
//! ```text
//! DynArray<T>
//! ├── Buffer<T>       (Box<[T]>, length == capacity, all slots initialised)
//! ├── size            (live prefix length)
//! └── GrowthPolicy    (size + size/2 + extra)
//! ```
//!
//! # Failure model
//!
//! Only two operations return errors: checked access
//! ([`DynArray::at`]) and [`DynArray::reserve`]. Every other boundary
//! condition (insert or erase outside the live range, pop on empty) is a
//! silent no-op that returns the end cursor.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod buffer;
pub mod config;
pub mod construct;
pub mod error;

// Public re-exports for the primary API surface.
pub use array::DynArray;
pub use config::GrowthPolicy;
pub use construct::{ConstructArgs, InitKind};
pub use error::ArrayError;
