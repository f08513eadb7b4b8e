//! Test utilities and fixtures for smarray development.
//!
//! Provides an instrumented element type ([`Counted`]), a reallocation
//! counter ([`ReallocCounter`]) and deterministic input sequences
//! ([`sample_sequence`]) for the container test suites.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{sample_sequence, Counted, ReallocCounter};
