//! Concurrent mesh execution engine for meshlife.
//!
//! Advances a [`Field`](meshlife_core::Field) by running one execution
//! unit per cell. Units exchange state with their Moore neighbors over
//! bounded point-to-point channels and advance in lockstep rounds; there
//! is no shared mutable memory between cells. [`run`] is the blocking
//! entry point that wires topology, launches every unit, and waits on the
//! completion barrier.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod mesh;
mod unit;

pub use mesh::{run, LINK_CAPACITY};
