//! Moore-neighborhood grid topology for meshlife.
//!
//! Computes, for a rectangular grid, which cells are neighbors of which:
//! the up-to-8 positions at Chebyshev distance 1, with no wraparound —
//! out-of-bounds positions are simply omitted, so corner cells have 3
//! neighbors and non-corner edge cells have 5.
//!
//! Adjacency is expressed as index lists into a flat row-major grid
//! (`index = row * cols + col`), never as links between cell objects.
//! The engine rebuilds the [`Adjacency`] table at the start of every run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod moore;

pub use moore::{Adjacency, MAX_DEGREE};
