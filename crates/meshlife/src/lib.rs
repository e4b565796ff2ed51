//! meshlife: Conway's Game of Life on a concurrent message-passing cell mesh.
//!
//! Every cell is an independently scheduled execution unit. Each round it
//! broadcasts its state to its Moore neighbors over bounded channels,
//! collects exactly one message per neighbor, applies the Conway rule to
//! that snapshot, and advances — the whole mesh moving in lockstep with no
//! shared mutable state. This is the top-level facade crate that
//! re-exports the public API from the meshlife sub-crates; for most users,
//! depending on `meshlife` alone is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use meshlife::{run, Field};
//!
//! // A blinker on a 5×5 grid: horizontal line at row 2, columns 1–3.
//! let mut field = Field::all_dead(5, 5).unwrap();
//! field.set_alive(2, 1, true);
//! field.set_alive(2, 2, true);
//! field.set_alive(2, 3, true);
//!
//! // One lockstep round: the mesh flips it to the vertical line.
//! run(&mut field, 1);
//! assert!(field.alive(1, 2) && field.alive(2, 2) && field.alive(3, 2));
//! assert!(!field.alive(2, 1) && !field.alive(2, 3));
//!
//! // A second round brings it back: period-2 oscillation.
//! run(&mut field, 1);
//! assert!(field.alive(2, 1) && field.alive(2, 2) && field.alive(2, 3));
//! ```
//!
//! # Sub-crates
//!
//! | Re-export | Sub-crate | Contents |
//! |-----------|-----------|----------|
//! | [`Cell`], [`Field`], [`rule`] | `meshlife-core` | Persisted state, transition rule, grid container |
//! | [`Adjacency`], [`MAX_DEGREE`] | `meshlife-space` | Moore-neighborhood topology |
//! | [`run`], [`LINK_CAPACITY`] | `meshlife-engine` | Cell units, wiring, completion barrier |
//! | [`read_field`], [`load_into`], [`write_field`] | `meshlife-io` | Plaintext pattern load/save |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use meshlife_core::rule;
pub use meshlife_core::{Cell, Field, FieldError, ALIVE_GLYPH, DEAD_GLYPH};
pub use meshlife_engine::{run, LINK_CAPACITY};
pub use meshlife_io::{load_into, read_field, write_field, LoadError};
pub use meshlife_space::{Adjacency, MAX_DEGREE};
