//! Cell state, transition rule, and grid container for meshlife.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! persisted per-cell state ([`Cell`]), the Conway transition function
//! ([`rule`]), the [`Field`] grid container, and the core error type.
//!
//! Running a field is the engine crate's job — a [`Field`] on its own is
//! inert data that can be inspected, mutated, and rendered.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod field;
pub mod rule;

pub use cell::{Cell, ALIVE_GLYPH, DEAD_GLYPH};
pub use error::FieldError;
pub use field::Field;
