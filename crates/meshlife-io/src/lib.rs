//! Plaintext pattern load/save for meshlife.
//!
//! Reads and writes the line-oriented `.cells` dialect: one text line per
//! grid row, `O` for a live cell, any other character for a dead one, and
//! `!` prefixing comment lines. The format is deliberately lenient — rows
//! may be ragged (they are padded with dead cells to the widest row) and
//! unknown characters are silently dead.
//!
//! All recoverable failure in meshlife lives here: loaders surface
//! [`LoadError`] to their caller rather than producing a garbage field.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod plaintext;

pub use error::LoadError;
pub use plaintext::{load_into, read_field, write_field};
