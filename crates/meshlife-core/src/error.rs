//! Error types for field construction.

use std::fmt;

/// Errors arising from [`Field`](crate::Field) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// Attempted to construct a field with zero rows or zero columns.
    EmptyField,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField => write!(f, "field must have at least one row and one column"),
        }
    }
}

impl std::error::Error for FieldError {}
