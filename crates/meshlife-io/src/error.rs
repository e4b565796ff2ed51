//! Error types for pattern loading.

use std::fmt;
use std::io;

use meshlife_core::FieldError;

/// Errors arising while loading a pattern.
#[derive(Debug)]
pub enum LoadError {
    /// The underlying stream failed mid-read.
    Io(io::Error),
    /// The pattern contained no rows or no columns; there is no
    /// well-defined field to build from it.
    EmptyPattern,
    /// Field construction rejected the pattern's dimensions.
    Field(FieldError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "pattern stream read failed: {err}"),
            Self::EmptyPattern => write!(f, "pattern has no rows or no columns"),
            Self::Field(err) => write!(f, "pattern yields an invalid field: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Field(err) => Some(err),
            Self::EmptyPattern => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<FieldError> for LoadError {
    fn from(err: FieldError) -> Self {
        Self::Field(err)
    }
}
