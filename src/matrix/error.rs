//! Error type for the fallible transpose routines.
//!
//! The panicking functions assert the same conditions; these variants let
//! callers handle a malformed matrix instead of aborting.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Reasons a matrix can't be transposed in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A row's length differs from the number of rows.
    NotSquare {
        /// Index of the first offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Required length (the row count).
        expected: usize,
    },

    /// A flat row-major buffer doesn't hold `n * n` elements.
    LengthMismatch {
        /// Number of elements in the buffer.
        len: usize,
        /// Elements required for the given dimension.
        expected: usize,
    },
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NotSquare { row, len, expected } => write!(
                f,
                "Matrix is not square: row {row} has {len} elements, expected {expected}"
            ),
            Self::LengthMismatch { len, expected } => {
                write!(f, "Length mismatch: buffer has {len} elements, expected {expected}")
            }
        }
    }
}

impl Error for MatrixError {}
