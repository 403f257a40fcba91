//! Square matrix transposition and printing.
//!
//! The in-place routines work on nested rows (`transpose_square`) or on a
//! flat row-major buffer (`transpose_square_flat`). The out-of-place
//! `transpose` handles any shape and doubles as a correctness baseline.

pub mod error;
pub mod print;
pub mod transpose;
