//! In-place transposition of square matrices.
//!
//! Swaps each element above the diagonal with its mirror below it, so an
//! N×N matrix becomes its own transpose without allocating a second one.
//!
//! ## Usage
//!
//! ```
//! use transpose::{print_matrix, transpose_square};
//!
//! let mut m = vec![vec![1, 2], vec![3, 4]];
//! transpose_square(&mut m);
//!
//! assert_eq!(m, vec![vec![1, 3], vec![2, 4]]);
//! print_matrix(&m).unwrap(); // "1 3 \n2 4 \n"
//! ```
//!
//! Row-major buffers, the layout most numeric code hands around, have
//! their own entry point:
//!
//! ```
//! use transpose::transpose_square_flat;
//!
//! let mut m = vec![1, 2, 3,
//!                  4, 5, 6,
//!                  7, 8, 9];
//! transpose_square_flat(&mut m, 3);
//!
//! assert_eq!(m, vec![1, 4, 7, 2, 5, 8, 3, 6, 9]);
//! ```
//!
//! ## What's inside
//!
//! - Panicking and `Result`-returning in-place transposes
//! - Nested (`Vec<Vec<T>>`, `[[T; N]; N]`) and flat row-major layouts
//! - Out-of-place transpose for any shape
//! - A `Display` adaptor and stdout printer

pub mod matrix;

pub use matrix::error::MatrixError;
pub use matrix::print::{MatrixDisplay, display, print_matrix, write_matrix};
pub use matrix::transpose::{
    check_square, is_square, transpose_square, transpose_square_flat, try_transpose_square,
    try_transpose_square_flat,
};
