//! Text output for nested matrices.
//!
//! Every value is followed by a single space and every row ends with a
//! newline, so `[[1, 2], [3, 4]]` renders as `"1 2 \n3 4 \n"`.

use std::fmt;
use std::io::{self, Write};
use std::marker::PhantomData;

/// Borrowed [`Display`](fmt::Display) adaptor for a matrix.
///
/// Holds only a shared reference, so it can be formatted any number of
/// times and always walks the rows from the top.
pub struct MatrixDisplay<'a, T, R> {
    rows: &'a [R],
    _elem: PhantomData<fn() -> T>,
}

/// Wrap a matrix for formatting.
///
/// ```
/// use transpose::display;
///
/// let m = [[1, 2], [3, 4]];
/// assert_eq!(display(&m).to_string(), "1 2 \n3 4 \n");
/// ```
pub fn display<T, R: AsRef<[T]>>(rows: &[R]) -> MatrixDisplay<'_, T, R> {
    MatrixDisplay {
        rows,
        _elem: PhantomData,
    }
}

impl<T: fmt::Display, R: AsRef<[T]>> fmt::Display for MatrixDisplay<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows {
            for val in row.as_ref() {
                write!(f, "{} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Write a matrix to any byte sink.
pub fn write_matrix<W, T, R>(out: &mut W, rows: &[R]) -> io::Result<()>
where
    W: Write,
    T: fmt::Display,
    R: AsRef<[T]>,
{
    write!(out, "{}", display(rows))
}

/// Write a matrix to stdout.
pub fn print_matrix<T: fmt::Display, R: AsRef<[T]>>(rows: &[R]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_matrix(&mut out, rows)?;
    out.flush()
}
