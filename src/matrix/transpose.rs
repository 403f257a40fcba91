use super::error::MatrixError;

/// Transpose a matrix: dst = src^T
///
/// Converts from row-major (rows × cols) to row-major (cols × rows).
/// After transpose, what was column j of src becomes row j of dst.
/// Works for any shape, at the cost of a second buffer.
///
/// # Arguments
///
/// * `src` - Source matrix (rows × cols), row-major
/// * `dst` - Destination matrix (cols × rows), row-major
/// * `rows` - Number of rows in src
/// * `cols` - Number of columns in src
///
/// # Example
///
/// ```
/// use transpose::matrix::transpose::transpose;
///
/// let src = vec![1, 2, 3,   // 2×3 matrix
///                4, 5, 6];
/// let mut dst = vec![0; 6]; // will be 3×2
///
/// transpose(&src, &mut dst, 2, 3);
///
/// assert_eq!(dst, vec![1, 4,   // 3×2 matrix
///                      2, 5,
///                      3, 6]);
/// ```
pub fn transpose<T: Copy>(src: &[T], dst: &mut [T], rows: usize, cols: usize) {
    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
}

/// Transpose a square matrix of rows in place.
///
/// Walks the strictly upper triangle and swaps each `(i, j)` with its
/// mirror `(j, i)`, so every off-diagonal pair moves exactly once and the
/// diagonal is never touched. Rows can be anything that derefs to a
/// mutable slice: `Vec<Vec<T>>`, `[[T; N]; N]`, `Vec<[T; N]>`.
///
/// # Example
///
/// ```
/// use transpose::transpose_square;
///
/// let mut m = vec![vec![1, 2, 3],
///                  vec![4, 5, 6],
///                  vec![7, 8, 9]];
///
/// transpose_square(&mut m);
///
/// assert_eq!(m, vec![vec![1, 4, 7],
///                    vec![2, 5, 8],
///                    vec![3, 6, 9]]);
/// ```
///
/// # Panics
///
/// Panics if any row's length differs from the number of rows. The check
/// runs before anything is swapped, so the matrix is never left
/// half-transposed.
pub fn transpose_square<T, R: AsMut<[T]>>(m: &mut [R]) {
    if let Err(err) = check_square_mut(m) {
        panic!("{}", err);
    }
    swap_upper_triangle(m);
}

/// Same as [`transpose_square`] but reports a non-square matrix instead of
/// panicking. On error the matrix is left untouched.
pub fn try_transpose_square<T, R: AsMut<[T]>>(m: &mut [R]) -> Result<(), MatrixError> {
    check_square_mut(m)?;
    swap_upper_triangle(m);
    Ok(())
}

/// Transpose an n×n row-major buffer in place.
///
/// Same swap schedule as [`transpose_square`], on the flat layout the
/// rest of the crate uses.
///
/// # Panics
///
/// Panics if `data.len() != n * n`.
pub fn transpose_square_flat<T>(data: &mut [T], n: usize) {
    assert_eq!(data.len(), n * n, "expected {}x{}={} elements", n, n, n * n);
    swap_upper_triangle_flat(data, n);
}

/// Fallible form of [`transpose_square_flat`].
pub fn try_transpose_square_flat<T>(data: &mut [T], n: usize) -> Result<(), MatrixError> {
    let expected = n.checked_mul(n).ok_or(MatrixError::LengthMismatch {
        len: data.len(),
        expected: usize::MAX,
    })?;
    if data.len() != expected {
        return Err(MatrixError::LengthMismatch {
            len: data.len(),
            expected,
        });
    }
    swap_upper_triangle_flat(data, n);
    Ok(())
}

/// Check that every row is as long as the matrix is tall.
///
/// Returns the dimension N, or the first row that breaks the shape.
pub fn check_square<T, R: AsRef<[T]>>(m: &[R]) -> Result<usize, MatrixError> {
    first_ragged_row(m.iter().map(|row| row.as_ref().len()), m.len())
}

/// `true` if [`check_square`] would succeed.
pub fn is_square<T, R: AsRef<[T]>>(m: &[R]) -> bool {
    check_square(m).is_ok()
}

// AsMut-only twin of check_square, so transposing doesn't need AsRef too.
fn check_square_mut<T, R: AsMut<[T]>>(m: &mut [R]) -> Result<usize, MatrixError> {
    let n = m.len();
    first_ragged_row(m.iter_mut().map(|row| row.as_mut().len()), n)
}

fn first_ragged_row(lens: impl Iterator<Item = usize>, n: usize) -> Result<usize, MatrixError> {
    for (row, len) in lens.enumerate() {
        if len != n {
            return Err(MatrixError::NotSquare {
                row,
                len,
                expected: n,
            });
        }
    }
    Ok(n)
}

fn swap_upper_triangle<T, R: AsMut<[T]>>(m: &mut [R]) {
    let n = m.len();
    for i in 0..n {
        // rows 0..=i on one side, i+1.. on the other, so row i and row j
        // can be borrowed mutably at the same time
        let (upper, lower) = m.split_at_mut(i + 1);
        let row_i = upper[i].as_mut();
        for (j, row_j) in (i + 1..n).zip(lower.iter_mut()) {
            std::mem::swap(&mut row_i[j], &mut row_j.as_mut()[i]);
        }
    }
}

fn swap_upper_triangle_flat<T>(data: &mut [T], n: usize) {
    for i in 0..n {
        for j in (i + 1)..n {
            data.swap(i * n + j, j * n + i);
        }
    }
}
