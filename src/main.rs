//! Transposes a fixed 3×3 matrix and prints it before and after.

use std::io;
use transpose::{print_matrix, transpose_square};

fn main() -> io::Result<()> {
    let mut matrix = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];

    println!("Original Matrix:");
    print_matrix(&matrix)?;

    transpose_square(&mut matrix);

    println!("\nTransposed Matrix:");
    print_matrix(&matrix)?;

    Ok(())
}
