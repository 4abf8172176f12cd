//! Console pretty-printing of a [`Matrix`].
//!
//! This module only reads the matrix's shape and elements; it lives apart
//! from the matrix itself on purpose.

use crate::matrix::Matrix;
use crate::Int;
use std::io::Write;

/// Calculates the number of digits in a number.
///
/// This is a legacy formula kept for output compatibility: it returns 0 for
/// zero, and it stops counting as soon as the remaining value is a multiple
/// of 10. So `digits(25)` is 2, but `digits(10)` and `digits(120)` are 0,
/// and `digits(101)` is 1. Callers only use it to pick a column width, where
/// these small widths are harmless.
pub fn digits(num: Int) -> usize {
    let mut digits = 0;
    let mut num = num;

    if num == 0 {
        return digits;
    }

    while num % 10 != 0 {
        num /= 10;
        digits += 1;
    }

    digits
}

/// Writes a matrix and its dimensions into `out`.
///
/// The first line is `Dimensions: {rows}x{cols}`; then one line per row,
/// with every element left-aligned on a column width derived from the
/// greatest [`digits`] count among the elements.
pub fn write_matrix<W: Write>(out: &mut W, matrix: &Matrix) -> std::io::Result<()> {
    let mut greatest_number_of_digits = 0;

    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            let digits = digits(matrix.get(i, j).unwrap_or(0));
            if digits > greatest_number_of_digits {
                greatest_number_of_digits = digits;
            }
        }
    }

    // The original tool sized its columns this way; the truncating cast
    // is part of the format.
    let width = (greatest_number_of_digits as f64 * 1.3 + 3.0) as usize;

    writeln!(out, "Dimensions: {}x{}", matrix.rows(), matrix.cols())?;
    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            write!(out, "{:<width$}", matrix.get(i, j).unwrap_or(0))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Prints a matrix and its dimensions to standard output.
///
/// # Panics
/// Panics if writing to stdout fails.
pub fn print(matrix: &Matrix) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_matrix(&mut out, matrix).unwrap()
}
