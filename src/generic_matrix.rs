/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! The generic matrix itself, and the whole of its operation set.

use crate::error::{MatrixError, Result};
use crate::traits::Numberish;
use serde::{Deserialize, Serialize};

/// The main Structure in this library
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct GenericMatrix<T: Numberish> {
    pub(crate) ncols: usize,
    pub(crate) nrows: usize,

    // Contains the data ordered by row,
    // Going left to right, and up and down.
    pub(crate) data: Vec<T>,
}

impl<T: Numberish> std::fmt::Display for GenericMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.nrows {
            write!(f, "\n\t")?;
            for j in 0..self.ncols {
                let index = self.index(i, j);
                write!(f, "{}, ", self.data[index])?;
            }
        }
        Ok(())
    }
}

impl<T: Numberish> GenericMatrix<T> {
    /// Creates a `GenericMatrix` from a vector containing the elements of the matrix
    ///
    /// # Panics
    /// Panics if `nrows * ncols` does not match the length of `data`
    #[must_use]
    pub fn from_data(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        if nrows * ncols != data.len() {
            panic!("When creating Matrix: Number of rows (nrows = {}) and cols (ncols = {}) does not match length of data (data.len() = {})... (nrows * ncols = {})", nrows, ncols, data.len(), nrows*ncols)
        }
        // return
        Self { nrows, ncols, data }
    }

    /// Creates a `GenericMatrix` of `nrows` and `ncols` full of values `v`
    #[must_use]
    pub fn new(v: T, nrows: usize, ncols: usize) -> Self {
        GenericMatrix {
            nrows,
            ncols,
            data: vec![v; nrows * ncols],
        }
    }

    /// Creates a `GenericMatrix` of `nrows` and `ncols` full of zeroes
    #[must_use]
    pub fn zeroes(nrows: usize, ncols: usize) -> Self {
        Self::new(T::zero(), nrows, ncols)
    }

    /// Creates a `GenericMatrix` from a vector of rows.
    ///
    /// The number of columns is taken from the first row (or 0 when there
    /// are no rows), so all rows are expected to be of the same length.
    ///
    /// # Panics
    /// Panics if the rows are not all of the same length
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let nrows = rows.len();
        let ncols = match rows.first() {
            Some(first) => first.len(),
            None => 0,
        };
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Self::from_data(nrows, ncols, data)
    }

    /// Creates a squared matrix with the elements of `data`
    /// in the diagonal
    #[must_use]
    pub fn diag(data: Vec<T>) -> Self {
        let n_rows = data.len();
        let n_elements = n_rows * n_rows;
        let mut v = vec![T::zero(); n_elements];

        for (nrow, value) in data.iter().enumerate() {
            let i = nrow * (n_rows + 1);
            v[i] = *value;
        }

        GenericMatrix::from_data(n_rows, n_rows, v)
    }

    /// Creates an Identity matrix of size NxN
    #[must_use]
    pub fn eye(n: usize) -> Self {
        GenericMatrix {
            nrows: n,
            ncols: n,
            data: (0..(n * n))
                .map(|i| {
                    let col = i % n;
                    let row = (i - col) / n;
                    if row == col {
                        T::one()
                    } else {
                        T::zero()
                    }
                })
                .collect(),
        }
    }

    /// Creates an empty Matrix (i.e., size 0x0)
    #[must_use]
    pub fn empty() -> Self {
        GenericMatrix {
            nrows: 0,
            ncols: 0,
            data: Vec::with_capacity(0),
        }
    }

    /// Checks whether a Matrix has Zero columns and Zero rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 && self.ncols == 0
    }

    /// Returns a tuple with number of rows and columns
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Returns the number of rows
    pub fn rows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of columns
    pub fn cols(&self) -> usize {
        self.ncols
    }

    /// Does the number of rows equal the number of columns?
    pub fn is_square(&self) -> bool {
        self.ncols == self.nrows
    }

    /// Gets the index of an element within the `data` array of the Matrix
    fn index(&self, nrow: usize, ncol: usize) -> usize {
        self.ncols * nrow + ncol
    }

    /// Builds the error reported when `nrow,ncol` falls outside the matrix
    fn out_of_bounds(&self, nrow: usize, ncol: usize) -> MatrixError {
        MatrixError::OutOfBounds {
            row: nrow,
            col: ncol,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Gets an element from the matrix
    pub fn get(&self, nrow: usize, ncol: usize) -> Result<T> {
        if nrow < self.nrows && ncol < self.ncols {
            let i = self.index(nrow, ncol);
            Ok(self.data[i])
        } else {
            Err(self.out_of_bounds(nrow, ncol))
        }
    }

    /// Sets an element into the matrix
    pub fn set(&mut self, nrow: usize, ncol: usize, v: T) -> Result<T> {
        if nrow < self.nrows && ncol < self.ncols {
            let i = self.index(nrow, ncol);
            self.data[i] = v;
            Ok(v)
        } else {
            Err(self.out_of_bounds(nrow, ncol))
        }
    }

    /// Borrows row `nrow` as a slice
    pub fn row(&self, nrow: usize) -> Result<&[T]> {
        if nrow < self.nrows {
            let ini = self.index(nrow, 0);
            Ok(&self.data[ini..ini + self.ncols])
        } else {
            Err(self.out_of_bounds(nrow, 0))
        }
    }

    /// Borrows row `nrow` as a mutable slice, writing through to the matrix
    pub fn row_mut(&mut self, nrow: usize) -> Result<&mut [T]> {
        if nrow < self.nrows {
            let ini = self.index(nrow, 0);
            let fin = ini + self.ncols;
            Ok(&mut self.data[ini..fin])
        } else {
            Err(self.out_of_bounds(nrow, 0))
        }
    }

    /// Checks if two matrices are exactly the same, comparing
    /// their sizes first and then every element.
    pub fn compare(&self, other: &GenericMatrix<T>) -> bool {
        if self.ncols != other.ncols {
            return false;
        }
        if self.nrows != other.nrows {
            return false;
        }
        for i in 0..self.data.len() {
            if self.data[i] != other.data[i] {
                return false;
            }
        }
        // return
        true
    }

    /* ARITHMETIC OPERATIONS */

    /// Adds `self` with `other`, returning a new matrix.
    ///
    /// Returns a [`MatrixError::DimensionMismatch`] when the
    /// sizes of both matrices differ.
    pub fn from_add(&self, other: &GenericMatrix<T>) -> Result<GenericMatrix<T>> {
        if self.ncols != other.ncols || self.nrows != other.nrows {
            return Err(MatrixError::DimensionMismatch {
                op: "add",
                left: self.size(),
                right: other.size(),
            });
        }

        let ret_data = std::iter::zip(self.data.iter(), other.data.iter())
            .map(|(x, y)| *x + *y)
            .collect();

        // return
        Ok(GenericMatrix::from_data(self.nrows, self.ncols, ret_data))
    }

    /// Substracts `other` from `self`, returning a new matrix.
    ///
    /// Returns a [`MatrixError::DimensionMismatch`] when the
    /// sizes of both matrices differ.
    pub fn from_sub(&self, other: &GenericMatrix<T>) -> Result<GenericMatrix<T>> {
        if self.ncols != other.ncols || self.nrows != other.nrows {
            return Err(MatrixError::DimensionMismatch {
                op: "subtract",
                left: self.size(),
                right: other.size(),
            });
        }

        let ret_data = std::iter::zip(self.data.iter(), other.data.iter())
            .map(|(x, y)| *x - *y)
            .collect();

        // return
        Ok(GenericMatrix::from_data(self.nrows, self.ncols, ret_data))
    }

    /// Multiplies `self` by `other`, returning a new matrix of size
    /// `self.rows()` by `other.cols()`.
    ///
    /// Returns a [`MatrixError::DimensionMismatch`] unless the number of
    /// columns in `self` equals the number of rows in `other`.
    pub fn from_prod(&self, other: &GenericMatrix<T>) -> Result<GenericMatrix<T>> {
        if self.ncols != other.nrows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                left: self.size(),
                right: other.size(),
            });
        }

        // Initialize matrix full of zeroes
        let mut ret = GenericMatrix::zeroes(self.nrows, other.ncols);

        // Multiply.
        for r in 0..self.nrows {
            for c in 0..other.ncols {
                // (r,c) is the position in the resulting matrix.
                let mut v = T::zero();

                // Add the numbers
                for i in 0..other.nrows {
                    let a = self.data[self.index(r, i)];
                    let b = other.data[other.index(i, c)];
                    v += a * b;
                }

                // Set the value
                let i = ret.index(r, c);
                ret.data[i] = v;
            }
        }

        // return
        Ok(ret)
    }

    /// Scales the matrix by `s`, returning a new matrix. This cannot fail.
    #[must_use]
    pub fn from_scale(&self, s: T) -> GenericMatrix<T> {
        let ret_data = self.data.iter().map(|x| *x * s).collect();
        GenericMatrix::from_data(self.nrows, self.ncols, ret_data)
    }

    /// Divides every element by `s`, returning a new matrix. Division is
    /// integer division, truncating towards zero.
    ///
    /// Returns a [`MatrixError::DivisionByZero`] when `s` is zero.
    pub fn from_div_scalar(&self, s: T) -> Result<GenericMatrix<T>> {
        if s == T::zero() {
            return Err(MatrixError::DivisionByZero);
        }

        let ret_data = self.data.iter().map(|x| *x / s).collect();
        Ok(GenericMatrix::from_data(self.nrows, self.ncols, ret_data))
    }

    /// "Divides" `self` by `other`; defined as `self` times the
    /// [`inverse`](GenericMatrix::inverse) of `other`.
    ///
    /// Since `inverse()` is not a true multiplicative inverse (see its
    /// docs), this is not a true matrix division either. It fails whenever
    /// `inverse` or the multiplication fail.
    pub fn from_div(&self, other: &GenericMatrix<T>) -> Result<GenericMatrix<T>> {
        self.from_prod(&other.inverse()?)
    }

    /// Returns a new matrix with row `row` and column `col` removed,
    /// preserving the relative order of the remaining elements.
    ///
    /// The matrix must have at least one row and one column.
    ///
    /// # Panics
    /// Panics if `row` or `col` are outside the matrix (nothing would be
    /// skipped, so the result would not fit its reduced size), or if the
    /// matrix has no rows or no columns.
    #[must_use]
    pub fn minor(&self, row: usize, col: usize) -> GenericMatrix<T> {
        let mut minor_data = Vec::with_capacity((self.nrows - 1) * (self.ncols - 1));

        for r in 0..self.nrows {
            if r == row {
                // Skip the specified row
                continue;
            }
            for c in 0..self.ncols {
                if c == col {
                    // Skip the specified column
                    continue;
                }
                minor_data.push(self.data[self.index(r, c)]);
            }
        }

        GenericMatrix::from_data(self.nrows - 1, self.ncols - 1, minor_data)
    }

    /// Switch rows by columns; the element at `(i,j)` goes into `(j,i)`.
    #[must_use]
    pub fn transpose(&self) -> GenericMatrix<T> {
        // Flip the number of rows and cols in the result
        let mut ret = GenericMatrix::zeroes(self.ncols, self.nrows);

        for i in 0..self.nrows {
            for j in 0..self.ncols {
                let v = self.data[self.index(i, j)];
                let ret_i = ret.index(j, i);
                ret.data[ret_i] = v;
            }
        }

        ret
    }

    /// Computes the "inverse" of the matrix by swapping rows and columns
    /// and flipping the sign of elements that do not belong to the same
    /// row and column.
    ///
    /// **This is not the multiplicative inverse**: the result is the
    /// transpose with off-diagonal signs flipped, and is never divided by
    /// the determinant. The contract is kept this way on purpose (see the
    /// crate-level docs).
    ///
    /// Returns a [`MatrixError::NotSquare`] for non-square matrices.
    pub fn inverse(&self) -> Result<GenericMatrix<T>> {
        // A matrix must be square for it to have an inverse
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }

        let mut ret = GenericMatrix::zeroes(self.nrows, self.ncols);

        for i in 0..self.nrows {
            for j in 0..self.ncols {
                let v = self.data[self.index(i, j)];
                let v = if i == j { v } else { -v };
                let ret_i = ret.index(j, i);
                ret.data[ret_i] = v;
            }
        }

        Ok(ret)
    }

    /// Computes the determinant.
    ///
    /// For 1x1 and 2x2 matrices the closed forms are used; anything larger
    /// recurses through a [Laplace expansion](https://en.wikipedia.org/wiki/Laplace_expansion)
    /// along the first row, allocating a fresh [`minor`](GenericMatrix::minor)
    /// per term. That is exponential time, which is acceptable for the small
    /// matrices this library is meant for.
    ///
    /// Returns a [`MatrixError::NotSquare`] for non-square matrices.
    pub fn determinant(&self) -> Result<T> {
        // The determinant only exists for square matrices
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }

        let length = self.nrows;

        // 1x1: the determinant is the only element
        if length == 1 {
            return Ok(self.data[0]);
        }

        // 2x2: determinant is ad - bc
        // | a b |
        // | c d |
        if length == 2 {
            return Ok(self.data[0] * self.data[3] - self.data[2] * self.data[1]);
        }

        // nxn: recursive solution using Laplace expansion along the first row
        let mut det = T::zero();
        for col in 0..length {
            // Get the minor matrix (excluding the first row and current column)
            let minor_det = self.minor(0, col).determinant()?;

            // Alternate signs: (-1)^(row+col) * element * determinant of minor
            let term = self.data[col] * minor_det;
            if col % 2 == 0 {
                det += term;
            } else {
                det -= term;
            }
        }

        Ok(det)
    }
}

impl<T: Numberish> PartialEq for GenericMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other)
    }
}

impl<T: Numberish> std::ops::Add<&GenericMatrix<T>> for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn add(self, other: &GenericMatrix<T>) -> Self::Output {
        self.from_add(other).unwrap()
    }
}

impl<T: Numberish> std::ops::AddAssign<&GenericMatrix<T>> for GenericMatrix<T> {
    fn add_assign(&mut self, other: &GenericMatrix<T>) {
        if self.ncols != other.ncols || self.nrows != other.nrows {
            panic!("Matrices being added are of different sizes");
        }

        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a += *b);
    }
}

impl<T: Numberish> std::ops::Sub<&GenericMatrix<T>> for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn sub(self, other: &GenericMatrix<T>) -> Self::Output {
        self.from_sub(other).unwrap()
    }
}

impl<T: Numberish> std::ops::SubAssign<&GenericMatrix<T>> for GenericMatrix<T> {
    fn sub_assign(&mut self, other: &GenericMatrix<T>) {
        if self.ncols != other.ncols || self.nrows != other.nrows {
            panic!("Matrices being substracted are of different sizes");
        }

        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a -= *b);
    }
}

impl<T: Numberish> std::ops::Mul<&GenericMatrix<T>> for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn mul(self, other: &GenericMatrix<T>) -> Self::Output {
        self.from_prod(other).unwrap()
    }
}

impl<T: Numberish> std::ops::Mul<T> for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn mul(self, s: T) -> Self::Output {
        self.from_scale(s)
    }
}

impl<T: Numberish> std::ops::MulAssign<T> for GenericMatrix<T> {
    fn mul_assign(&mut self, s: T) {
        self.data.iter_mut().for_each(|a| *a *= s);
    }
}

impl<T: Numberish> std::ops::Div<T> for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn div(self, s: T) -> Self::Output {
        self.from_div_scalar(s).unwrap()
    }
}

impl<T: Numberish> std::ops::Div<&GenericMatrix<T>> for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn div(self, other: &GenericMatrix<T>) -> Self::Output {
        self.from_div(other).unwrap()
    }
}

impl<T: Numberish> std::ops::DivAssign<T> for GenericMatrix<T> {
    fn div_assign(&mut self, s: T) {
        if s == T::zero() {
            panic!("Matrix being divided by a zero scalar");
        }
        self.data.iter_mut().for_each(|a| *a /= s);
    }
}
