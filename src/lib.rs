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

#![deny(missing_docs)]

//! A library for small integer-matrix arithmetic.
//!
//! It is built generically (i.e., `GenericMatrix<T: Numberish>` where `Numberish` is a
//! basic numeric Trait) so that the same operations work over `i32` or `i64`.
//! The concrete `Matrix` alias is the type meant for everyday use.
//!
//! Matrices are values: every operation either returns a freshly allocated,
//! independent result or mutates the receiver in place. Determinants are
//! computed by literal Laplace expansion, which is fine for the small
//! matrices this library targets and hopeless for anything else.
//!
//! # A warning about `inverse()`
//! [`GenericMatrix::inverse`] is **not** the multiplicative inverse: it
//! transposes the matrix and flips the sign of every off-diagonal element,
//! without dividing by the determinant. Matrix division (`&a / &b`) is built
//! on top of it and inherits the same caveat. This odd contract is kept for
//! compatibility with the systems this library exchanges results with.

/// The kind of integer used in the library... the `"wide"` feature
/// means it becomes `i64`, and `i32` is used otherwise.
#[cfg(feature = "wide")]
pub type Int = i64;

/// The kind of integer used in the library... the `"wide"` feature
/// means it becomes `i64`, and `i32` is used otherwise.
#[cfg(not(feature = "wide"))]
pub type Int = i32;

mod error;
pub mod generic_matrix;
pub mod matrix;
pub mod print;
pub mod traits;

pub use error::{MatrixError, Result};
pub use generic_matrix::GenericMatrix;
pub use matrix::Matrix;
