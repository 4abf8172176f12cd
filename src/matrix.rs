//! The concrete integer matrix used throughout the binaries and the printer.

use crate::generic_matrix::GenericMatrix;
use crate::Int;

/// A shorthand for `GenericMatrix<Int>`; i.e., a normal
/// matrix. Note that `Int` is defined as `i64` if the feature `wide`
/// is utilized; otherwise, it defaults to `i32`.
pub type Matrix = GenericMatrix<Int>;
