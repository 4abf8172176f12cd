/// The failure conditions of matrix operations.
///
/// Every fallible operation reports exactly one of these; nothing is
/// recovered internally, errors just bubble up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// A row or column index outside the matrix.
    #[error("position ({row},{col}) is out of bounds for a {nrows} by {ncols} matrix")]
    OutOfBounds {
        /// The offending row index
        row: usize,
        /// The offending column index
        col: usize,
        /// Number of rows in the matrix
        nrows: usize,
        /// Number of columns in the matrix
        ncols: usize,
    },

    /// Operand shapes are incompatible for addition, subtraction or
    /// multiplication.
    #[error("cannot {op} a {} by {} matrix and a {} by {} matrix", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        /// The operation that was attempted (e.g., "add")
        op: &'static str,
        /// Shape of the left operand
        left: (usize, usize),
        /// Shape of the right operand
        right: (usize, usize),
    },

    /// Scalar division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Determinant or inverse requested on a non-square matrix.
    #[error("operation requires a square matrix, but this one is {nrows} by {ncols}")]
    NotSquare {
        /// Number of rows in the matrix
        nrows: usize,
        /// Number of columns in the matrix
        ncols: usize,
    },
}

/// A shorthand for results carrying a [`MatrixError`].
pub type Result<T> = std::result::Result<T, MatrixError>;
