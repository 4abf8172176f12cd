//! The requirements a type must meet for [`GenericMatrix`](crate::GenericMatrix)
//! to be built over it.

use serde::Serialize;

/// A simple trait required for initializing some matrices (e.g., the
/// identity matrix)
pub trait OneZero {
    /// Returns an element considered to be 0.
    fn zero() -> Self;

    /// Returns an element considered to be 1.
    fn one() -> Self;
}

impl OneZero for i32 {
    fn zero() -> Self {
        0
    }
    fn one() -> Self {
        1
    }
}

impl OneZero for i64 {
    fn zero() -> Self {
        0
    }
    fn one() -> Self {
        1
    }
}

/// Define the basic algebraic requirements for the elements of a
/// [`GenericMatrix`](crate::GenericMatrix).
///
/// `Rem` is needed by the digit-counting logic in [`print`](crate::print),
/// and `Neg` by the sign flips of the cofactor transform.
pub trait Numberish:
    Copy
    + Clone
    + OneZero
    + PartialEq
    + Sized
    + std::fmt::Display
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::AddAssign
    + std::ops::SubAssign
    + std::ops::Mul<Output = Self>
    + std::ops::MulAssign
    + std::ops::Div<Output = Self>
    + std::ops::DivAssign
    + std::ops::Rem<Output = Self>
    + std::ops::Neg<Output = Self>
    + Sync
    + Send
    + Serialize
{
}

impl<
        T: Copy
            + Clone
            + OneZero
            + PartialEq
            + Sized
            + std::fmt::Display
            + std::fmt::Debug
            + std::ops::Add<Output = Self>
            + std::ops::Sub<Output = Self>
            + std::ops::AddAssign
            + std::ops::SubAssign
            + std::ops::Mul<Output = Self>
            + std::ops::MulAssign
            + std::ops::Div<Output = Self>
            + std::ops::DivAssign
            + std::ops::Rem<Output = Self>
            + std::ops::Neg<Output = Self>
            + Sync
            + Send
            + Serialize,
    > Numberish for T
{
}
