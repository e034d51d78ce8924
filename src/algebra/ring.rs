use core::ops::{Add, Mul, Neg, Sub};

/// A commutative ring of cheap value types.
///
/// This trait assumes:
/// - (R, +) is an abelian group with identity ZERO
/// - (R, ·) is a commutative monoid with identity ONE
/// - multiplication distributes over addition.
///
/// Elements are `Copy`: every implementor in this crate is a small integer
/// wrapper, and the polynomial and solver code relies on moving coefficients
/// around freely.
pub trait Ring:
    Sized
    + Copy
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}
