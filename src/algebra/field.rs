use super::ring::Ring;

/// A (commutative) field.
///
/// Extends `Ring` with multiplicative inverses for all non-zero elements.
pub trait Field: Ring {
    /// Multiplicative inverse `a⁻¹`, if it exists.
    ///
    /// For a true field:
    /// - `self == ZERO`  ⇒  `None`
    /// - otherwise       ⇒  `Some(a⁻¹)`
    fn inverse(self) -> Option<Self>;

    /// Safe division: returns `None` on division by zero.
    #[inline]
    fn try_div(self, rhs: Self) -> Option<Self> {
        rhs.inverse().map(|inv| self * inv)
    }
}

/// A finite field 𝔽_q with q = p^k elements.
///
/// Adds the structure the factorization algorithms need on top of [`Field`]:
/// the characteristic and extension degree, exponentiation, embedding of
/// integer constants, and enumeration of every element.
pub trait FiniteField: Field {
    /// The prime characteristic p.
    const CHARACTERISTIC: u32;

    /// The extension degree k.
    const DEGREE: u32;

    /// The number of elements q = p^k.
    const ORDER: u32;

    /// The base-field constant obtained by reducing `value` modulo p.
    ///
    /// Used e.g. by the polynomial derivative, where the integer exponent
    /// `i` enters the field as `i mod p`.
    fn from_base(value: u32) -> Self;

    /// Compute `self^exp`.
    ///
    /// `0^0` is `ONE` by convention; `0^n` is `ZERO` for n > 0.
    fn pow(self, exp: u64) -> Self;

    /// Every element of the field, zero first, in a canonical order.
    fn elements() -> Vec<Self>;
}
