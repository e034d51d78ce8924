//! Galois field elements with compile-time parameters.
//!
//! [`Gf<P, K, G>`] is an element of GF(P^K) built over the root α of the
//! primitive polynomial packed into `G` (see [`pack`]). The element itself
//! is a single packed integer; all arithmetic goes through the shared
//! [`LogTable`] for the `(P, K, G)` triple, built once per process.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::algebra::field::{Field, FiniteField};
use crate::algebra::ring::Ring;
use crate::structures::table::{self, FieldError, LogTable};
use crate::utils::bin_pow;

pub use crate::structures::table::pack;

/// An element of GF(P^K), where `G` packs a primitive polynomial of degree
/// K over GF(P) in base-P digits, leading coefficient included.
///
/// For P = 2 the packing is the familiar bitmask form, so
/// `Gf<2, 3, 0b1011>` is GF(8) built over x³ + x + 1. Use
/// [`primitive_poly`] for known-good generators of common small fields.
///
/// The comparison order is the order of the packed values; it carries no
/// algebraic meaning and exists so polynomials over the field can key maps.
///
/// # Example
///
/// ```
/// use berlek::{Field, Gf};
///
/// type F8 = Gf<2, 3, 0b1011>;
///
/// let a = F8::new(3);
/// assert_eq!((a * a).value(), 5);
/// assert_eq!(a.inverse().unwrap().value(), 6);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gf<const P: u32, const K: u32, const G: u32> {
    value: u32,
}

/// Known primitive polynomials for common small fields, packed.
///
/// Every entry has been checked to be primitive (its root generates the
/// whole multiplicative group), which the log-table construction requires;
/// an irreducible-but-imprimitive polynomial such as the AES octic is
/// deliberately absent.
///
/// # Example
///
/// ```
/// use berlek::{primitive_poly, Gf};
///
/// const G8: u32 = primitive_poly(2, 3).unwrap();
/// type F8 = Gf<2, 3, G8>;
/// assert_eq!(F8::ORDER, 8);
/// ```
pub const fn primitive_poly(p: u32, k: u32) -> Option<u32> {
    match (p, k) {
        (2, 1) => Some(0b11),            // x + 1
        (2, 2) => Some(0b111),           // x^2 + x + 1
        (2, 3) => Some(0b1011),          // x^3 + x + 1
        (2, 4) => Some(0b10011),         // x^4 + x + 1
        (2, 5) => Some(0b100101),        // x^5 + x^2 + 1
        (2, 6) => Some(0b1000011),       // x^6 + x + 1
        (2, 7) => Some(0b10000011),      // x^7 + x + 1
        (2, 8) => Some(0b1_0001_1101),   // x^8 + x^4 + x^3 + x^2 + 1
        (3, 1) => Some(pack(3, &[1, 1])), // x + 1, root 2
        (3, 2) => Some(pack(3, &[2, 2, 1])), // x^2 + 2x + 2
        (3, 3) => Some(pack(3, &[1, 2, 0, 1])), // x^3 + 2x + 1
        (5, 1) => Some(pack(5, &[3, 1])), // x − 2, root 2
        (5, 2) => Some(pack(5, &[2, 4, 1])), // x^2 + 4x + 2
        (7, 1) => Some(pack(7, &[4, 1])), // x − 3, root 3
        _ => None,
    }
}

impl<const P: u32, const K: u32, const G: u32> Gf<P, K, G> {
    /// The number of elements q = P^K.
    pub const ORDER: u32 = bin_pow(P as u64, K as u64) as u32;

    /// Create an element from its packed value, reduced into `[0, q)`.
    #[inline]
    pub fn new(value: u32) -> Self {
        Self {
            value: value % Self::ORDER,
        }
    }

    /// Create an element from low-to-high coefficients over GF(P).
    ///
    /// Coefficients beyond degree K − 1 are ignored; each is reduced mod P.
    ///
    /// # Example
    ///
    /// ```
    /// use berlek::Gf;
    ///
    /// type F9 = Gf<3, 2, 17>;
    ///
    /// // 2 + α
    /// let a = F9::from_coeffs(&[2, 1]);
    /// assert_eq!(a.value(), 5);
    /// assert_eq!(a.coeff(0), 2);
    /// assert_eq!(a.coeff(1), 1);
    /// ```
    pub fn from_coeffs(coeffs: &[u32]) -> Self {
        let len = coeffs.len().min(K as usize);
        Self::new(pack(P, &coeffs[..len]))
    }

    /// The packed value in `[0, q)`.
    #[inline]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// The i-th coefficient over GF(P), zero beyond degree K − 1.
    #[inline]
    pub const fn coeff(self, i: u32) -> u32 {
        if i >= K {
            return 0;
        }
        (self.value / bin_pow(P as u64, i as u64) as u32) % P
    }

    /// Discrete log with respect to α, `None` for zero.
    #[inline]
    pub fn log(self) -> Option<u32> {
        if self.value == 0 {
            None
        } else {
            Some(Self::table().log_of(self.value))
        }
    }

    /// Validate the `(P, K, G)` parameters without touching the shared
    /// registry.
    ///
    /// Call this at startup for an early, typed failure; the arithmetic
    /// operators themselves panic on an invalid triple.
    ///
    /// # Example
    ///
    /// ```
    /// use berlek::Gf;
    ///
    /// assert!(Gf::<2, 3, 0b1011>::validate().is_ok());
    /// // x^2 + 1 = (x + 1)^2 is not irreducible over GF(2)
    /// assert!(Gf::<2, 2, 0b101>::validate().is_err());
    /// ```
    pub fn validate() -> Result<(), FieldError> {
        LogTable::new(P, K, G).map(|_| ())
    }

    /// The shared log table backing this field.
    #[inline]
    pub fn table() -> &'static LogTable {
        table::shared(P, K, G)
    }
}

impl<const P: u32, const K: u32, const G: u32> fmt::Debug for Gf<P, K, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gf<{}^{}>({})", P, K, self.value)
    }
}

impl<const P: u32, const K: u32, const G: u32> fmt::Display for Gf<P, K, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/* ---- From/Into conversions ---- */

impl<const P: u32, const K: u32, const G: u32> From<u32> for Gf<P, K, G> {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl<const P: u32, const K: u32, const G: u32> From<u8> for Gf<P, K, G> {
    fn from(value: u8) -> Self {
        Self::new(value as u32)
    }
}

impl<const P: u32, const K: u32, const G: u32> From<Gf<P, K, G>> for u32 {
    fn from(element: Gf<P, K, G>) -> Self {
        element.value()
    }
}

/* ---- standard arithmetic operators ---- */

impl<const P: u32, const K: u32, const G: u32> Add for Gf<P, K, G> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: Self::table().add(self.value, rhs.value),
        }
    }
}

impl<const P: u32, const K: u32, const G: u32> Sub for Gf<P, K, G> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            value: Self::table().sub(self.value, rhs.value),
        }
    }
}

impl<const P: u32, const K: u32, const G: u32> Neg for Gf<P, K, G> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            value: Self::table().neg(self.value),
        }
    }
}

impl<const P: u32, const K: u32, const G: u32> Mul for Gf<P, K, G> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            value: Self::table().mul(self.value, rhs.value),
        }
    }
}

/// Division implemented via the antilog table.
///
/// # Panics
///
/// Panics on division by zero.
impl<const P: u32, const K: u32, const G: u32> Div for Gf<P, K, G> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            value: Self::table().div(self.value, rhs.value),
        }
    }
}

/* ---- algebra traits ---- */

impl<const P: u32, const K: u32, const G: u32> Ring for Gf<P, K, G> {
    const ZERO: Self = Self { value: 0 };
    const ONE: Self = Self { value: 1 };
}

impl<const P: u32, const K: u32, const G: u32> Field for Gf<P, K, G> {
    #[inline]
    fn inverse(self) -> Option<Self> {
        if self.value == 0 {
            return None;
        }
        Some(Self {
            value: Self::table().inv(self.value),
        })
    }
}

impl<const P: u32, const K: u32, const G: u32> FiniteField for Gf<P, K, G> {
    const CHARACTERISTIC: u32 = P;
    const DEGREE: u32 = K;
    const ORDER: u32 = bin_pow(P as u64, K as u64) as u32;

    #[inline]
    fn from_base(value: u32) -> Self {
        Self { value: value % P }
    }

    #[inline]
    fn pow(self, exp: u64) -> Self {
        Self {
            value: Self::table().pow(self.value, exp),
        }
    }

    fn elements() -> Vec<Self> {
        (0..Self::ORDER).map(|value| Self { value }).collect()
    }
}

/* ---- optional integrations ---- */

#[cfg(feature = "rand")]
impl<const P: u32, const K: u32, const G: u32> rand::distributions::Distribution<Gf<P, K, G>>
    for rand::distributions::Standard
{
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Gf<P, K, G> {
        Gf::new(rng.gen_range(0..Gf::<P, K, G>::ORDER))
    }
}

#[cfg(feature = "serde")]
impl<const P: u32, const K: u32, const G: u32> serde::Serialize for Gf<P, K, G> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const P: u32, const K: u32, const G: u32> serde::Deserialize<'de> for Gf<P, K, G> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}
