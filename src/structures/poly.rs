use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::algebra::field::{Field, FiniteField};
use crate::algebra::ring::Ring;

/// Dense univariate polynomial over a field.
///
/// Coefficients are stored in ascending order of degree: `coeffs[i]` is the
/// coefficient of `x^i`. The zero polynomial is the empty coefficient
/// vector, and no operation ever leaves a trailing zero behind.
///
/// # Example
///
/// ```
/// use berlek::{Gf, Poly};
///
/// type F8 = Gf<2, 3, 0b1011>;
///
/// // 1 + x + x^2 over GF(8)
/// let p = Poly::new(vec![F8::new(1), F8::new(1), F8::new(1)]);
/// assert_eq!(p.degree(), Some(2));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Poly<F> {
    coeffs: Vec<F>,
}

impl<F: Field> Poly<F> {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// Trailing zeros are removed.
    pub fn new(coeffs: Vec<F>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    /// Create the zero polynomial.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Create a constant polynomial.
    pub fn constant(c: F) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self { coeffs: vec![c] }
        }
    }

    /// Create the polynomial `x`.
    pub fn x() -> Self {
        Self {
            coeffs: vec![F::ZERO, F::ONE],
        }
    }

    /// Create a monomial `c * x^n`.
    pub fn monomial(c: F, n: usize) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![F::ZERO; n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Create a polynomial from its roots: `(x - r1)(x - r2)...(x - rn)`.
    pub fn from_roots(roots: &[F]) -> Self {
        let mut result = Self::constant(F::ONE);
        for &root in roots {
            result = result * Self::new(vec![-root, F::ONE]);
        }
        result
    }

    /// Check if this is the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Check if this is the constant polynomial one.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    /// The number of stored coefficients; zero for the zero polynomial,
    /// degree + 1 otherwise.
    #[inline]
    pub fn size(&self) -> usize {
        self.coeffs.len()
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial, `Some(n)` otherwise where
    /// `n` is the highest power with a non-zero coefficient.
    pub fn degree(&self) -> Option<usize> {
        if self.coeffs.is_empty() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<F> {
        self.coeffs.last().copied()
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the polynomial's degree.
    pub fn coeff(&self, i: usize) -> F {
        self.coeffs.get(i).copied().unwrap_or(F::ZERO)
    }

    /// Get a slice of all coefficients.
    pub fn coefficients(&self) -> &[F] {
        &self.coeffs
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// # Example
    ///
    /// ```
    /// use berlek::{Gf, Poly, Ring};
    ///
    /// type F8 = Gf<2, 3, 0b1011>;
    ///
    /// // p(x) = 1 + x^2
    /// let p = Poly::new(vec![F8::ONE, F8::ZERO, F8::ONE]);
    /// // p(3) = 1 + 3*3 = 1 ^ 5 = 4
    /// assert_eq!(p.eval(F8::new(3)), F8::new(4));
    /// ```
    pub fn eval(&self, x: F) -> F {
        let mut result = F::ZERO;
        for &coeff in self.coeffs.iter().rev() {
            result = result * x + coeff;
        }
        result
    }

    /// Remove trailing zero coefficients.
    fn normalize(&mut self) {
        while self.coeffs.last() == Some(&F::ZERO) {
            self.coeffs.pop();
        }
    }

    /// Return the monic associate (every coefficient divided by the
    /// leading one).
    ///
    /// Returns `None` if the polynomial is zero.
    pub fn monic(&self) -> Option<Self> {
        let lc = self.leading_coeff()?;
        let inv = lc.inverse()?;
        Some(self.clone() * inv)
    }

    /// Divide through by the leading coefficient in place. A no-op on the
    /// zero polynomial and on polynomials that are already monic.
    pub fn make_monic(&mut self) {
        let Some(lc) = self.leading_coeff() else {
            return;
        };
        if lc.is_one() {
            return;
        }
        let inv = lc.inverse().expect("leading coefficient is nonzero");
        for coeff in &mut self.coeffs {
            *coeff = *coeff * inv;
        }
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` such that `self = q * divisor + r` and
    /// `deg(r) < deg(divisor)`.
    ///
    /// Returns `None` if the divisor is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use berlek::{Gf, Poly, Ring};
    ///
    /// type F8 = Gf<2, 3, 0b1011>;
    ///
    /// // (x^2 + 1) = (x + 1)^2 over a characteristic-2 field
    /// let dividend = Poly::new(vec![F8::ONE, F8::ZERO, F8::ONE]);
    /// let divisor = Poly::new(vec![F8::ONE, F8::ONE]);
    /// let (q, r) = dividend.div_rem(&divisor).unwrap();
    ///
    /// assert_eq!(q, divisor);
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }

        let divisor_deg = divisor.degree()?;
        match self.degree() {
            None => return Some((Self::zero(), Self::zero())),
            Some(d) if d < divisor_deg => return Some((Self::zero(), self.clone())),
            _ => {}
        }

        let lc_inv = divisor.leading_coeff()?.inverse()?;
        let mut remainder = self.clone();
        let mut quotient_coeffs = vec![F::ZERO; self.coeffs.len() - divisor.coeffs.len() + 1];

        while let Some(rem_deg) = remainder.degree() {
            if rem_deg < divisor_deg {
                break;
            }

            let coeff = remainder.coeffs[rem_deg] * lc_inv;
            let shift = rem_deg - divisor_deg;
            quotient_coeffs[shift] = coeff;

            // remainder -= coeff * x^shift * divisor; coeff is nonzero,
            // the loop only ever sees a trimmed leading term.
            for (i, &d_coeff) in divisor.coeffs.iter().enumerate() {
                remainder.coeffs[i + shift] = remainder.coeffs[i + shift] - coeff * d_coeff;
            }
            remainder.normalize();
        }

        Some((Self::new(quotient_coeffs), remainder))
    }

    /// Compute the remainder of division.
    ///
    /// Returns `None` if the divisor is zero.
    pub fn rem(&self, divisor: &Self) -> Option<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Compute the greatest common divisor of two polynomials.
    ///
    /// The result is monic unless both inputs are zero.
    ///
    /// # Example
    ///
    /// ```
    /// use berlek::{Gf, Poly, Ring};
    ///
    /// type F8 = Gf<2, 3, 0b1011>;
    ///
    /// let p1 = Poly::from_roots(&[F8::new(2), F8::new(5)]);
    /// let p2 = Poly::from_roots(&[F8::new(5), F8::new(7)]);
    /// let g = Poly::gcd(&p1, &p2);
    ///
    /// // g = x - 5, monic with root 5
    /// assert_eq!(g.degree(), Some(1));
    /// assert!(g.eval(F8::new(5)).is_zero());
    /// ```
    pub fn gcd(a: &Self, b: &Self) -> Self {
        if b.is_zero() {
            return a.monic().unwrap_or_else(Self::zero);
        }

        let r = a.rem(b).unwrap_or_else(Self::zero);
        Self::gcd(b, &r)
    }

    /// Compute `self^exp` by repeated squaring.
    pub fn pow(&self, exp: u32) -> Self {
        let mut result = Self::constant(F::ONE);
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result * &base;
            }
            base = base.clone() * &base;
            e >>= 1;
        }
        result
    }
}

impl<F: FiniteField> Poly<F> {
    /// The formal derivative Σ i·aᵢ·x^{i−1}.
    ///
    /// The integer i enters the field reduced modulo the characteristic,
    /// so in GF(p^k) every term with p | i vanishes; a zero derivative
    /// therefore signals a perfect p-th power rather than a constant.
    ///
    /// # Example
    ///
    /// ```
    /// use berlek::{Gf, Poly, Ring};
    ///
    /// type F8 = Gf<2, 3, 0b1011>;
    ///
    /// // (x^2)' = 2x = 0 in characteristic 2
    /// let square = Poly::monomial(F8::ONE, 2);
    /// assert!(square.derivative().is_zero());
    ///
    /// // (x^3 + x^2 + 1)' = 3x^2 + 2x = x^2
    /// let p = Poly::new(vec![F8::ONE, F8::ZERO, F8::ONE, F8::ONE]);
    /// assert_eq!(p.derivative(), Poly::monomial(F8::ONE, 2));
    /// ```
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &a)| F::from_base(i as u32 % F::CHARACTERISTIC) * a)
            .collect();
        Self::new(coeffs)
    }
}

/* ---- total order ---- */

/// Orders first by length, then lexicographically on the packed coefficient
/// encoding from the constant term upward. Not algebraically meaningful;
/// used to key the exponent maps built during factorization.
impl<F: Field + Ord> Ord for Poly<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coeffs
            .len()
            .cmp(&other.coeffs.len())
            .then_with(|| self.coeffs.cmp(&other.coeffs))
    }
}

impl<F: Field + Ord> PartialOrd for Poly<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/* ---- arithmetic operators ---- */

fn add_impl<F: Field>(a: &Poly<F>, b: &Poly<F>) -> Poly<F> {
    let max_len = a.coeffs.len().max(b.coeffs.len());
    let mut coeffs = Vec::with_capacity(max_len);
    for i in 0..max_len {
        coeffs.push(a.coeff(i) + b.coeff(i));
    }
    Poly::new(coeffs)
}

fn sub_impl<F: Field>(a: &Poly<F>, b: &Poly<F>) -> Poly<F> {
    let max_len = a.coeffs.len().max(b.coeffs.len());
    let mut coeffs = Vec::with_capacity(max_len);
    for i in 0..max_len {
        coeffs.push(a.coeff(i) - b.coeff(i));
    }
    Poly::new(coeffs)
}

/// Schoolbook multiplication, skipping outer rows whose coefficient is
/// zero; sparse operands and constants profit measurably.
fn mul_impl<F: Field>(a: &Poly<F>, b: &Poly<F>) -> Poly<F> {
    if a.is_zero() || b.is_zero() {
        return Poly::zero();
    }
    let mut coeffs = vec![F::ZERO; a.coeffs.len() + b.coeffs.len() - 1];
    for (i, &x) in a.coeffs.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, &y) in b.coeffs.iter().enumerate() {
            coeffs[i + j] = coeffs[i + j] + x * y;
        }
    }
    Poly::new(coeffs)
}

impl<F: Field> Add for Poly<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add_impl(&self, &rhs)
    }
}

impl<F: Field> Add<&Poly<F>> for Poly<F> {
    type Output = Self;

    fn add(self, rhs: &Poly<F>) -> Self::Output {
        add_impl(&self, rhs)
    }
}

impl<F: Field> Neg for Poly<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let coeffs = self.coeffs.into_iter().map(|c| -c).collect();
        Self { coeffs }
    }
}

impl<F: Field> Sub for Poly<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        sub_impl(&self, &rhs)
    }
}

impl<F: Field> Sub<&Poly<F>> for Poly<F> {
    type Output = Self;

    fn sub(self, rhs: &Poly<F>) -> Self::Output {
        sub_impl(&self, rhs)
    }
}

impl<F: Field> Mul for Poly<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_impl(&self, &rhs)
    }
}

impl<F: Field> Mul<&Poly<F>> for Poly<F> {
    type Output = Self;

    fn mul(self, rhs: &Poly<F>) -> Self::Output {
        mul_impl(&self, rhs)
    }
}

/// Polynomial division discarding the remainder.
///
/// # Panics
///
/// Panics if the divisor is zero.
impl<F: Field> Div<&Poly<F>> for Poly<F> {
    type Output = Self;

    fn div(self, rhs: &Poly<F>) -> Self::Output {
        self.div_rem(rhs).expect("polynomial division by zero").0
    }
}

impl<F: Field> Div for Poly<F> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self / &rhs
    }
}

/// Polynomial remainder.
///
/// # Panics
///
/// Panics if the divisor is zero.
impl<F: Field> Rem<&Poly<F>> for Poly<F> {
    type Output = Self;

    fn rem(self, rhs: &Poly<F>) -> Self::Output {
        self.div_rem(rhs).expect("polynomial remainder by zero").1
    }
}

impl<F: Field> Rem for Poly<F> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self % &rhs
    }
}

/* ---- scalar operators ---- */

/// Scalar addition acts on the constant term.
impl<F: Field> Add<F> for Poly<F> {
    type Output = Self;

    fn add(mut self, rhs: F) -> Self::Output {
        if self.coeffs.is_empty() {
            self.coeffs.push(rhs);
        } else {
            self.coeffs[0] = self.coeffs[0] + rhs;
        }
        self.normalize();
        self
    }
}

/// Scalar subtraction acts on the constant term.
impl<F: Field> Sub<F> for Poly<F> {
    type Output = Self;

    fn sub(mut self, rhs: F) -> Self::Output {
        if self.coeffs.is_empty() {
            self.coeffs.push(-rhs);
        } else {
            self.coeffs[0] = self.coeffs[0] - rhs;
        }
        self.normalize();
        self
    }
}

/// Scalar multiplication scales every coefficient.
impl<F: Field> Mul<F> for Poly<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self::Output {
        if rhs.is_zero() {
            return Self::zero();
        }
        let coeffs = self.coeffs.into_iter().map(|c| c * rhs).collect();
        Self::new(coeffs)
    }
}

/// Scalar division scales every coefficient by the inverse.
///
/// # Panics
///
/// Panics if the scalar is zero.
impl<F: Field> Div<F> for Poly<F> {
    type Output = Self;

    fn div(self, rhs: F) -> Self::Output {
        let inv = rhs.inverse().expect("scalar division by zero");
        self * inv
    }
}

/* ---- formatting ---- */

impl<F: Field + fmt::Display> fmt::Debug for Poly<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, &coeff) in self.coeffs.iter().enumerate() {
            if coeff.is_zero() {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{coeff}")?,
                1 if coeff.is_one() => write!(f, "x")?,
                1 => write!(f, "{coeff}*x")?,
                _ if coeff.is_one() => write!(f, "x^{i}")?,
                _ => write!(f, "{coeff}*x^{i}")?,
            }
        }

        Ok(())
    }
}

impl<F: Field + fmt::Display> fmt::Display for Poly<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/* ---- optional integrations ---- */

#[cfg(feature = "serde")]
impl<F: Field + serde::Serialize> serde::Serialize for Poly<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.coeffs.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, F: Field + serde::Deserialize<'de>> serde::Deserialize<'de> for Poly<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let coeffs = Vec::<F>::deserialize(deserializer)?;
        Ok(Self::new(coeffs))
    }
}
