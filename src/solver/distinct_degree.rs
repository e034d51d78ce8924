//! Distinct-degree refinement of the square-free splitter.
//!
//! Instead of handing a whole square-free polynomial to the kernel-basis
//! splitter, this variant first separates its factors by degree: the gcd
//! with x^{q^j} − x collects exactly the irreducible factors of degree
//! dividing j, so peeling in increasing j isolates products of equal-degree
//! factors cheaply. Only the products that still hold several factors fall
//! back to the kernel-basis split.
//!
//! The powers x^{q^j} mod f are walked with the precomputed Frobenius
//! matrix: raising to the q-th power is linear over GF(q), so one
//! vector-matrix product per step replaces a full modular exponentiation.

use core::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::algebra::field::FiniteField;
use crate::algebra::ring::Ring;
use crate::structures::poly::Poly;

use super::berlekamp::{frobenius_matrix, split_square_free};
use super::decompose;

/// Factorizer combining distinct-degree separation with Berlekamp
/// splitting.
///
/// Produces exactly the same factorizations as [`Berlekamp`]; only the
/// amount of linear-algebra work per square-free part differs.
///
/// [`Berlekamp`]: super::berlekamp::Berlekamp
///
/// # Example
///
/// ```
/// use berlek::{DistinctDegree, Gf, Poly, Ring};
///
/// type F2 = Gf<2, 1, 0b11>;
///
/// // x^2 + x = x(x + 1)
/// let f = Poly::new(vec![F2::ZERO, F2::ONE, F2::ONE]);
/// let factors = DistinctDegree::new().factorize(&f);
///
/// assert_eq!(factors.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct DistinctDegree<F> {
    metric: AtomicU64,
    _field: PhantomData<F>,
}

impl<F: FiniteField + Ord> DistinctDegree<F> {
    pub fn new() -> Self {
        Self {
            metric: AtomicU64::new(0),
            _field: PhantomData,
        }
    }

    /// Factor `poly` into monic irreducible factors with multiplicities.
    ///
    /// Same contract as [`Berlekamp::factorize`]: leading coefficient
    /// discarded, empty result for zero and constants, distinct sorted
    /// factors.
    ///
    /// [`Berlekamp::factorize`]: super::berlekamp::Berlekamp::factorize
    pub fn factorize(&self, poly: &Poly<F>) -> Vec<(Poly<F>, u32)> {
        let mut f = poly.clone();
        f.make_monic();
        if f.is_zero() || f.is_one() {
            return Vec::new();
        }
        decompose(f, &mut |square_free| self.split_by_degree(square_free))
            .into_iter()
            .collect()
    }

    /// Total splitting work performed so far, in coefficient-count units.
    pub fn metric(&self) -> u64 {
        self.metric.load(Ordering::Relaxed)
    }

    /// Split monic square-free f by peeling the product of its degree-j
    /// factors for j = 1, 2, …; a peeled product that holds more than one
    /// factor is finished off with the kernel-basis split.
    fn split_by_degree(&self, f: Poly<F>) -> Vec<Poly<F>> {
        let matrix = frobenius_matrix(&f);
        let x = Poly::<F>::x();

        let mut result = Vec::new();
        let mut remaining = f;
        let mut current = x.clone();
        let mut degree = 1;
        while 2 * degree < remaining.size() {
            // current walks x^{q^j} mod f; gcds against divisors of f are
            // unaffected by the extra reduction modulo f itself.
            current = apply_matrix(&current, &matrix);
            self.metric.fetch_add(remaining.size() as u64, Ordering::Relaxed);

            let peeled = Poly::gcd(&remaining, &(current.clone() - &x));
            if peeled.size() > 1 {
                remaining = remaining / &peeled;
                if peeled.size() == degree + 1 {
                    // a single irreducible factor of this degree
                    result.push(peeled);
                } else {
                    result.extend(split_square_free(peeled, &self.metric));
                }
            }
            degree += 1;
        }
        if remaining.size() > 1 {
            result.push(remaining);
        }
        result
    }
}

/// Apply the Frobenius matrix to a polynomial of degree below the matrix
/// dimension: (yB)_j = Σ_i y_i B_{ij}, i.e. y ↦ y^q mod f.
fn apply_matrix<F: FiniteField>(poly: &Poly<F>, matrix: &[Vec<F>]) -> Poly<F> {
    let n = matrix.len();
    let mut result = vec![F::ZERO; n];
    for (i, &coeff) in poly.coefficients().iter().enumerate() {
        if coeff.is_zero() {
            continue;
        }
        for (j, value) in result.iter_mut().enumerate() {
            *value = *value + coeff * matrix[i][j];
        }
    }
    Poly::new(result)
}
