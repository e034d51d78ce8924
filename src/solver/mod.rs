//! Factorization drivers.
//!
//! Both solvers share the same outer loop: strip the leading coefficient,
//! peel square-free parts off via the gcd with the derivative, and hand
//! each square-free part to a splitter. They differ only in how that
//! splitter carves a square-free polynomial into its irreducible factors.

pub mod berlekamp;
pub mod distinct_degree;

use std::collections::BTreeMap;

use crate::algebra::field::FiniteField;
use crate::structures::poly::Poly;
use crate::utils::bin_pow;

/// Factor a monic, non-constant polynomial into `(irreducible, exponent)`
/// pairs, using `split` to break monic square-free polynomials into their
/// distinct irreducible factors.
///
/// The outer loop terminates because the degree of `f` strictly decreases:
/// either the gcd with the derivative drops it, or the p-th root shortens
/// it by a factor of p.
pub(crate) fn decompose<F, S>(mut f: Poly<F>, split: &mut S) -> BTreeMap<Poly<F>, u32>
where
    F: FiniteField + Ord,
    S: FnMut(Poly<F>) -> Vec<Poly<F>>,
{
    let mut result = BTreeMap::new();
    while !f.is_one() {
        let derivative = f.derivative();
        if derivative.is_zero() {
            // Every exponent in f is a multiple of p, so f = r^p for the
            // p-th root r. Rare enough that recursing is fine.
            let root = char_root(&f);
            for (factor, power) in decompose(root, split) {
                *result.entry(factor).or_insert(0) += power * F::CHARACTERISTIC;
            }
            break;
        }
        // gcd is monic; f / gcd has no repeated factors.
        let gcd = Poly::gcd(&f, &derivative);
        let square_free = f.clone() / &gcd;
        for factor in split(square_free) {
            *result.entry(factor).or_insert(0) += 1;
        }
        f = gcd;
    }
    result
}

/// The p-th root of a polynomial whose derivative vanishes.
///
/// With f' = 0 only every p-th coefficient is populated, and in GF(p^k)
/// the inverse Frobenius on a coefficient is the p^{k−1}-th power. The
/// fields this crate supports are small; the exponent always fits u64.
pub(crate) fn char_root<F: FiniteField>(f: &Poly<F>) -> Poly<F> {
    let p = F::CHARACTERISTIC as usize;
    let inverse_frobenius = bin_pow(F::CHARACTERISTIC as u64, F::DEGREE as u64 - 1);
    let coeffs = f
        .coefficients()
        .iter()
        .step_by(p)
        .map(|&a| a.pow(inverse_frobenius))
        .collect();
    Poly::new(coeffs)
}
