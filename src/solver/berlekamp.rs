//! Berlekamp's factorization algorithm.
//!
//! The splitter works inside the quotient algebra GF(q)[x]/f. By the
//! Chinese remainder theorem that algebra is a product of one field per
//! distinct irreducible factor of a square-free f, and the fixed points of
//! the Frobenius map y ↦ y^q are exactly the elements that are constant in
//! every component. The kernel of (B − I), with B the matrix of the
//! Frobenius map, therefore has one basis vector per factor, and gcds with
//! shifted basis polynomials peel the factors apart.

use core::marker::PhantomData;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::algebra::field::{Field, FiniteField};
use crate::algebra::ring::Ring;
use crate::structures::poly::Poly;

use super::decompose;

/// Factorizer driving Berlekamp's algorithm.
///
/// Stateless apart from an instrumentation counter, so a single instance
/// may be shared across threads factoring independent inputs.
///
/// # Example
///
/// ```
/// use berlek::{Berlekamp, Gf, Poly, Ring};
///
/// type F2 = Gf<2, 1, 0b11>;
///
/// // x^2 + x = x(x + 1)
/// let f = Poly::new(vec![F2::ZERO, F2::ONE, F2::ONE]);
/// let factors = Berlekamp::new().factorize(&f);
///
/// assert_eq!(factors.len(), 2);
/// assert!(factors.iter().all(|(_, e)| *e == 1));
/// ```
#[derive(Debug, Default)]
pub struct Berlekamp<F> {
    metric: AtomicU64,
    _field: PhantomData<F>,
}

impl<F: FiniteField + Ord> Berlekamp<F> {
    pub fn new() -> Self {
        Self {
            metric: AtomicU64::new(0),
            _field: PhantomData,
        }
    }

    /// Factor `poly` into monic irreducible factors with multiplicities.
    ///
    /// The leading coefficient is discarded (the input is made monic
    /// first); zero and constant polynomials yield an empty result. The
    /// returned factors are distinct and sorted by the polynomial order.
    pub fn factorize(&self, poly: &Poly<F>) -> Vec<(Poly<F>, u32)> {
        let mut f = poly.clone();
        f.make_monic();
        if f.is_zero() || f.is_one() {
            return Vec::new();
        }
        decompose(f, &mut |square_free| {
            split_square_free(square_free, &self.metric)
        })
        .into_iter()
        .collect()
    }

    /// Total splitting work performed so far, in coefficient-count units.
    ///
    /// Accumulated with relaxed ordering from however many threads share
    /// the instance; purely observational.
    pub fn metric(&self) -> u64 {
        self.metric.load(Ordering::Relaxed)
    }
}

/// Factor a polynomial with a one-off [`Berlekamp`] solver.
///
/// # Example
///
/// ```
/// use berlek::{factor, Gf, Poly, Ring};
///
/// type F2 = Gf<2, 1, 0b11>;
///
/// // x^2 + x = x(x + 1)
/// let f = Poly::new(vec![F2::ZERO, F2::ONE, F2::ONE]);
/// assert_eq!(factor(&f).len(), 2);
/// ```
pub fn factor<F: FiniteField + Ord>(poly: &Poly<F>) -> Vec<(Poly<F>, u32)> {
    Berlekamp::new().factorize(poly)
}

impl<F: FiniteField + Ord> Poly<F> {
    /// Factor into monic irreducible factors with multiplicities.
    ///
    /// See [`Berlekamp::factorize`].
    ///
    /// # Example
    ///
    /// ```
    /// use berlek::{Gf, Poly, Ring};
    ///
    /// type F2 = Gf<2, 1, 0b11>;
    ///
    /// // (1 + x)^2 = 1 + x^2
    /// let f = Poly::new(vec![F2::ONE, F2::ZERO, F2::ONE]);
    /// let factors = f.factor();
    ///
    /// assert_eq!(factors, vec![(Poly::new(vec![F2::ONE, F2::ONE]), 2)]);
    /// ```
    pub fn factor(&self) -> Vec<(Poly<F>, u32)> {
        Berlekamp::new().factorize(self)
    }

    /// Separate the repeated factors: the result pairs (gᵢ, eᵢ) with
    /// every gᵢ square-free and the gᵢ pairwise coprime, the eᵢ strictly
    /// increasing, and the monic part of the input equal to Π gᵢ^{eᵢ}.
    ///
    /// Zero and constants come back empty, like [`factor`].
    ///
    /// # Example
    ///
    /// ```
    /// use berlek::{Gf, Poly, Ring};
    ///
    /// type F2 = Gf<2, 1, 0b11>;
    ///
    /// // x (1 + x)^2
    /// let x = Poly::<F2>::x();
    /// let f = x.clone() * Poly::new(vec![F2::ONE, F2::ONE]).pow(2);
    ///
    /// let parts = f.square_free_factorization();
    /// assert_eq!(parts[0], (x, 1));
    /// assert_eq!(parts[1], (Poly::new(vec![F2::ONE, F2::ONE]), 2));
    /// ```
    ///
    /// [`factor`]: Poly::factor
    pub fn square_free_factorization(&self) -> Vec<(Poly<F>, u32)> {
        let mut grouped: BTreeMap<u32, Poly<F>> = BTreeMap::new();
        for (factor, exponent) in self.factor() {
            let part = grouped
                .entry(exponent)
                .or_insert_with(|| Poly::constant(F::ONE));
            *part = part.clone() * factor;
        }
        grouped
            .into_iter()
            .map(|(exponent, part)| (part, exponent))
            .collect()
    }

    /// Whether this polynomial is irreducible over its field.
    ///
    /// Constants (and zero) are not considered irreducible; linear
    /// polynomials always are. Everything else is first screened for
    /// repeated factors, then checked via the nullity of the Frobenius
    /// map: one kernel dimension means one irreducible factor.
    pub fn is_irreducible(&self) -> bool {
        match self.degree() {
            None | Some(0) => false,
            Some(1) => true,
            Some(_) => {
                let monic = self.monic().expect("non-constant polynomial");
                let derivative = monic.derivative();
                if derivative.is_zero() {
                    // a perfect p-th power
                    return false;
                }
                if !Poly::gcd(&monic, &derivative).is_one() {
                    return false;
                }
                frobenius_kernel_basis(&monic).len() == 1
            }
        }
    }
}

/// The matrix of the map y ↦ y^q on GF(q)[x]/f: row i holds the
/// coefficients of x^{iq} mod f, padded to the degree of f.
///
/// Row 0 is the constant 1; each following row multiplies the previous one
/// by x^q mod f, which is computed once by reducing the monomial x^q.
pub(crate) fn frobenius_matrix<F: FiniteField>(f: &Poly<F>) -> Vec<Vec<F>> {
    let n = f.size() - 1;
    let q = F::ORDER as usize;

    let base = {
        let mut coeffs = vec![F::ZERO; q + 1];
        coeffs[q] = F::ONE;
        Poly::new(coeffs) % f
    };

    let mut matrix = vec![vec![F::ZERO; n]; n];
    let mut current = Poly::constant(F::ONE);
    for row in matrix.iter_mut() {
        for (i, &c) in current.coefficients().iter().enumerate() {
            row[i] = c;
        }
        current = current * &base % f;
    }
    matrix
}

/// A basis of the kernel of y ↦ y^q − y on GF(q)[x]/f, as polynomials.
///
/// For monic square-free f the basis length equals the number of distinct
/// irreducible factors; it always contains the constant 1.
pub fn frobenius_kernel_basis<F: FiniteField>(f: &Poly<F>) -> Vec<Poly<F>> {
    let n = f.size() - 1;

    // (B − I)ᵀ, transformed in place.
    let mut matrix = frobenius_matrix(f);
    for i in 0..n {
        matrix[i][i] = matrix[i][i] - F::ONE;
        for j in i + 1..n {
            let upper = matrix[i][j];
            matrix[i][j] = matrix[j][i];
            matrix[j][i] = upper;
        }
    }

    let matrix = gauss_eliminate(matrix);
    let rank = matrix.len();

    // Pivot bookkeeping: in reduced row echelon form each row's pivot
    // column is the first nonzero entry past the previous pivot, and
    // every column in between is free.
    let mut free_columns = Vec::with_capacity(n - rank);
    let mut pivot_columns = Vec::with_capacity(rank);
    let mut column = 0;
    for row in matrix.iter() {
        while column < n && row[column].is_zero() {
            free_columns.push(column);
            column += 1;
        }
        pivot_columns.push(column);
        column += 1;
    }
    while column < n {
        free_columns.push(column);
        column += 1;
    }

    // One basis vector per free column c: set v_c = 1, read the pivot
    // entries off column c of the reduced matrix, everything else zero.
    let mut basis = Vec::with_capacity(n - rank);
    for &c in &free_columns {
        let mut v = vec![F::ZERO; n];
        v[c] = F::ONE;
        for (row, &pivot) in pivot_columns.iter().enumerate() {
            v[pivot] = -matrix[row][c];
        }
        basis.push(Poly::new(v));
    }
    basis
}

/// Gauss–Jordan elimination to reduced row echelon form; all-zero rows are
/// dropped, so the returned length is the rank.
fn gauss_eliminate<F: Field>(mut matrix: Vec<Vec<F>>) -> Vec<Vec<F>> {
    let n = matrix.len();
    let mut row = 0;
    for column in 0..n {
        let Some(pivot_row) = (row..n).find(|&r| !matrix[r][column].is_zero()) else {
            continue;
        };
        matrix.swap(row, pivot_row);

        let inv = matrix[row][column]
            .inverse()
            .expect("pivot entry is nonzero");
        for i in column..n {
            matrix[row][i] = matrix[row][i] * inv;
        }

        for other in 0..n {
            if other == row || matrix[other][column].is_zero() {
                continue;
            }
            let factor = matrix[other][column];
            matrix[other][column] = F::ZERO;
            for i in column + 1..n {
                matrix[other][i] = matrix[other][i] - matrix[row][i] * factor;
            }
        }

        row += 1;
        if row == n {
            break;
        }
    }
    matrix.truncate(row);
    matrix
}

/// Split a monic square-free polynomial into its distinct monic
/// irreducible factors.
///
/// Every kernel basis polynomial b is constant in each CRT component of
/// GF(q)[x]/f, so for each factor h of f some field element c makes
/// gcd(h, b − c) a proper divisor. The working set is refined one basis
/// polynomial at a time until it reaches the kernel dimension, which for
/// square-free input equals the number of irreducible factors.
pub(crate) fn split_square_free<F: FiniteField + Ord>(
    f: Poly<F>,
    metric: &AtomicU64,
) -> Vec<Poly<F>> {
    let basis = frobenius_kernel_basis(&f);
    // For square-free input the kernel dimension equals the number of
    // distinct irreducible factors, so it doubles as the termination
    // target of the refinement below.
    let target = basis.len();
    if target == 1 {
        return vec![f];
    }

    let elements = F::elements();
    let work_unit = f.size() as u64;
    let mut factors = vec![f];
    let mut refined = Vec::with_capacity(target);

    for b in &basis {
        // The constant basis polynomial separates nothing.
        if b.size() <= 1 {
            continue;
        }
        for h in &factors {
            for &c in &elements {
                let g = Poly::gcd(h, &(b.clone() - c));
                if !g.is_one() {
                    refined.push(g);
                }
            }
        }
        metric.fetch_add(work_unit, Ordering::Relaxed);
        if refined.len() == target {
            return refined;
        }
        core::mem::swap(&mut factors, &mut refined);
        refined.clear();
    }
    // Unreachable for square-free input: the basis always separates all
    // factors.
    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::gf::Gf;

    type F2 = Gf<2, 1, 0b11>;
    type F8 = Gf<2, 3, 0b1011>;
    type F9 = Gf<3, 2, 17>;

    fn p2(coeffs: &[u32]) -> Poly<F2> {
        Poly::new(coeffs.iter().map(|&c| F2::new(c)).collect())
    }

    fn p9(coeffs: &[u32]) -> Poly<F9> {
        Poly::new(coeffs.iter().map(|&c| F9::new(c)).collect())
    }

    fn reassemble<F: FiniteField + Ord>(factors: &[(Poly<F>, u32)]) -> Poly<F> {
        let mut product = Poly::constant(F::ONE);
        for (factor, power) in factors {
            product = product * factor.pow(*power);
        }
        product
    }

    #[test]
    fn factorize_zero_and_constants() {
        assert!(Poly::<F2>::zero().factor().is_empty());
        assert!(Poly::constant(F2::ONE).factor().is_empty());
        assert!(Poly::constant(F8::new(5)).factor().is_empty());
    }

    #[test]
    fn factorize_two_distinct_irreducibles() {
        // (1 + x + x^2)(1 + x + x^3) over GF(2)
        let a = p2(&[1, 1, 1]);
        let b = p2(&[1, 1, 0, 1]);
        let factors = (a.clone() * b.clone()).factor();
        assert_eq!(factors, vec![(a, 1), (b, 1)]);
    }

    #[test]
    fn factorize_pure_power_of_x() {
        // x^5 exercises the derivative-zero branch on the way down
        let factors = Poly::monomial(F2::ONE, 5).factor();
        assert_eq!(factors, vec![(Poly::x(), 5)]);
    }

    #[test]
    fn factorize_mixed_multiplicities() {
        // (1 + x + x^2)^3 (1 + x + x^3)^2
        let a = p2(&[1, 1, 1]);
        let b = p2(&[1, 1, 0, 1]);
        let f = a.pow(3) * b.pow(2);
        let factors = f.factor();
        assert_eq!(factors, vec![(a, 3), (b, 2)]);
    }

    #[test]
    fn factorize_discards_leading_coefficient() {
        // 2(x + 1)(x + 2) over GF(9)
        let f = p9(&[1, 1]) * p9(&[2, 1]) * F9::new(2);
        let factors = f.factor();
        assert_eq!(factors, vec![(p9(&[1, 1]), 1), (p9(&[2, 1]), 1)]);
    }

    #[test]
    fn factorize_x_squared_minus_one_over_gf9() {
        // x^2 − 1 = (x − 1)(x + 1)
        let f = p9(&[2, 0, 1]);
        let factors = f.factor();
        assert_eq!(factors, vec![(p9(&[1, 1]), 1), (p9(&[2, 1]), 1)]);
    }

    #[test]
    fn factorize_frobenius_power_over_gf9() {
        // (x + 2)^3 has a vanishing derivative straight away
        let f = p9(&[2, 1]).pow(3);
        assert_eq!(f.factor(), vec![(p9(&[2, 1]), 3)]);
    }

    #[test]
    fn factorize_reassembles_over_gf8() {
        let f = Poly::new(vec![
            F8::new(3),
            F8::new(1),
            F8::new(4),
            F8::new(1),
            F8::new(5),
            F8::new(1),
        ]);
        let factors = f.factor();
        assert!(!factors.is_empty());
        assert_eq!(reassemble(&factors), f.monic().unwrap());
        for (g, _) in &factors {
            assert_eq!(g.leading_coeff(), Some(F8::ONE));
            assert!(g.is_irreducible());
        }
    }

    #[test]
    fn factorize_is_idempotent_on_factors() {
        let f = p2(&[1, 1, 1, 0, 1, 1]);
        for (g, _) in f.factor() {
            assert_eq!(g.factor(), vec![(g.clone(), 1)]);
        }
    }

    #[test]
    fn free_function_matches_method() {
        let f = p2(&[1, 1, 1]) * p2(&[1, 1, 0, 1]);
        assert_eq!(factor(&f), f.factor());
        assert!(factor(&Poly::<F2>::zero()).is_empty());
    }

    #[test]
    fn square_free_factorization_groups_by_multiplicity() {
        let a = p2(&[1, 1, 1]);
        let b = p2(&[1, 1, 0, 1]);
        let f = a.pow(3) * b.pow(2);
        assert_eq!(
            f.square_free_factorization(),
            vec![(b.clone(), 2), (a.clone(), 3)]
        );

        // distinct factors of equal multiplicity stay multiplied together
        let g = Poly::x() * p2(&[1, 1]) * a.pow(2);
        assert_eq!(
            g.square_free_factorization(),
            vec![(Poly::x() * p2(&[1, 1]), 1), (a, 2)]
        );
    }

    #[test]
    fn square_free_factorization_of_constants_is_empty() {
        assert!(Poly::<F2>::zero().square_free_factorization().is_empty());
        assert!(Poly::constant(F2::ONE).square_free_factorization().is_empty());
        assert!(Poly::constant(F8::new(5)).square_free_factorization().is_empty());
    }

    #[test]
    fn kernel_basis_starts_with_the_constant() {
        let f = p2(&[1, 1, 1]) * p2(&[1, 1, 0, 1]);
        let basis = frobenius_kernel_basis(&f);
        assert_eq!(basis.len(), 2);
        assert!(basis[0].is_one());
    }

    #[test]
    fn kernel_basis_members_are_frobenius_fixed() {
        let f = p2(&[1, 1, 1]) * p2(&[1, 1, 0, 1]) * p2(&[1, 1]);
        let basis = frobenius_kernel_basis(&f);
        assert_eq!(basis.len(), 3);
        for b in basis {
            let mut power = b.clone();
            for _ in 1..F2::ORDER {
                power = power * &b % &f;
            }
            assert_eq!(power, b, "b^q should equal b modulo f");
        }
    }

    #[test]
    fn irreducibility_checks() {
        assert!(p2(&[1, 1, 1]).is_irreducible());
        assert!(p2(&[1, 1, 0, 1]).is_irreducible());
        assert!(p2(&[0, 1]).is_irreducible());
        assert!(!p2(&[1]).is_irreducible());
        assert!(!Poly::<F2>::zero().is_irreducible());
        // (x + 1)^2
        assert!(!p2(&[1, 0, 1]).is_irreducible());
        // x^4 + x^3 + x^2 + x + 1 is irreducible but imprimitive
        assert!(p2(&[1, 1, 1, 1, 1]).is_irreducible());
        // x^2 + 1 is reducible over GF(9) since −1 is a square there
        assert!(!p9(&[1, 0, 1]).is_irreducible());
        // x^2 − x − 1 generated the field, so it had better be irreducible
        assert!(p9(&[2, 2, 1]).is_irreducible());
    }

    #[test]
    fn solver_metric_accumulates() {
        let solver = Berlekamp::<F2>::new();
        let f = p2(&[1, 1, 1]) * p2(&[1, 1, 0, 1]);
        assert_eq!(solver.metric(), 0);
        let _ = solver.factorize(&f);
        assert!(solver.metric() > 0);
    }

    #[test]
    fn linear_factors_over_gf8() {
        // Product of x − c over every element c splits completely:
        // x^q − x is the product of all monic linears.
        let f = {
            let mut coeffs = vec![F8::ZERO; 9];
            coeffs[1] = -F8::ONE;
            coeffs[8] = F8::ONE;
            Poly::new(coeffs)
        };
        let factors = f.factor();
        assert_eq!(factors.len(), 8);
        for (g, e) in factors {
            assert_eq!(e, 1);
            assert_eq!(g.degree(), Some(1));
        }
    }
}
