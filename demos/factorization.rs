//! Polynomial Factorization
//!
//! This example demonstrates:
//! - Full factorization into irreducible factors over GF(2) and GF(9)
//! - The derivative-zero branch for perfect p-th powers
//! - Agreement between the two solver variants
//!
//! Run with: cargo run --example factorization

use berlek::{Berlekamp, DistinctDegree, Gf, Poly, Ring};

type F2 = Gf<2, 1, 0b11>;
type F9 = Gf<3, 2, 17>;

fn p2(coeffs: &[u32]) -> Poly<F2> {
    Poly::new(coeffs.iter().map(|&c| F2::new(c)).collect())
}

fn main() {
    println!("=== Factorization over GF(2) ===\n");

    // f = (1 + x + x^2)^3 * (1 + x + x^3)^2
    let a = p2(&[1, 1, 1]);
    let b = p2(&[1, 1, 0, 1]);
    let f = a.pow(3) * b.pow(2);

    println!("f(x) = (1 + x + x^2)^3 * (1 + x + x^3)^2");
    println!("f(x) = {f:?}");
    println!();

    let solver = Berlekamp::new();
    println!("Berlekamp factorization:");
    for (factor, exponent) in solver.factorize(&f) {
        println!("  ({factor:?})^{exponent}");
    }
    println!("splitting work: {} units", solver.metric());
    println!();

    println!("=== Perfect p-th powers ===\n");

    let power_of_x: Poly<F2> = Poly::monomial(F2::ONE, 5);
    println!("x^5 factors through the derivative-zero branch:");
    for (factor, exponent) in power_of_x.factor() {
        println!("  ({factor:?})^{exponent}");
    }
    println!();

    println!("=== Factorization over GF(9) ===\n");

    // x^2 − 1 splits into two linear factors
    let g = Poly::new(vec![F9::new(2), F9::ZERO, F9::ONE]);
    println!("g(x) = x^2 - 1 = {g:?}");
    for (factor, exponent) in g.factor() {
        println!("  ({factor:?})^{exponent}");
    }
    println!();

    println!("=== The two solvers agree ===\n");

    let h = Poly::new(vec![
        F9::new(4),
        F9::new(7),
        F9::new(1),
        F9::new(0),
        F9::new(1),
    ]);
    let via_berlekamp = Berlekamp::new().factorize(&h);
    let via_distinct_degree = DistinctDegree::new().factorize(&h);
    println!("h(x) = {h:?}");
    println!("Berlekamp:       {via_berlekamp:?}");
    println!("Distinct-degree: {via_distinct_degree:?}");
    assert_eq!(via_berlekamp, via_distinct_degree);
    println!("match: true");
}
