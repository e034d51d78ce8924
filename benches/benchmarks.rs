//! Benchmarks for berlek field and factorization operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use berlek::{Berlekamp, DistinctDegree, Field, FiniteField, Gf, Poly, Ring};

type F8 = Gf<2, 3, 0b1011>;
type F16 = Gf<2, 4, 0b10011>;
type F9 = Gf<3, 2, 17>;

fn bench_field_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gf Operations");

    let a = F16::new(11);
    let b = F16::new(7);

    group.bench_function("add", |bencher| {
        bencher.iter(|| black_box(a) + black_box(b))
    });

    group.bench_function("mul", |bencher| {
        bencher.iter(|| black_box(a) * black_box(b))
    });

    group.bench_function("inverse", |bencher| bencher.iter(|| black_box(a).inverse()));

    group.bench_function("pow", |bencher| bencher.iter(|| black_box(a).pow(1000)));

    let odd = F9::new(7);
    group.bench_function("add_odd_char", |bencher| {
        bencher.iter(|| black_box(odd) + black_box(odd))
    });

    group.finish();
}

fn bench_poly_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Poly Operations");

    for size in [8, 32, 128] {
        let coeffs: Vec<F8> = (0..size).map(|i| F8::new(i as u32 % 7 + 1)).collect();
        let p = Poly::new(coeffs);

        group.bench_with_input(BenchmarkId::new("mul", size), &p, |bencher, p| {
            bencher.iter(|| black_box(p.clone()) * black_box(p))
        });

        let x = F8::new(5);
        group.bench_with_input(BenchmarkId::new("eval", size), &p, |bencher, p| {
            bencher.iter(|| black_box(p).eval(black_box(x)))
        });
    }

    let f: Poly<F8> =
        Poly::new((0u32..24).map(|i| F8::new(i % 8)).collect::<Vec<_>>()) + Poly::monomial(F8::ONE, 24);
    let h: Poly<F8> = Poly::new((0u32..9).map(|i| F8::new(i % 7 + 1)).collect::<Vec<_>>());

    group.bench_function("div_rem_24_by_8", |bencher| {
        bencher.iter(|| black_box(&f).div_rem(black_box(&h)))
    });

    group.bench_function("gcd_24_8", |bencher| {
        bencher.iter(|| Poly::gcd(black_box(&f), black_box(&h)))
    });

    group.finish();
}

fn bench_factorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("Factorization");
    group.sample_size(20);

    // (x^2 + x + 1)^2 (x^3 + x + 1) (x + 1) over GF(8), degree 8
    let f: Poly<F8> = {
        let a = Poly::new(vec![F8::ONE, F8::ONE, F8::ONE]);
        let b = Poly::new(vec![F8::ONE, F8::ONE, F8::ZERO, F8::ONE]);
        let c = Poly::new(vec![F8::ONE, F8::ONE]);
        a.pow(2) * b * c
    };

    group.bench_function("berlekamp_deg8_gf8", |bencher| {
        bencher.iter(|| Berlekamp::new().factorize(black_box(&f)))
    });

    group.bench_function("distinct_degree_deg8_gf8", |bencher| {
        bencher.iter(|| DistinctDegree::new().factorize(black_box(&f)))
    });

    let g: Poly<F9> = {
        let roots: Vec<F9> = (1u32..6).map(F9::new).collect();
        Poly::from_roots(&roots) * Poly::new(vec![F9::ONE, F9::ZERO, F9::ONE])
    };

    group.bench_function("berlekamp_deg7_gf9", |bencher| {
        bencher.iter(|| Berlekamp::new().factorize(black_box(&g)))
    });

    group.finish();
}

fn bench_irreducibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("Irreducibility");

    // x^4 + x + 1 keeps its degree over GF(8); the check runs the full
    // kernel computation.
    let p: Poly<F8> = Poly::new(vec![F8::ONE, F8::ONE, F8::ZERO, F8::ZERO, F8::ONE]);
    group.bench_function("is_irreducible_deg4", |bencher| {
        bencher.iter(|| black_box(&p).is_irreducible())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_field_operations,
    bench_poly_operations,
    bench_factorization,
    bench_irreducibility,
);
criterion_main!(benches);
