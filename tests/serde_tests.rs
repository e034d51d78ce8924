//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use berlek::{Gf, Poly, Ring};

type F8 = Gf<2, 3, 0b1011>;
type F9 = Gf<3, 2, 17>;

#[test]
fn gf_round_trip() {
    let a = F8::new(7);
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "7");
    let b: F8 = serde_json::from_str(&json).unwrap();
    assert_eq!(a, b);
}

#[test]
fn gf_every_element_round_trips() {
    use berlek::FiniteField;
    for a in F9::elements() {
        let json = serde_json::to_string(&a).unwrap();
        let b: F9 = serde_json::from_str(&json).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn gf_deserialize_wraps_mod_order() {
    let a: F8 = serde_json::from_str("11").unwrap();
    assert_eq!(a.value(), 3);
}

#[test]
fn poly_round_trip() {
    let p = Poly::new(vec![F9::new(2), F9::new(0), F9::new(1)]);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[2,0,1]");
    let q: Poly<F9> = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn poly_zero_round_trip() {
    let p = Poly::<F8>::zero();
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[]");
    let q: Poly<F8> = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn poly_deserialize_trims_trailing_zeros() {
    let p: Poly<F8> = serde_json::from_str("[1,1,0,0]").unwrap();
    assert_eq!(p.degree(), Some(1));
}

#[test]
fn element_vec_round_trip() {
    let elements = vec![F8::new(1), F8::new(5), F8::ZERO];
    let json = serde_json::to_string(&elements).unwrap();
    assert_eq!(json, "[1,5,0]");
    let back: Vec<F8> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, elements);
}
