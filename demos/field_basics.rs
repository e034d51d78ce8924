//! Galois Field Basics
//!
//! This example demonstrates:
//! - Constructing small fields from packed primitive polynomials
//! - Element arithmetic through the log tables
//! - Enumeration and discrete logarithms
//!
//! Run with: cargo run --example field_basics

use berlek::{Field, FiniteField, Gf};

type F8 = Gf<2, 3, 0b1011>;
type F9 = Gf<3, 2, 17>;

fn main() {
    println!("=== GF(8) over x^3 + x + 1 ===\n");

    F8::validate().expect("generator should be primitive");

    println!("powers of the generator α (packed as 2):");
    let alpha = F8::new(2);
    for j in 0..7u64 {
        println!("  α^{j} = {}", alpha.pow(j));
    }
    println!();

    let a = F8::new(3);
    println!("a = {a}");
    println!("a * a   = {}", a * a);
    println!("a^-1    = {}", a.inverse().unwrap());
    println!("a / a   = {}", a / a);
    println!("log(a)  = {}", a.log().unwrap());
    println!();

    println!("=== GF(9) over x^2 + 2x + 2 ===\n");

    println!("addition works digit-wise in base 3:");
    let x = F9::new(8); // 2 + 2α
    let y = F9::new(4); // 1 + α
    println!("  {x} + {y} = {}", x + y);
    println!("  {x} - {y} = {}", x - y);
    println!();

    println!("every non-zero element has order dividing 8:");
    for e in F9::elements().into_iter().skip(1) {
        println!("  {e}^8 = {}", e.pow(8));
    }
}
