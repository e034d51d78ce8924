//! Factorization of univariate polynomials over small Galois fields.
//!
//! The crate builds GF(p^k) arithmetic on precomputed log/antilog tables,
//! dense polynomials over any such field, and two flavours of Berlekamp's
//! factorization algorithm on top.
//!
//! ```
//! use berlek::{Gf, Poly, Ring};
//!
//! type F8 = Gf<2, 3, 0b1011>;
//!
//! // (x + 1)(x^2 + x + 1) over GF(8); the quadratic has its roots in
//! // GF(4), which GF(8) does not contain, so it stays irreducible.
//! let f = Poly::new(vec![F8::new(1), F8::new(1)])
//!     * Poly::new(vec![F8::new(1), F8::new(1), F8::new(1)]);
//!
//! for (factor, exponent) in f.factor() {
//!     assert!(factor.is_irreducible());
//!     assert_eq!(exponent, 1);
//! }
//! ```

pub mod algebra;
pub mod solver;
pub mod structures;
pub mod utils;

pub use algebra::field::{Field, FiniteField};
pub use algebra::ring::Ring;

pub use solver::berlekamp::{factor, frobenius_kernel_basis, Berlekamp};
pub use solver::distinct_degree::DistinctDegree;

pub use structures::gf::{primitive_poly, Gf};
pub use structures::poly::Poly;
pub use structures::table::{pack, FieldError, LogTable};
