//! # Primus
//!
//! Classic numeric exercises written as small, independent crates.
//!
//! ## Features
//!
//! - **Dense Polynomials**: sum, product, long division, calculus and a
//!   plain-text exchange format over `f64` coefficients
//! - **Postfix Evaluation**: single-stack reverse Polish arithmetic
//!
//! ## Quick Start
//!
//! ```rust
//! use primus::prelude::*;
//!
//! let p: Polynomial = "2 1 0 1".parse()?; // x^2 + 1
//! let x = Polynomial::monomial(1.0, 1);
//! let product = p.mul(&x);
//! assert_eq!(product.coeffs(), &[0.0, 1.0, 0.0, 1.0]);
//!
//! let (q, r) = product.div_rem(&x)?;
//! assert_eq!(q, p);
//! assert!(r.is_zero());
//!
//! assert_eq!(evaluate("3 4 + 2 *")?, 14.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use primus_poly as poly;
pub use primus_postfix as postfix;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use primus_poly::{ParseError, PolyError, Polynomial, TextFormat};
    pub use primus_postfix::{evaluate, evaluate_flagged, EvalError, Operator};
}
