//! # primus-poly
//!
//! Dense single-variable polynomials with `f64` coefficients.
//!
//! This crate provides:
//! - A dense `Polynomial` value type that never normalizes its degree
//! - Ring arithmetic (sum, difference, negation, schoolbook product)
//! - Long division with remainder
//! - Derivative, antiderivative, evaluation and definite integration
//! - A whitespace-separated text codec (`read` / `write`)
//!
//! ## Degree
//!
//! The degree of a polynomial is the length of its coefficient vector
//! minus one. Leading coefficients may be zero: `x^2 - x^2` keeps degree 2.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calculus;
pub mod dense;
pub mod division;
pub mod error;
pub mod text;

#[cfg(test)]
mod proptests;

pub use dense::Polynomial;
pub use error::{ParseError, PolyError};
pub use text::{PolyDisplay, TextFormat};
