//! # primus-postfix
//!
//! Evaluation of postfix (reverse Polish) arithmetic expressions.
//!
//! Tokens are separated by whitespace. Numbers are pushed on a single
//! operand stack; each binary operator (`+ - * / ^`) pops two operands and
//! pushes the result. A well-formed expression leaves exactly one value.
//!
//! ```
//! use primus_postfix::evaluate;
//!
//! assert_eq!(evaluate("3 4 + 2 *"), Ok(14.0));
//! assert!(evaluate("3 0 /").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod evaluator;
pub mod token;

#[cfg(test)]
mod proptests;

pub use error::EvalError;
pub use evaluator::{evaluate, evaluate_flagged};
pub use token::{is_number, is_operator, Operator, Token};
