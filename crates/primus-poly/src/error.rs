//! Error types for polynomial construction, division and parsing.

use thiserror::Error;

/// Errors produced while parsing the textual polynomial format.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    /// The input held no tokens at all.
    #[error("empty input")]
    Empty,

    /// A token could not be parsed as a number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// The degree token was negative, NaN or infinite.
    #[error("invalid degree: {0}")]
    InvalidDegree(f64),

    /// The number of coefficient tokens did not match `degree + 1`.
    #[error("expected {expected} coefficients, found {found}")]
    CoefficientCount {
        /// Coefficients required by the degree token.
        expected: usize,
        /// Coefficients actually present.
        found: usize,
    },
}

/// Errors produced by polynomial operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolyError {
    /// Fewer coefficients were supplied than the degree requires.
    #[error("degree requires {expected} coefficients, got {found}")]
    InvalidArgument {
        /// Coefficients required by the degree.
        expected: usize,
        /// Coefficients supplied.
        found: usize,
    },

    /// The divisor's leading coefficient is zero.
    #[error("divisor has a zero leading coefficient")]
    ZeroLeadingCoefficient,
}
