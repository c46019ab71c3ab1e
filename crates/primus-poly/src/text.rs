//! Textual reading and writing of polynomials.
//!
//! Two formats are supported:
//!
//! - The exchange format used by [`Polynomial::read`] and
//!   [`Polynomial::write`]: the degree followed by the coefficients in
//!   ascending power order, all whitespace separated, e.g. `2 1.00 2.00 3.00`.
//! - The display format produced by `Display`: signed terms in descending
//!   power order, e.g. `+3.00x^2 +2.00x^1 +1.00`. It is not parsed back.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::dense::Polynomial;
use crate::error::ParseError;

/// Formatting options for the exchange and display formats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextFormat {
    /// Digits printed after the decimal point of each coefficient.
    pub precision: usize,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

/// Display adapter returned by [`Polynomial::display_with`].
#[derive(Clone, Copy, Debug)]
pub struct PolyDisplay<'a> {
    poly: &'a Polynomial,
    format: &'a TextFormat,
}

impl fmt::Display for PolyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = self.format.precision;
        let coeffs = self.poly.coeffs();

        for (i, &c) in coeffs.iter().enumerate().skip(1).rev() {
            write_coeff(f, c, prec, true)?;
            write!(f, "x^{i} ")?;
        }
        write_coeff(f, coeffs[0], prec, true)
    }
}

/// Writes one coefficient. Non-finite values print as `nan` / `inf`,
/// carrying a sign like any other term when `signed` is set.
fn write_coeff(out: &mut impl fmt::Write, c: f64, prec: usize, signed: bool) -> fmt::Result {
    if c.is_finite() {
        return if signed {
            write!(out, "{c:+.prec$}")
        } else {
            write!(out, "{c:.prec$}")
        };
    }

    let sign = if c.is_sign_negative() && !c.is_nan() {
        "-"
    } else if signed {
        "+"
    } else {
        ""
    };
    let body = if c.is_nan() { "nan" } else { "inf" };
    write!(out, "{sign}{body}")
}

impl Polynomial {
    /// Renders the polynomial in display format with custom precision.
    #[must_use]
    pub fn display_with<'a>(&'a self, format: &'a TextFormat) -> PolyDisplay<'a> {
        PolyDisplay { poly: self, format }
    }

    /// Writes the polynomial in exchange format with two decimals.
    #[must_use]
    pub fn write(&self) -> String {
        self.write_with(&TextFormat::default())
    }

    /// Writes the polynomial in exchange format with custom precision.
    #[must_use]
    pub fn write_with(&self, format: &TextFormat) -> String {
        let prec = format.precision;
        let mut out = self.degree().to_string();
        for &c in self.coeffs() {
            out.push(' ');
            // Writing into a String cannot fail
            let _ = write_coeff(&mut out, c, prec, false);
        }
        out
    }

    /// Replaces `self` with the polynomial described by `input`.
    ///
    /// The first token, truncated toward zero, is the degree; exactly
    /// `degree + 1` coefficient tokens must follow. On error `self` is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the input is empty, a token is not a
    /// number, the degree is negative or not finite, or the coefficient
    /// count does not match the degree.
    pub fn read(&mut self, input: &str) -> Result<(), ParseError> {
        let coeffs = parse_exchange(input).map_err(|e| {
            debug!(error = %e, "rejected polynomial text");
            e
        })?;
        self.set_coeffs(coeffs);
        Ok(())
    }
}

fn parse_exchange(input: &str) -> Result<Vec<f64>, ParseError> {
    let mut values = input
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber(tok.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(ParseError::Empty);
    }

    let degree = parse_degree(values[0])?;
    let coeffs = values.split_off(1);
    let expected = degree.saturating_add(1);
    if coeffs.len() != expected {
        return Err(ParseError::CoefficientCount {
            expected,
            found: coeffs.len(),
        });
    }

    Ok(coeffs)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_degree(value: f64) -> Result<usize, ParseError> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < 0.0 {
        return Err(ParseError::InvalidDegree(value));
    }
    // Saturates for absurd degrees, which then fail the count check
    Ok(truncated as usize)
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&TextFormat::default()), f)
    }
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut poly = Polynomial::zero();
        poly.read(s)?;
        Ok(poly)
    }
}
