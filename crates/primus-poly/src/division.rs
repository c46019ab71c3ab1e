//! Polynomial long division.
//!
//! The remainder keeps the dividend's full coefficient vector: after
//! division its slots from `divisor.degree()` upward hold values that are
//! zero up to rounding, but they are not trimmed away.

use num_traits::Zero;
use tracing::{debug, trace};

use crate::dense::Polynomial;
use crate::error::PolyError;

impl Polynomial {
    /// Divides `self` by `divisor`, returning `(quotient, remainder)` with
    /// `self == quotient * divisor + remainder` up to rounding.
    ///
    /// If the divisor has a higher degree than `self`, the quotient is the
    /// zero polynomial and the remainder is a copy of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroLeadingCoefficient`] if the coefficient of
    /// `divisor` at index `divisor.degree()` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        let lead = divisor.leading_coeff();
        if lead.is_zero() {
            debug!(
                divisor_degree = divisor.degree(),
                "rejecting division by a zero leading coefficient"
            );
            return Err(PolyError::ZeroLeadingCoefficient);
        }

        let n = self.degree();
        let m = divisor.degree();
        trace!(dividend_degree = n, divisor_degree = m, "long division");

        if m > n {
            return Ok((Self::zero(), self.clone()));
        }

        let diff = n - m;
        let mut quotient = vec![0.0; diff + 1];
        let mut remainder = self.coeffs().to_vec();

        for i in (0..=diff).rev() {
            // Eliminate the current head term of the running remainder
            let c = remainder[i + m] / lead;
            quotient[i] = c;

            for (j, d) in divisor.coeffs().iter().enumerate() {
                remainder[i + j] -= c * d;
            }
        }

        Ok((Self::from_raw(quotient), Self::from_raw(remainder)))
    }

    /// Returns the quotient of `self / divisor`.
    ///
    /// # Errors
    ///
    /// Fails under the same condition as [`Polynomial::div_rem`].
    pub fn div(&self, divisor: &Self) -> Result<Self, PolyError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Returns the remainder of `self / divisor`.
    ///
    /// # Errors
    ///
    /// Fails under the same condition as [`Polynomial::div_rem`].
    pub fn rem(&self, divisor: &Self) -> Result<Self, PolyError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }
}
