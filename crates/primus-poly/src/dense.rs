//! Dense univariate polynomials.
//!
//! Every power from 0 to the degree has a stored coefficient. Unlike a
//! normalized representation, results are never trimmed: the degree of a
//! sum is the larger operand degree and the degree of a product is the sum
//! of the operand degrees, whatever the leading coefficients turn out to be.

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::error::PolyError;

/// A dense univariate polynomial with `f64` coefficients.
///
/// Coefficients are stored in ascending degree order and the vector is
/// never empty, so `coeffs.len() == degree + 1` always holds.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending degree order.
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial of the given degree with all coefficients zero.
    #[must_use]
    pub fn new(degree: usize) -> Self {
        Self {
            coeffs: vec![0.0; degree + 1],
        }
    }

    /// Creates a polynomial of the given degree from a coefficient slice.
    ///
    /// Coefficients past `degree` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidArgument`] if fewer than `degree + 1`
    /// coefficients are supplied.
    pub fn from_coeffs(degree: usize, coeffs: &[f64]) -> Result<Self, PolyError> {
        let expected = degree + 1;
        if coeffs.len() < expected {
            return Err(PolyError::InvalidArgument {
                expected,
                found: coeffs.len(),
            });
        }

        Ok(Self {
            coeffs: coeffs[..expected].to_vec(),
        })
    }

    /// Creates the zero polynomial of degree 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(1.0)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: f64, n: usize) -> Self {
        let mut coeffs = vec![0.0; n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Returns the degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if every coefficient is zero, whatever the degree.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// Returns the coefficient at index `degree`.
    #[must_use]
    pub fn leading_coeff(&self) -> f64 {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i, or zero past the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Compares two polynomials coefficient by coefficient with an absolute
    /// tolerance. Degrees must match.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.coeffs.len() == other.coeffs.len()
            && self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    /// Adds two polynomials.
    ///
    /// Missing high-order terms of the shorter operand count as zero.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtracts `other` from `self`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len)
            .map(|i| op(self.coeff(i), other.coeff(i)))
            .collect();
        Self { coeffs }
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }

    /// Multiplies two polynomials by direct convolution: O(n·m).
    ///
    /// The result always has degree `self.degree() + other.degree()`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![0.0; n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] += a * b;
            }
        }

        Self { coeffs: result }
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|x| x * c).collect(),
        }
    }

    pub(crate) fn from_raw(coeffs: Vec<f64>) -> Self {
        debug_assert!(!coeffs.is_empty());
        Self { coeffs }
    }

    pub(crate) fn set_coeffs(&mut self, coeffs: Vec<f64>) {
        debug_assert!(!coeffs.is_empty());
        self.coeffs = coeffs;
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

/// Builds a polynomial of degree `len - 1`; an empty vector gives zero.
impl From<Vec<f64>> for Polynomial {
    fn from(coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            Self::zero()
        } else {
            Self { coeffs }
        }
    }
}

impl FromIterator<f64> for Polynomial {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(&self, &rhs)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(&self, &rhs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}
