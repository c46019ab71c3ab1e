//! Evaluation, differentiation and integration.

use crate::dense::Polynomial;

impl Polynomial {
    /// Evaluates the polynomial at `x`.
    ///
    /// Terms are summed in ascending power order, each power computed
    /// with `powf`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs()
            .iter()
            .zip(0u32..)
            .fold(0.0, |acc, (c, i)| acc + c * x.powf(f64::from(i)))
    }

    /// Computes the first derivative.
    ///
    /// The derivative of a constant is the zero polynomial of degree 0.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let coeffs = self
            .coeffs()
            .iter()
            .skip(1)
            .zip(1u32..)
            .map(|(c, k)| c * f64::from(k))
            .collect();
        Self::from_raw(coeffs)
    }

    /// Computes the antiderivative with a zero constant term.
    #[must_use]
    pub fn antiderivative(&self) -> Self {
        let mut coeffs = Vec::with_capacity(self.coeffs().len() + 1);
        coeffs.push(0.0);
        coeffs.extend(
            self.coeffs()
                .iter()
                .zip(1u32..)
                .map(|(c, k)| c / f64::from(k)),
        );
        Self::from_raw(coeffs)
    }

    /// Computes the definite integral over `[start, end]`.
    #[must_use]
    pub fn integrate(&self, start: f64, end: f64) -> f64 {
        self.coeffs()
            .iter()
            .zip(1u32..)
            .map(|(c, k)| {
                let k = f64::from(k);
                c * (end.powf(k) - start.powf(k)) / k
            })
            .sum()
    }
}
