//! Real-coefficient polynomials.

mod deflate;
mod laguerre;

use std::sync::OnceLock;

use num_complex::Complex64;

use crate::compare;

/// A polynomial `p[0] + p[1] x + ... + p[n] x^n` with real coefficients.
///
/// Coefficients are stored in ascending degree order with trailing
/// near-zero coefficients trimmed, so [`degree`](Self::degree) is canonical.
/// There is always at least one coefficient; the zero polynomial is `[0.0]`.
///
/// The derivative, second derivative and integral coefficient tables are
/// computed on first use and cached. A polynomial is immutable after
/// construction, so shared references may be evaluated from several threads.
#[derive(Debug, Clone)]
pub struct Polynomial {
    coeffs: Vec<f64>,
    deriv: OnceLock<Vec<f64>>,
    deriv2: OnceLock<Vec<f64>>,
    integral: OnceLock<Vec<f64>>,
}

impl Polynomial {
    /// Creates a polynomial from ascending-degree coefficients.
    ///
    /// Trailing coefficients are dropped while they are zero within
    /// [`compare::EPSILON`] and more than one coefficient remains.
    /// Empty input yields the zero polynomial.
    #[must_use]
    pub fn new(coeffs: impl Into<Vec<f64>>) -> Self {
        let mut coeffs = coeffs.into();
        while coeffs.len() > 1 && coeffs.last().is_some_and(|&c| compare::is_zero(c)) {
            coeffs.pop();
        }
        if coeffs.is_empty() || (coeffs.len() == 1 && compare::is_zero(coeffs[0])) {
            coeffs = vec![0.0];
        }

        Self {
            coeffs,
            deriv: OnceLock::new(),
            deriv2: OnceLock::new(),
            integral: OnceLock::new(),
        }
    }

    /// Returns the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(vec![0.0])
    }

    /// Returns the degree (index of the highest stored coefficient).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && compare::is_zero(self.coeffs[0])
    }

    /// Returns the ascending-degree coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the coefficients of the first derivative.
    ///
    /// The table is empty for a constant polynomial.
    pub fn deriv_coeffs(&self) -> &[f64] {
        self.deriv.get_or_init(|| differentiate(&self.coeffs))
    }

    /// Returns the coefficients of the second derivative.
    pub fn deriv2_coeffs(&self) -> &[f64] {
        self.deriv2.get_or_init(|| differentiate(self.deriv_coeffs()))
    }

    /// Returns the coefficients of the indefinite integral.
    ///
    /// The constant of integration is zero, so the table starts with `0.0`.
    pub fn integral_coeffs(&self) -> &[f64] {
        self.integral.get_or_init(|| integrate(&self.coeffs))
    }

    /// Evaluates the polynomial at a real `x`.
    ///
    /// Evaluation goes through the complex path so that NaN and infinite
    /// coefficients propagate the same way in both.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.eval_complex(Complex64::new(x, 0.0)).re
    }

    /// Evaluates the polynomial at a complex `z`.
    #[must_use]
    pub fn eval_complex(&self, z: Complex64) -> Complex64 {
        horner(&self.coeffs, z)
    }

    /// Evaluates the first derivative at a real `x`.
    pub fn eval_deriv(&self, x: f64) -> f64 {
        self.eval_deriv_complex(Complex64::new(x, 0.0)).re
    }

    /// Evaluates the first derivative at a complex `z`.
    pub fn eval_deriv_complex(&self, z: Complex64) -> Complex64 {
        horner(self.deriv_coeffs(), z)
    }

    /// Evaluates the second derivative at a real `x`.
    pub fn eval_deriv2(&self, x: f64) -> f64 {
        self.eval_deriv2_complex(Complex64::new(x, 0.0)).re
    }

    /// Evaluates the second derivative at a complex `z`.
    pub fn eval_deriv2_complex(&self, z: Complex64) -> Complex64 {
        horner(self.deriv2_coeffs(), z)
    }

    /// Evaluates the indefinite integral at a real `x`.
    pub fn eval_integral(&self, x: f64) -> f64 {
        self.eval_integral_complex(Complex64::new(x, 0.0)).re
    }

    /// Evaluates the indefinite integral at a complex `z`.
    pub fn eval_integral_complex(&self, z: Complex64) -> Complex64 {
        horner(self.integral_coeffs(), z)
    }

    /// Returns the definite integral over `[a, b]`.
    pub fn integrate(&self, a: f64, b: f64) -> f64 {
        self.eval_integral(b) - self.eval_integral(a)
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coeffs: Vec<f64>) -> Self {
        Self::new(coeffs)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coeffs: &[f64]) -> Self {
        Self::new(coeffs)
    }
}

/// Horner evaluation from the highest stored coefficient down.
fn horner(coeffs: &[f64], z: Complex64) -> Complex64 {
    coeffs
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
}

fn differentiate(coeffs: &[f64]) -> Vec<f64> {
    coeffs
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, &c)| c * i as f64)
        .collect()
}

fn integrate(coeffs: &[f64]) -> Vec<f64> {
    std::iter::once(0.0)
        .chain(
            coeffs
                .iter()
                .enumerate()
                .map(|(i, &c)| c / (i + 1) as f64),
        )
        .collect()
}
