use num_complex::Complex64;

use super::Polynomial;

impl Polynomial {
    /// Divides out the linear factor `(x - root)` by synthetic division.
    ///
    /// Returns a new polynomial one degree lower; the remainder is discarded,
    /// so the result is exact only when `root` is an exact root.
    /// A constant polynomial deflates to the zero polynomial.
    #[must_use]
    pub fn divide_by_root(&self, root: f64) -> Polynomial {
        let coeffs = self.coeffs();
        if coeffs.len() < 2 {
            return Polynomial::zero();
        }

        let n = coeffs.len() - 1;
        let mut quotient = vec![0.0; n];
        quotient[n - 1] = coeffs[n];
        for i in (1..n).rev() {
            quotient[i - 1] = coeffs[i] + quotient[i] * root;
        }

        Polynomial::new(quotient)
    }

    /// Divides out the quadratic factor `(x - root)(x - conj(root))`.
    ///
    /// Non-real roots of a real polynomial come in conjugate pairs, so the
    /// quotient has real coefficients (up to round-off, which is dropped).
    /// Polynomials of degree below two deflate to the zero polynomial.
    #[must_use]
    pub fn divide_by_root_and_conjugate(&self, root: Complex64) -> Polynomial {
        let coeffs: Vec<Complex64> = self
            .coeffs()
            .iter()
            .map(|&c| Complex64::new(c, 0.0))
            .collect();
        if coeffs.len() < 3 {
            return Polynomial::zero();
        }

        let once = synthetic_division(&coeffs, root);
        let twice = synthetic_division(&once, root.conj());

        Polynomial::new(twice.into_iter().map(|c| c.re).collect::<Vec<_>>())
    }
}

/// Divides complex ascending-degree coefficients by `(x - root)`.
fn synthetic_division(coeffs: &[Complex64], root: Complex64) -> Vec<Complex64> {
    let n = coeffs.len() - 1;
    let mut quotient = vec![Complex64::new(0.0, 0.0); n];
    quotient[n - 1] = coeffs[n];
    for i in (1..n).rev() {
        quotient[i - 1] = coeffs[i] + quotient[i] * root;
    }
    quotient
}
