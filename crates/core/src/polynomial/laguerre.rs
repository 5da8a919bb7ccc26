use num_complex::Complex64;

use super::Polynomial;

/// Fractional step lengths used to break limit cycles.
///
/// Every [`STEPS_PER_FRACTION`]th iteration takes only this fraction of the
/// Laguerre step, indexed by `iter / STEPS_PER_FRACTION`.
const FRACTIONS: [f64; 8] = [0.0, 0.5, 0.25, 0.13, 0.38, 0.62, 0.88, 1.0];

const STEPS_PER_FRACTION: usize = 10;

const MAX_ITERS: usize = STEPS_PER_FRACTION * (FRACTIONS.len() - 1);

impl Polynomial {
    /// Finds a root near `x0` using Laguerre's method.
    ///
    /// The iteration stops when `|p(x)|` falls to machine epsilon, when a step
    /// no longer changes `x`, or after a fixed iteration budget. Convergence is
    /// not signalled: callers that need a verified root should re-evaluate the
    /// polynomial at the returned value.
    ///
    /// A constant polynomial has no roots and returns `x0` unchanged.
    #[must_use]
    pub fn find_root(&self, x0: Complex64) -> Complex64 {
        let degree = self.degree();
        if degree == 0 {
            return x0;
        }

        let n = degree as f64;
        let mut x = x0;

        for iter in 1..=MAX_ITERS {
            let value = self.eval_complex(x);
            if !value.is_finite() || value.norm() <= f64::EPSILON {
                return x;
            }

            let g = self.eval_deriv_complex(x) / value;
            let g2 = g * g;
            let h = g2 - self.eval_deriv2_complex(x) / value;
            let r = ((n * h - g2) * (n - 1.0)).sqrt();

            let plus = g + r;
            let minus = g - r;
            let denom = if plus.norm() >= minus.norm() { plus } else { minus };

            let step = if denom.norm() > 0.0 {
                Complex64::new(n, 0.0) / denom
            } else {
                Complex64::from_polar(1.0 + x.norm(), iter as f64)
            };

            let next = x - step;
            if next == x {
                return x;
            }

            x = if iter % STEPS_PER_FRACTION == 0 {
                x - step * FRACTIONS[iter / STEPS_PER_FRACTION]
            } else {
                next
            };
        }

        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn origin() -> Complex64 {
        Complex64::new(0.0, 0.0)
    }

    #[test]
    fn finds_linear_root_in_one_step() {
        // 2x - 3
        let p = Polynomial::new(vec![-3.0, 2.0]);
        let root = p.find_root(origin());

        assert_relative_eq!(root.re, 1.5, epsilon = 1e-15);
        assert_relative_eq!(root.im, 0.0);
    }

    #[test]
    fn finds_real_root_of_cubic() {
        // (x - 1)(x - 2)(x - 3)
        let p = Polynomial::new(vec![-6.0, 11.0, -6.0, 1.0]);
        let root = p.find_root(origin());

        assert_relative_eq!(root.re, 1.0, epsilon = 1e-12);
        assert!(root.im.abs() < 1e-12);
    }

    #[test]
    fn finds_complex_root() {
        // x^2 + 4 has roots ±2i
        let p = Polynomial::new(vec![4.0, 0.0, 1.0]);
        let root = p.find_root(Complex64::new(0.5, 0.5));

        assert!(root.re.abs() < 1e-12);
        assert_relative_eq!(root.im.abs(), 2.0, epsilon = 1e-12);
        assert!(p.eval_complex(root).norm() < 1e-12);
    }

    #[test]
    fn escapes_stationary_start() {
        // x^2 + 4 at the origin: p' = 0 and the step is purely imaginary.
        let p = Polynomial::new(vec![4.0, 0.0, 1.0]);
        let root = p.find_root(origin());

        assert!(p.eval_complex(root).norm() < 1e-12);
    }

    #[test]
    fn starting_on_a_root_returns_it() {
        let p = Polynomial::new(vec![0.0, -1.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(p.find_root(origin()), origin());
    }

    #[test]
    fn constant_returns_start() {
        let p = Polynomial::new(vec![7.0]);
        let start = Complex64::new(1.0, 2.0);
        assert_eq!(p.find_root(start), start);
    }

    #[test]
    fn nan_coefficients_stop_immediately() {
        let p = Polynomial::new(vec![1.0, f64::NAN, 1.0]);
        let start = Complex64::new(0.25, 0.0);
        assert_eq!(p.find_root(start), start);
    }
}
