use std::f64::consts::PI;

use gauge_core::compare;

use super::{finish, quadratic};

/// Solves `a x³ + b x² + c x + d = 0`, returning distinct real roots in
/// ascending order.
///
/// When `a` is zero the equation is solved by [`quadratic`].
///
/// The cubic is normalised and depressed with `x = t - b/3a`, giving
/// `t³ + p t + q = 0`. The sign of `(q/2)² + (p/3)³` selects the method:
///
/// - positive: one real root from Cardano's formula
/// - zero: a simple and a double root
/// - negative: three real roots from the trigonometric form
///
/// Roots are refined against the original coefficients and repeated roots
/// that separated numerically are merged.
#[must_use]
pub fn cubic(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    if compare::is_zero(a) {
        return quadratic(b, c, d);
    }

    let b = b / a;
    let c = c / a;
    let d = d / a;

    let shift = b / 3.0;
    let p = c - b * shift;
    let q = 2.0 * shift * shift * shift - shift * c + d;

    let depressed = depressed_roots(p, q);
    let roots: Vec<f64> = depressed.into_iter().map(|t| t - shift).collect();

    finish(&[1.0, b, c, d], &roots)
}

/// Real roots of `t³ + p t + q = 0`, unsorted and possibly repeated.
fn depressed_roots(p: f64, q: f64) -> Vec<f64> {
    if compare::is_zero(p) && compare::is_zero(q) {
        return vec![0.0];
    }

    let half_q = 0.5 * q;
    let third_p = p / 3.0;
    let half_q2 = half_q * half_q;
    let third_p3 = third_p * third_p * third_p;
    let disc = half_q2 + third_p3;

    let magnitude = half_q2.max(third_p3.abs());
    if compare::is_zero(disc / magnitude) {
        // Double root at -3q/2p and simple root at 3q/p. Here p != 0, since
        // p == 0 would force q == 0 for a vanishing discriminant.
        let simple = 3.0 * q / p;
        let double = -0.5 * simple;
        return vec![simple, double];
    }

    if disc > 0.0 {
        // One real root. Choose the cube-root branch that avoids cancellation.
        let u = -(half_q.abs() + disc.sqrt()).cbrt().copysign(half_q);
        #[allow(clippy::float_cmp)]
        let t = if u == 0.0 { 0.0 } else { u - third_p / u };
        vec![t]
    } else {
        // Three real roots; p < 0 here.
        let r = (-third_p).sqrt();
        let cos_arg = (-half_q / (r * r * r)).clamp(-1.0, 1.0);
        let phi = cos_arg.acos() / 3.0;
        (0..3)
            .map(|k| 2.0 * r * (phi - 2.0 * PI * f64::from(k) / 3.0).cos())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn assert_roots(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "roots: {actual:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(*a, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn three_distinct_roots() {
        assert_roots(&cubic(1.0, -6.0, 11.0, -6.0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn scaling_does_not_change_roots() {
        for f in [-2.5, 0.001, 7.0, 1e6] {
            assert_roots(&cubic(f, -6.0 * f, 11.0 * f, -6.0 * f), &[1.0, 2.0, 3.0]);
        }
    }

    #[test]
    fn one_real_root() {
        // x^3 - 8 = (x - 2)(x^2 + 2x + 4)
        assert_roots(&cubic(1.0, 0.0, 0.0, -8.0), &[2.0]);
        // x^3 + x + 10 = (x + 2)(x^2 - 2x + 5)
        assert_roots(&cubic(1.0, 0.0, 1.0, 10.0), &[-2.0]);
    }

    #[test]
    fn double_root_reported_once() {
        // (x - 1)^2 (x - 2)
        assert_roots(&cubic(1.0, -4.0, 5.0, -2.0), &[1.0, 2.0]);
        // (x + 1)(x - 3)^2
        assert_roots(&cubic(1.0, -5.0, 3.0, 9.0), &[-1.0, 3.0]);
    }

    #[test]
    fn triple_root_reported_once() {
        assert_roots(&cubic(1.0, -3.0, 3.0, -1.0), &[1.0]);
        assert_roots(&cubic(2.0, 0.0, 0.0, 0.0), &[0.0]);
    }

    #[test]
    fn root_at_origin() {
        // x^3 - x
        assert_roots(&cubic(1.0, 0.0, -1.0, 0.0), &[-1.0, 0.0, 1.0]);
    }

    #[test]
    fn zero_leading_coefficient_degrades_to_quadratic() {
        assert_roots(&cubic(0.0, 1.0, -3.0, 2.0), &[1.0, 2.0]);
    }
}
