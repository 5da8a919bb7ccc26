use gauge_core::compare;

use super::{cubic, finish, quadratic};

/// Solves `a x⁴ + b x³ + c x² + d x + e = 0`, returning distinct real roots in
/// ascending order.
///
/// When `a` is zero the equation is solved by [`cubic`].
///
/// The quartic is normalised and depressed with `x = y - b/4a`, giving
/// `y⁴ + p y² + q y + r = 0`. With `q = 0` it is a quadratic in `y²`.
/// Otherwise Ferrari's method takes the largest root `m` of the resolvent
/// cubic `m³ + p m² + (p²/4 - r) m - q²/8 = 0`, which is positive, and
/// factors the quartic into
///
/// ```text
/// (y² - s y + p/2 + m + q/2s) (y² + s y + p/2 + m - q/2s),  s = √(2m)
/// ```
///
/// whose roots are merged after refinement against the original coefficients.
#[must_use]
pub fn quartic(a: f64, b: f64, c: f64, d: f64, e: f64) -> Vec<f64> {
    if compare::is_zero(a) {
        return cubic(b, c, d, e);
    }

    let b = b / a;
    let c = c / a;
    let d = d / a;
    let e = e / a;

    let shift = 0.25 * b;
    let shift2 = shift * shift;
    let p = c - 6.0 * shift2;
    let q = d - 2.0 * c * shift + 8.0 * shift * shift2;
    let r = e - d * shift + c * shift2 - 3.0 * shift2 * shift2;

    let depressed = depressed_roots(p, q, r);
    let roots: Vec<f64> = depressed.into_iter().map(|y| y - shift).collect();

    finish(&[1.0, b, c, d, e], &roots)
}

/// Real roots of `y⁴ + p y² + q y + r = 0`, unsorted and possibly repeated.
fn depressed_roots(p: f64, q: f64, r: f64) -> Vec<f64> {
    if compare::is_zero(q) {
        return biquadratic_roots(p, r);
    }

    let m = cubic(1.0, p, 0.25 * p * p - r, -0.125 * q * q)
        .into_iter()
        .fold(f64::NEG_INFINITY, f64::max);

    if !compare::is_positive(m) {
        // The resolvent always has a positive root when q != 0; a missing one
        // means q was negligible after all.
        return biquadratic_roots(p, r);
    }

    let s = (2.0 * m).sqrt();
    let base = 0.5 * p + m;
    let offset = 0.5 * q / s;

    let mut roots = quadratic(1.0, -s, base + offset);
    roots.extend(quadratic(1.0, s, base - offset));
    roots
}

/// Real roots of `y⁴ + p y² + r = 0`.
fn biquadratic_roots(p: f64, r: f64) -> Vec<f64> {
    let mut roots = Vec::with_capacity(4);
    for z in quadratic(1.0, p, r) {
        if compare::is_zero(z) {
            roots.push(0.0);
        } else if z > 0.0 {
            let y = z.sqrt();
            roots.push(-y);
            roots.push(y);
        }
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn assert_roots(actual: &[f64], expected: &[f64]) {
        assert_roots_eps(actual, expected, 1e-12);
    }

    fn assert_roots_eps(actual: &[f64], expected: &[f64], epsilon: f64) {
        assert_eq!(actual.len(), expected.len(), "roots: {actual:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(*a, *e, epsilon = epsilon);
        }
    }

    #[test]
    fn four_distinct_roots() {
        let roots = quartic(1.0, 0.4, -6.49, 7.244, -2.112);
        assert_roots_eps(&roots, &[-3.2, 0.5, 1.1, 1.2], 1e-13);
    }

    #[test]
    fn symmetric_roots_use_biquadratic_path() {
        // (x - 1)(x - 2)(x - 3)(x - 4)
        assert_roots(&quartic(1.0, -10.0, 35.0, -50.0, 24.0), &[1.0, 2.0, 3.0, 4.0]);
        // x^4 - 5x^2 + 4
        assert_roots(&quartic(1.0, 0.0, -5.0, 0.0, 4.0), &[-2.0, -1.0, 1.0, 2.0]);
    }

    #[test]
    fn two_real_roots() {
        // (x - 1)(x + 2)(x^2 + 1) = x^4 + x^3 - x^2 + x - 2
        assert_roots(&quartic(1.0, 1.0, -1.0, 1.0, -2.0), &[-2.0, 1.0]);
    }

    #[test]
    fn no_real_roots() {
        assert!(quartic(1.0, 0.0, 0.0, 0.0, 1.0).is_empty());
        // (x^2 + 1)(x^2 + 2x + 5)
        assert!(quartic(1.0, 2.0, 6.0, 2.0, 5.0).is_empty());
    }

    #[test]
    fn root_at_origin() {
        // x (x - 1)(x - 2)(x + 3) = x^4 - 7x^2 + 6x
        assert_roots(&quartic(1.0, 0.0, -7.0, 6.0, 0.0), &[-3.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn scaled_equation_has_same_roots() {
        let f = -3.5;
        assert_roots(
            &quartic(f, 0.4 * f, -6.49 * f, 7.244 * f, -2.112 * f),
            &[-3.2, 0.5, 1.1, 1.2],
        );
    }

    #[test]
    fn zero_leading_coefficient_degrades_to_cubic() {
        assert_roots(&quartic(0.0, 1.0, -6.0, 11.0, -6.0), &[1.0, 2.0, 3.0]);
    }
}
