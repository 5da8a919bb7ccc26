use gauge_core::compare;

use super::linear;

/// Solves `a x² + b x + c = 0`, returning distinct real roots in ascending order.
///
/// When `a` is zero the equation is solved as `b x + c = 0` and the single
/// result of [`linear`] is returned, which is `[NaN]` when `b` is also zero.
///
/// A discriminant within [`compare::EPSILON`] of zero gives a single double
/// root. Anything larger, however small relative to `b²`, gives two roots.
#[must_use]
pub fn quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    if compare::is_zero(a) {
        return vec![linear(b, c)];
    }
    nondegenerate_roots(a, b, c)
}

fn nondegenerate_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    let b2 = b * b;
    let ac4 = 4.0 * a * c;
    let disc = b2 - ac4;

    if !disc.is_finite() && a.is_finite() && b.is_finite() && c.is_finite() {
        // Squaring overflowed. Roots do not change under uniform scaling, and
        // 2^-515 keeps every square inside the exponent range.
        let scale = 2.0f64.powi(-515);
        return nondegenerate_roots(a * scale, b * scale, c * scale);
    }

    if compare::is_zero(disc) {
        vec![-0.5 * b / a]
    } else if disc < 0.0 {
        Vec::new()
    } else {
        let q = -0.5 * (b + disc.sqrt().copysign(b));
        let r0 = q / a;
        let r1 = c / q;
        vec![r0.min(r1), r0.max(r1)]
    }
}
