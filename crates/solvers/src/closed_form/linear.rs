use gauge_core::compare;

/// Solves `a x + b = 0`.
///
/// Returns NaN when `a` is zero, since the equation then has either no
/// solution or infinitely many.
#[must_use]
pub fn linear(a: f64, b: f64) -> f64 {
    if compare::is_zero(a) {
        return f64::NAN;
    }
    -b / a
}
