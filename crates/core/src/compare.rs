//! Tolerance-based comparisons for `f64`.
//!
//! Every equality and sign decision in the polynomial and solver code goes
//! through these helpers instead of raw floating-point comparison.
//! The plain functions use [`EPSILON`]; the `_eps` variants take an explicit
//! tolerance.

/// Default absolute tolerance.
pub const EPSILON: f64 = 1e-13;

/// Returns true if `x` and `y` differ by at most [`EPSILON`].
#[must_use]
pub fn is_equal(x: f64, y: f64) -> bool {
    is_equal_eps(x, y, EPSILON)
}

/// Returns true if `x` and `y` differ by at most `eps`.
///
/// Equal infinities compare equal. NaN is never equal to anything.
#[must_use]
pub fn is_equal_eps(x: f64, y: f64, eps: f64) -> bool {
    #[allow(clippy::float_cmp)]
    if x == y {
        return true;
    }
    (x - y).abs() <= eps
}

/// Returns true if `|x| <= EPSILON`.
#[must_use]
pub fn is_zero(x: f64) -> bool {
    is_zero_eps(x, EPSILON)
}

/// Returns true if `|x| <= eps`.
#[must_use]
pub fn is_zero_eps(x: f64, eps: f64) -> bool {
    x.abs() <= eps
}

/// Returns true if `x > EPSILON`.
#[must_use]
pub fn is_positive(x: f64) -> bool {
    is_positive_eps(x, EPSILON)
}

/// Returns true if `x > eps`.
#[must_use]
pub fn is_positive_eps(x: f64, eps: f64) -> bool {
    x > eps
}

/// Returns true if `x < -EPSILON`.
#[must_use]
pub fn is_negative(x: f64) -> bool {
    is_negative_eps(x, EPSILON)
}

/// Returns true if `x < -eps`.
#[must_use]
pub fn is_negative_eps(x: f64, eps: f64) -> bool {
    x < -eps
}

/// Returns true if `x <= y` or the two are equal within [`EPSILON`].
#[must_use]
pub fn is_less_equal(x: f64, y: f64) -> bool {
    is_less_equal_eps(x, y, EPSILON)
}

/// Returns true if `x <= y` or the two are equal within `eps`.
#[must_use]
pub fn is_less_equal_eps(x: f64, y: f64, eps: f64) -> bool {
    x <= y || is_equal_eps(x, y, eps)
}

/// Sorts `values` ascending and merges runs of nearly equal values.
///
/// Consecutive sorted values that are within `eps` of the previous value join
/// the same run, and each run is replaced by its average. NaN values sort last
/// and are kept as-is.
#[must_use]
pub fn unique_average_sorted(values: &[f64], eps: f64) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut merged = Vec::with_capacity(sorted.len());
    let mut run_sum = 0.0;
    let mut run_len = 0usize;
    let mut prev = f64::NAN;

    for x in sorted {
        if run_len > 0 && is_equal_eps(prev, x, eps) {
            run_sum += x;
            run_len += 1;
        } else {
            if run_len > 0 {
                merged.push(run_sum / run_len as f64);
            }
            run_sum = x;
            run_len = 1;
        }
        prev = x;
    }
    if run_len > 0 {
        merged.push(run_sum / run_len as f64);
    }

    merged
}
