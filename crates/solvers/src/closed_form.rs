//! Closed-form solvers for polynomial equations of degree one to four.
//!
//! Coefficients are passed highest degree first, so `quadratic(a, b, c)`
//! solves `a x² + b x + c = 0`. Each solver returns the distinct real roots in
//! ascending order. A zero leading coefficient is not an error: the equation
//! is handed to the next-lower-degree solver instead.
//!
//! # Solvers
//!
//! - [`linear`] — a single root, or NaN when none is well defined
//! - [`quadratic`] — discriminant test plus the cancellation-free root formula
//! - [`cubic`] — depressed cubic solved by Cardano or the trigonometric method
//! - [`quartic`] — Ferrari's method through a resolvent cubic

mod cubic;
mod linear;
mod quadratic;
mod quartic;

pub use cubic::cubic;
pub use linear::linear;
pub use quadratic::quadratic;
pub use quartic::quartic;

use gauge_core::compare;

/// Tolerance used to merge numerically separated copies of a repeated root.
pub(crate) const MERGE_EPSILON: f64 = 1e-9;

/// Newton steps applied to each closed-form root.
const POLISH_STEPS: usize = 4;

/// Evaluates a highest-degree-first polynomial and its derivative at `x`.
fn eval_with_slope(coeffs: &[f64], x: f64) -> (f64, f64) {
    coeffs.iter().fold((0.0, 0.0), |(value, slope), &c| {
        (value * x + c, slope * x + value)
    })
}

/// Refines `x` with Newton steps, keeping a step only if it lowers `|f(x)|`.
///
/// Near a repeated root the derivative vanishes and Newton stalls, so a step
/// that does not improve the residual ends the refinement.
fn polish(coeffs: &[f64], x: f64) -> f64 {
    let mut x = x;
    let (mut value, mut slope) = eval_with_slope(coeffs, x);

    for _ in 0..POLISH_STEPS {
        #[allow(clippy::float_cmp)]
        if value == 0.0 || slope == 0.0 {
            break;
        }
        let candidate = x - value / slope;
        let (next_value, next_slope) = eval_with_slope(coeffs, candidate);
        if !(next_value.abs() < value.abs()) {
            break;
        }
        x = candidate;
        value = next_value;
        slope = next_slope;
    }

    x
}

/// Polishes every finite root, then sorts and merges near-duplicates.
fn finish(coeffs: &[f64], roots: &[f64]) -> Vec<f64> {
    let polished: Vec<f64> = roots
        .iter()
        .filter(|x| x.is_finite())
        .map(|&x| polish(coeffs, x))
        .collect();
    compare::unique_average_sorted(&polished, MERGE_EPSILON)
}
