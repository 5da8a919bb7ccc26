//! Bisection on a sign-changing bracket.
//!
//! Each iteration evaluates the midpoint and keeps the half of the bracket
//! across which the residual changes sign. The solve converges when the
//! midpoint residual is zero within
//! [`compare::EPSILON`](gauge_core::compare::EPSILON) or when the new
//! bracket is no wider than [`Config::x_tol`]. Endpoints may be given in
//! either order.
//!
//! The observer receives one [`Event`] per midpoint, after the bracket has
//! been updated, and may return [`Action::StopEarly`].

use gauge_core::Observer;
use tracing::trace;

use super::{
    Config, Point, Solution, Status,
    bracket::{Start, start},
};

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best point found so far.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Bracket after this iteration's update.
    pub bracket: [f64; 2],
    /// The evaluated midpoint.
    pub point: Point,
}

/// Finds a root of `f` between `bracket[0]` and `bracket[1]` by bisection.
///
/// With `max_iters == 0` the endpoint with the smaller residual is returned
/// with [`Status::MaxIters`]. Otherwise an exhausted budget returns the last
/// midpoint.
pub fn solve<F, Obs>(mut f: F, bracket: [f64; 2], config: &Config, mut observer: Obs) -> Solution
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let (mut lo, mut hi) = match start(&mut f, bracket) {
        Start::Done(solution) => return solution,
        Start::Bracket(first, second) => (first, second),
    };

    let mut best = lo.better(hi);
    let mut last = best;

    for iter in 1..=config.max_iters() {
        let mid = Point::eval(&mut f, 0.5 * (lo.x + hi.x));
        if mid.is_nan() {
            trace!(iter, x = mid.x, "midpoint residual is NaN");
            return Solution::failed(Status::NotANumber, iter);
        }

        if mid.sign() == lo.sign() {
            lo = mid;
        } else {
            hi = mid;
        }
        best = best.better(mid);
        last = mid;

        let event = Event {
            iter,
            bracket: [lo.x, hi.x],
            point: mid,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Solution::from_point(best, Status::StoppedByObserver, iter);
        }

        let width = (hi.x - lo.x).abs();
        if mid.is_root() || width <= config.x_tol() {
            return Solution::from_point(mid, Status::Converged, iter);
        }
    }

    Solution::from_point(last, Status::MaxIters, config.max_iters())
}

/// Runs bisection without observation.
pub fn solve_unobserved<F>(f: F, bracket: [f64; 2], config: &Config) -> Solution
where
    F: FnMut(f64) -> f64,
{
    solve(f, bracket, config, ())
}

/// Returns a root of `f` between `x0` and `x1`, or NaN.
///
/// NaN is returned when `f` is NaN at an endpoint or midpoint, when the
/// endpoint residuals have the same sign, or when `epsilon` is not a valid
/// tolerance.
pub fn root<F>(max_iters: usize, epsilon: f64, x0: f64, x1: f64, f: F) -> f64
where
    F: FnMut(f64) -> f64,
{
    match Config::new(max_iters, epsilon) {
        Ok(config) => solve_unobserved(f, [x0, x1], &config).x,
        Err(_) => f64::NAN,
    }
}
