//! Secant iteration started from a sign-changing pair.
//!
//! The endpoints are checked exactly as for [`bisection`](super::bisection),
//! but after that the two most recent iterates drive the update
//!
//! ```text
//! x2 = x1 - f(x1) (x1 - x0) / (f(x1) - f(x0))
//! ```
//!
//! and the bracket is not maintained, so the iteration may leave the starting
//! interval. The solve converges when `|x2 - x1| <= x_tol` or `f(x2)` is zero
//! within [`compare::EPSILON`](gauge_core::compare::EPSILON). A flat secant
//! (`f(x1) == f(x0)`) cannot move and ends the solve at `x1`.

use gauge_core::Observer;
use tracing::trace;

use super::{
    Config, Point, Solution, Status,
    bracket::{Start, start},
};

/// Control actions supported by the secant solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best point found so far.
    StopEarly,
}

/// Iteration event emitted by the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The new iterate.
    pub point: Point,
    /// Distance from the previous iterate.
    pub step: f64,
}

/// Finds a root of `f` by the secant method, starting from `[x0, x1]`.
///
/// With `max_iters == 0` the starting point with the smaller residual is
/// returned with [`Status::MaxIters`]. Otherwise an exhausted budget returns
/// the last iterate.
pub fn solve<F, Obs>(mut f: F, bracket: [f64; 2], config: &Config, mut observer: Obs) -> Solution
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let (mut prev, mut curr) = match start(&mut f, bracket) {
        Start::Done(solution) => return solution,
        Start::Bracket(first, second) => (first, second),
    };

    if config.max_iters() == 0 {
        return Solution::from_point(prev.better(curr), Status::MaxIters, 0);
    }

    let mut best = prev.better(curr);

    for iter in 1..=config.max_iters() {
        let rise = curr.residual - prev.residual;
        #[allow(clippy::float_cmp)]
        if rise == 0.0 {
            trace!(iter, x = curr.x, "flat secant");
            return Solution::from_point(curr, Status::Converged, iter);
        }

        let x = curr.x - curr.residual * (curr.x - prev.x) / rise;
        let next = Point::eval(&mut f, x);
        if next.is_nan() {
            trace!(iter, x, "iterate or residual is NaN");
            return Solution::failed(Status::NotANumber, iter);
        }

        let step = (next.x - curr.x).abs();
        prev = curr;
        curr = next;
        best = best.better(next);

        let event = Event {
            iter,
            point: next,
            step,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Solution::from_point(best, Status::StoppedByObserver, iter);
        }

        if step <= config.x_tol() || next.is_root() {
            return Solution::from_point(next, Status::Converged, iter);
        }
    }

    Solution::from_point(curr, Status::MaxIters, config.max_iters())
}

/// Runs the secant method without observation.
pub fn solve_unobserved<F>(f: F, bracket: [f64; 2], config: &Config) -> Solution
where
    F: FnMut(f64) -> f64,
{
    solve(f, bracket, config, ())
}

/// Returns a root of `f` found by the secant method from `x0` and `x1`, or NaN.
///
/// NaN is returned when `f` is NaN at a starting point or iterate, when the
/// starting residuals have the same sign, or when `epsilon` is not a valid
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
