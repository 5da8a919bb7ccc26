use gauge_core::compare;
use tracing::debug;

use super::{Solution, Status};

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// An evaluated point: `x` and its residual `f(x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub residual: f64,
}

impl Point {
    pub(super) fn eval(f: &mut impl FnMut(f64) -> f64, x: f64) -> Self {
        Self { x, residual: f(x) }
    }

    /// Returns true if `f` returned NaN here.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.residual.is_nan()
    }

    /// Returns true if the residual is zero within [`compare::EPSILON`].
    #[must_use]
    pub fn is_root(&self) -> bool {
        compare::is_zero(self.residual)
    }

    #[must_use]
    pub fn sign(&self) -> Sign {
        Sign::of(self.residual)
    }

    /// Returns whichever point has the smaller residual magnitude,
    /// preferring `self` on ties.
    #[must_use]
    pub fn better(self, other: Self) -> Self {
        if other.residual.abs() < self.residual.abs() {
            other
        } else {
            self
        }
    }
}

/// Outcome of evaluating the starting points.
pub(super) enum Start {
    /// The solve is already decided, by a root at an endpoint or a failure.
    Done(Solution),
    /// The points bracket a sign change, in the caller's order.
    Bracket(Point, Point),
}

/// Evaluates both endpoints and checks that they bracket a root.
pub(super) fn start(f: &mut impl FnMut(f64) -> f64, [x0, x1]: [f64; 2]) -> Start {
    let first = Point::eval(f, x0);
    if first.is_nan() {
        debug!(x = x0, "residual is NaN at first endpoint");
        return Start::Done(Solution::failed(Status::NotANumber, 0));
    }

    let second = Point::eval(f, x1);
    if second.is_nan() {
        debug!(x = x1, "residual is NaN at second endpoint");
        return Start::Done(Solution::failed(Status::NotANumber, 0));
    }

    if first.is_root() {
        return Start::Done(Solution::from_point(first, Status::Converged, 0));
    }
    if second.is_root() {
        return Start::Done(Solution::from_point(second, Status::Converged, 0));
    }

    if first.sign() == second.sign() {
        debug!(
            x0,
            x1,
            r0 = first.residual,
            r1 = second.residual,
            "endpoints do not bracket a root"
        );
        return Start::Done(Solution::failed(Status::NoSignChange, 0));
    }

    Start::Bracket(first, second)
}
