use super::Point;

/// Indicates how a bracketing solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
    /// The endpoint residuals have the same sign.
    NoSignChange,
    /// The function returned NaN.
    NotANumber,
}

impl Status {
    /// Returns true for statuses that carry no root estimate.
    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(self, Self::NoSignChange | Self::NotANumber)
    }
}

/// The result of a bracketing solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Root estimate, or NaN on failure.
    pub x: f64,
    /// Residual at the reported root estimate, or NaN on failure.
    pub residual: f64,
    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Constructs a solution from an evaluated point.
    pub(super) fn from_point(point: Point, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: point.x,
            residual: point.residual,
            iters,
        }
    }

    /// Constructs a failed solution with no root estimate.
    pub(super) fn failed(status: Status, iters: usize) -> Self {
        debug_assert!(status.is_failure());
        Self {
            status,
            x: f64::NAN,
            residual: f64::NAN,
            iters,
        }
    }
}
