//! Bracketing solvers for scalar equations `f(x) = 0`.
//!
//! Both solvers start from two points `[x0, x1]` whose residuals must differ
//! in sign. Numerical failure is reported through [`Status`], never through
//! errors or panics:
//!
//! - [`Status::NoSignChange`] — the endpoints do not bracket a root
//! - [`Status::NotANumber`] — `f` returned NaN at an endpoint or iterate
//!
//! Failed solutions carry `x = NaN`, so the `root` shortcuts simply return
//! [`Solution::x`].
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence by halving the bracket
//! - [`secant`] — superlinear convergence along secant lines, unguarded

mod bracket;
mod config;
mod solution;

pub mod bisection;
pub mod secant;

pub use bracket::{Point, Sign};
pub use config::{Config, ConfigError};
pub use solution::{Solution, Status};
