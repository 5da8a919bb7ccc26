//! Root finders for polynomial and scalar equations.
//!
//! - [`closed_form`] — exact formulas for degree one to four
//! - [`polynomial`] — any degree, by Laguerre iteration and deflation
//! - [`equation`] — bracketing methods for arbitrary `f(x) = 0`
//!
//! All solvers report numerical failure through sentinel values (NaN, an
//! empty root list, or a failure status) rather than panics.

pub mod closed_form;
pub mod equation;
pub mod polynomial;

pub use closed_form::{cubic, linear, quadratic, quartic};
