//! Core types for the Gauge geometry toolkit.
//!
//! This crate defines the numeric building blocks that the solvers and the
//! geometry code build on:
//!
//! - [`compare`] — tolerance-based equality and sign tests over `f64`
//! - [`Polynomial`] — a real-coefficient polynomial with cached derivative and
//!   integral tables, real/complex evaluation, Laguerre root finding and
//!   deflation
//! - [`Observer`] — receives iterative solver events and optionally returns
//!   control actions

pub mod compare;

mod observer;
mod polynomial;

pub use num_complex::Complex64;
pub use observer::Observer;
pub use polynomial::Polynomial;
