//! Real roots of polynomials of any degree.
//!
//! Polynomials of degree four or less go straight to the [`closed_form`]
//! solvers. Higher degrees are reduced by repeatedly finding one root with
//! Laguerre's method ([`Polynomial::find_root`]) and deflating it out. A real
//! root removes a linear factor; a non-real root removes the quadratic factor
//! formed with its conjugate. Once the remainder has degree four it is solved
//! in closed form.
//!
//! Deflation accumulates round-off, so every candidate is refined against the
//! original polynomial and accepted only if its residual is small relative to
//! the size of the terms being summed. Near a root of multiplicity `m` that
//! test holds on a band of width about `residual_tol^(1/m)`, and Laguerre may
//! wander off the real axis inside it. Accepted values whose midpoint also
//! passes the test are therefore one root, reported by the member with the
//! smallest relative residual.

mod config;

pub use config::{Config, ConfigError};

use gauge_core::{Polynomial, compare};
use num_complex::Complex64;
use tracing::{debug, trace};

use crate::closed_form::{cubic, linear, quadratic, quartic};

/// Returns the distinct real roots of `c[0] + c[1] x + ... + c[n] x^n` in
/// ascending order, using the default [`Config`].
///
/// A constant polynomial (including the zero polynomial) has no roots.
#[must_use]
pub fn solve(coefficients: &[f64]) -> Vec<f64> {
    solve_with_config(coefficients, &Config::default())
}

/// Returns the distinct real roots of `c[0] + c[1] x + ... + c[n] x^n` in
/// ascending order.
#[must_use]
pub fn solve_with_config(coefficients: &[f64], config: &Config) -> Vec<f64> {
    let original = Polynomial::from(coefficients);

    if original.degree() <= 4 {
        return closed_form_roots(&original);
    }

    let mut candidates = Vec::with_capacity(2 * original.degree());
    let remaining = deflate(original.clone(), 4, config, &mut candidates);
    if remaining.degree() <= 4 {
        candidates.extend(closed_form_roots(&remaining));
    }

    // Round-off can push a repeated root of the remainder off the real axis,
    // where the closed forms no longer see it.
    deflate(remaining, 0, config, &mut candidates);

    let accepted: Vec<f64> = candidates
        .into_iter()
        .filter_map(|x| accept(&original, x, config))
        .collect();
    merge(&original, accepted, config)
}

/// Deflates Laguerre roots out of `poly` until its degree is at most
/// `degree`, pushing the real part of each root onto `candidates`.
///
/// Stops early, returning a higher-degree remainder, if Laguerre diverges.
fn deflate(
    mut poly: Polynomial,
    degree: usize,
    config: &Config,
    candidates: &mut Vec<f64>,
) -> Polynomial {
    let seed = Complex64::new(0.0, 0.0);

    while poly.degree() > degree {
        let z = poly.find_root(seed);
        if !z.is_finite() {
            debug!(degree = poly.degree(), "laguerre diverged, stopping deflation");
            break;
        }

        candidates.push(z.re);
        poly = if is_real(z, config) {
            trace!(root = z.re, degree = poly.degree(), "deflating real root");
            poly.divide_by_root(z.re)
        } else {
            trace!(re = z.re, im = z.im, degree = poly.degree(), "deflating conjugate pair");
            poly.divide_by_root_and_conjugate(z)
        };
    }

    poly
}

/// Solves a polynomial of degree four or less in closed form.
fn closed_form_roots(poly: &Polynomial) -> Vec<f64> {
    match *poly.coeffs() {
        [c0, c1] => {
            let x = linear(c1, c0);
            if x.is_finite() { vec![x] } else { Vec::new() }
        }
        [c0, c1, c2] => quadratic(c2, c1, c0),
        [c0, c1, c2, c3] => cubic(c3, c2, c1, c0),
        [c0, c1, c2, c3, c4] => quartic(c4, c3, c2, c1, c0),
        _ => Vec::new(),
    }
}

/// Polishes `x` on the original polynomial and returns the refined value if
/// it is a root, or else `x` itself if that is a root.
///
/// The refined value is judged by its real part only: near a repeated root
/// Laguerre settles slightly off the real axis.
fn accept(original: &Polynomial, x: f64, config: &Config) -> Option<f64> {
    if !x.is_finite() {
        return None;
    }

    let z = original.find_root(Complex64::new(x, 0.0));
    if z.re.is_finite() && is_root(original, z.re, config) {
        return Some(z.re);
    }
    if is_root(original, x, config) {
        return Some(x);
    }

    debug!(candidate = x, re = z.re, im = z.im, "rejected: residual too large");
    None
}

/// Sorts accepted roots and collapses runs that are one root numerically.
///
/// Neighbours join a run when they are within `merge_tol` or when the
/// polynomial still passes the residual test halfway between them.
fn merge(original: &Polynomial, mut roots: Vec<f64>, config: &Config) -> Vec<f64> {
    roots.sort_by(f64::total_cmp);

    let mut merged = Vec::with_capacity(roots.len());
    let mut run: Vec<f64> = Vec::new();
    for x in roots {
        if let Some(&prev) = run.last()
            && !compare::is_equal_eps(prev, x, config.merge_tol())
            && !is_root(original, 0.5 * (prev + x), config)
        {
            merged.push(best_of(original, &run));
            run.clear();
        }
        run.push(x);
    }
    if !run.is_empty() {
        merged.push(best_of(original, &run));
    }

    merged
}

/// Returns the member of a non-empty run with the smallest relative residual.
fn best_of(poly: &Polynomial, run: &[f64]) -> f64 {
    run.iter()
        .copied()
        .min_by(|&a, &b| relative_residual(poly, a).total_cmp(&relative_residual(poly, b)))
        .unwrap_or(f64::NAN)
}

fn relative_residual(poly: &Polynomial, x: f64) -> f64 {
    let scale = term_scale(poly, x);
    #[allow(clippy::float_cmp)]
    if scale == 0.0 {
        return 0.0;
    }
    poly.eval(x).abs() / scale
}

/// Returns true if `|p(x)| <= residual_tol * Σ |c_i| |x|^i`.
fn is_root(poly: &Polynomial, x: f64, config: &Config) -> bool {
    poly.eval(x).abs() <= config.residual_tol() * term_scale(poly, x)
}

fn is_real(z: Complex64, config: &Config) -> bool {
    z.im.abs() <= config.imag_tol() * (1.0 + z.re.abs())
}

/// Returns `Σ |c_i| |x|^i`, the magnitude of the summed terms at `x`.
fn term_scale(poly: &Polynomial, x: f64) -> f64 {
    let x = x.abs();
    poly.coeffs()
        .iter()
        .rev()
        .fold(0.0, |acc, c| acc * x + c.abs())
}
