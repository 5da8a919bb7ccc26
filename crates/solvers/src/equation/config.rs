use thiserror::Error;

/// Configuration shared by the bracketing solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_tol: f64,
}

/// Errors that can occur when validating a bracketing solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_tol must be finite and non-negative")]
    XTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_tol` is negative or non-finite.
    pub fn new(max_iters: usize, x_tol: f64) -> Result<Self, ConfigError> {
        if !x_tol.is_finite() || x_tol < 0.0 {
            return Err(ConfigError::XTol);
        }

        Ok(Self { max_iters, x_tol })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on the change in x.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_zero_tolerance() {
        let config = Config::new(10, 0.0).expect("valid config");
        assert_eq!(config.max_iters(), 10);
        assert_relative_eq!(config.x_tol(), 0.0);
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(10, -1e-9), Err(ConfigError::XTol));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::XTol));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::XTol));
    }
}
