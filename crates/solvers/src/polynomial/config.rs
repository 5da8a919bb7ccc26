use thiserror::Error;

/// Configuration for the general polynomial solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    imag_tol: f64,
    residual_tol: f64,
    merge_tol: f64,
}

/// Errors that can occur when validating a polynomial solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("imag_tol must be finite and non-negative")]
    Imag,

    #[error("residual_tol must be finite and non-negative")]
    Residual,

    #[error("merge_tol must be finite and non-negative")]
    Merge,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            imag_tol: 1e-8,
            residual_tol: 1e-9,
            merge_tol: 1e-9,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(imag_tol: f64, residual_tol: f64, merge_tol: f64) -> Result<Self, ConfigError> {
        if !is_valid_tol(imag_tol) {
            return Err(ConfigError::Imag);
        }
        if !is_valid_tol(residual_tol) {
            return Err(ConfigError::Residual);
        }
        if !is_valid_tol(merge_tol) {
            return Err(ConfigError::Merge);
        }

        Ok(Self {
            imag_tol,
            residual_tol,
            merge_tol,
        })
    }

    /// Returns the tolerance, relative to `1 + |Re z|`, below which the
    /// imaginary part of a Laguerre root is treated as zero.
    #[must_use]
    pub fn imag_tol(&self) -> f64 {
        self.imag_tol
    }

    /// Returns the relative residual a candidate root must meet to be accepted.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the tolerance used to merge repeated roots.
    #[must_use]
    pub fn merge_tol(&self) -> f64 {
        self.merge_tol
    }
}

fn is_valid_tol(tol: f64) -> bool {
    tol.is_finite() && tol >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(
            Config::new(config.imag_tol(), config.residual_tol(), config.merge_tol()),
            Ok(config)
        );
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(-1.0, 1e-9, 1e-9), Err(ConfigError::Imag));
        assert_eq!(Config::new(1e-8, f64::NAN, 1e-9), Err(ConfigError::Residual));
        assert_eq!(
            Config::new(1e-8, 1e-9, f64::INFINITY),
            Err(ConfigError::Merge)
        );
    }
}
