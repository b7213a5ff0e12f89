use thiserror::Error;

/// Configuration for the backtracking line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    alpha: f64,
    beta: f64,
    max_backtracks: usize,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alpha must lie in the open interval (0, 0.5)")]
    Alpha,

    #[error("beta must lie in the open interval (0, 1)")]
    Beta,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 0.7, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// `alpha` is the fraction of the linearly predicted decrease a step must
    /// achieve, `beta` is the factor the step shrinks by after each rejected
    /// trial, and `max_backtracks` bounds the number of shrinks.
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha` is outside `(0, 0.5)` or `beta` is outside
    /// `(0, 1)`. NaN is rejected for both.
    pub fn new(alpha: f64, beta: f64, max_backtracks: usize) -> Result<Self, ConfigError> {
        if !(alpha > 0.0 && alpha < 0.5) {
            return Err(ConfigError::Alpha);
        }
        if !(beta > 0.0 && beta < 1.0) {
            return Err(ConfigError::Beta);
        }

        Ok(Self {
            alpha,
            beta,
            max_backtracks,
        })
    }

    /// Returns a copy with a different backtracking budget.
    #[must_use]
    pub fn with_max_backtracks(self, max_backtracks: usize) -> Self {
        Self {
            max_backtracks,
            ..self
        }
    }

    /// Returns the sufficient-decrease fraction.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the step shrink factor.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the maximum number of step shrinks.
    #[must_use]
    pub fn max_backtracks(&self) -> usize {
        self.max_backtracks
    }
}
