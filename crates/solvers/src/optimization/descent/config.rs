use thiserror::Error;

use crate::optimization::line_search;

/// Configuration shared by the descent solvers.
///
/// Bounds both loops: `max_iters` caps accepted steps, and the line search
/// config caps backtracks within each step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Params", into = "Params")
)]
pub struct Config {
    line_search: line_search::Config,
    tolerance: f64,
    max_iters: usize,
    record_trajectory: bool,
}

/// Errors that can occur when validating a descent solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    LineSearch(#[from] line_search::ConfigError),

    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 0.7, 1e-8).unwrap()
    }
}

impl Config {
    /// Default cap on accepted steps.
    pub const DEFAULT_MAX_ITERS: usize = 10_000;

    /// Creates a new config with validated line search parameters and
    /// tolerance.
    ///
    /// The iteration and backtracking budgets start at their defaults and can
    /// be changed with [`with_max_iters`](Self::with_max_iters) and
    /// [`with_max_backtracks`](Self::with_max_backtracks).
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha` is outside `(0, 0.5)`, `beta` is outside
    /// `(0, 1)`, or `tolerance` is negative or non-finite.
    pub fn new(alpha: f64, beta: f64, tolerance: f64) -> Result<Self, ConfigError> {
        let line_search = line_search::Config::new(
            alpha,
            beta,
            line_search::Config::default().max_backtracks(),
        )?;
        Self::from_line_search(line_search, tolerance)
    }

    /// Creates a new config from an existing line search config.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is negative or non-finite.
    pub fn from_line_search(
        line_search: line_search::Config,
        tolerance: f64,
    ) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            line_search,
            tolerance,
            max_iters: Self::DEFAULT_MAX_ITERS,
            record_trajectory: false,
        })
    }

    /// Returns a copy with a different cap on accepted steps.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns a copy with a different cap on backtracks per step.
    #[must_use]
    pub fn with_max_backtracks(self, max_backtracks: usize) -> Self {
        Self {
            line_search: self.line_search.with_max_backtracks(max_backtracks),
            ..self
        }
    }

    /// Returns a copy that does (or does not) record the trajectory.
    #[must_use]
    pub fn with_record_trajectory(self, record_trajectory: bool) -> Self {
        Self {
            record_trajectory,
            ..self
        }
    }

    /// Returns the line search config.
    #[must_use]
    pub fn line_search(&self) -> &line_search::Config {
        &self.line_search
    }

    /// Returns the convergence tolerance.
    ///
    /// Gradient and coordinate descent compare it against `‖∇f(x)‖₂`; Newton's
    /// method compares it against half the squared Newton decrement.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of accepted steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns `true` if solutions carry a trajectory.
    #[must_use]
    pub fn record_trajectory(&self) -> bool {
        self.record_trajectory
    }
}

/// Flat, serializable form of [`Config`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Params {
    alpha: f64,
    beta: f64,
    tolerance: f64,
    max_iters: usize,
    max_backtracks: usize,
    record_trajectory: bool,
}

#[cfg(feature = "serde")]
impl Default for Params {
    fn default() -> Self {
        Config::default().into()
    }
}

#[cfg(feature = "serde")]
impl From<Config> for Params {
    fn from(config: Config) -> Self {
        Self {
            alpha: config.line_search.alpha(),
            beta: config.line_search.beta(),
            tolerance: config.tolerance,
            max_iters: config.max_iters,
            max_backtracks: config.line_search.max_backtracks(),
            record_trajectory: config.record_trajectory,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<Params> for Config {
    type Error = ConfigError;

    fn try_from(params: Params) -> Result<Self, Self::Error> {
        Ok(Config::new(params.alpha, params.beta, params.tolerance)?
            .with_max_iters(params.max_iters)
            .with_max_backtracks(params.max_backtracks)
            .with_record_trajectory(params.record_trajectory))
    }
}
