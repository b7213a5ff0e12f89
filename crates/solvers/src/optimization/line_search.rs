//! Backtracking line search.
//!
//! # Algorithm
//!
//! Given a point `x` and a descent direction `Δx`, the search starts from the
//! full step `t = 1` and shrinks it by `β` until the sufficient-decrease
//! (Armijo) condition holds:
//!
//! ```text
//! f(x + t·Δx) ≤ f(x) + α·t·∇f(x)ᵀΔx
//! ```
//!
//! `f(x)` and the directional derivative `∇f(x)ᵀΔx` are computed once.
//!
//! For a descent direction and an objective that is continuously
//! differentiable near `x`, the condition holds for all small enough `t`, so
//! the search terminates. The [`Config`] still bounds the number of shrinks.
//!
//! # Domain
//!
//! A trial value of `f64::INFINITY` is treated as outside the domain of `f`
//! and rejected like any other trial. A NaN or `-∞` trial value is an error.
//!
//! # Step Underflow
//!
//! Once `t` is small enough that `x + t·Δx` rounds back to `x`, the trial
//! would trivially pass the condition without making progress. The search
//! fails with [`Error::StepUnderflow`] instead of accepting it.

mod config;
mod error;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;

use descent_core::{Objective, vector};
use tracing::trace;

use super::{Quantity, evaluate};

/// An accepted step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// The accepted step size `t ∈ (0, 1]`.
    pub size: f64,

    /// The objective at `x + t·Δx`.
    pub objective: f64,

    /// How many times the step was shrunk before it was accepted.
    pub backtracks: usize,
}

/// Finds a step size along `direction` that satisfies the sufficient-decrease
/// condition.
///
/// Evaluates `f(x)` and `∇f(x)` once, then delegates to [`backtrack`].
/// Neither `x` nor `direction` is modified.
///
/// # Errors
///
/// Returns an error if `direction` is not a descent direction at `x`, if the
/// objective fails or produces a non-finite value, if the step shrinks until
/// it no longer moves `x`, or if no step is accepted within the configured
/// number of backtracks.
pub fn search<P, const N: usize>(
    objective: &P,
    x: &[f64; N],
    direction: &[f64; N],
    config: &Config,
) -> Result<Step, Error>
where
    P: Objective<N>,
{
    let start = evaluate(objective, *x)?;
    backtrack(objective, x, start.objective, &start.gradient, direction, config)
}

/// Backtracks from `t = 1` given a precomputed `f(x)` and `∇f(x)`.
///
/// Solvers call this directly since they already hold both quantities.
///
/// # Errors
///
/// Returns an error if `direction` is not a descent direction, if the
/// objective fails or produces a NaN or `-∞` trial value, if the step shrinks
/// until `x + t·Δx` rounds back to `x`, or if no step is accepted within the
/// configured number of backtracks.
pub fn backtrack<P, const N: usize>(
    objective: &P,
    x: &[f64; N],
    value: f64,
    gradient: &[f64; N],
    direction: &[f64; N],
    config: &Config,
) -> Result<Step, Error>
where
    P: Objective<N>,
{
    let slope = vector::dot(gradient, direction);
    if slope.is_nan() || slope == f64::INFINITY {
        return Err(Error::NonFinite {
            quantity: Quantity::Slope,
        });
    }
    if slope >= 0.0 {
        return Err(Error::NotDescent { slope });
    }

    let mut t = 1.0;

    for backtracks in 0..=config.max_backtracks() {
        let trial = vector::step(x, t, direction);
        if trial == *x {
            trace!(step_size = t, backtracks, "step no longer moves the iterate");
            return Err(Error::StepUnderflow { step_size: t });
        }

        let trial_value = objective
            .value(&trial)
            .map_err(|e| Error::Objective(Box::new(e)))?;

        if trial_value.is_nan() || trial_value == f64::NEG_INFINITY {
            return Err(Error::NonFinite {
                quantity: Quantity::Objective,
            });
        }

        let predicted = predicted_change(gradient, direction, slope, t);
        if trial_value <= value + config.alpha() * predicted {
            return Ok(Step {
                size: t,
                objective: trial_value,
                backtracks,
            });
        }

        if backtracks < config.max_backtracks() {
            t *= config.beta();
        }
    }

    trace!(
        step_size = t,
        max_backtracks = config.max_backtracks(),
        "line search exhausted its backtracking budget"
    );

    Err(Error::MaxBacktracks {
        max_backtracks: config.max_backtracks(),
        step_size: t,
    })
}

/// First-order change `t·∇f(x)ᵀΔx` predicted for a step of size `t`.
///
/// A slope of `-∞` means `∇f(x)ᵀΔx` overflowed even though both vectors are
/// finite. The product is then recomputed from `t·Δx`, which is finite once
/// `t` is small enough.
fn predicted_change<const N: usize>(
    gradient: &[f64; N],
    direction: &[f64; N],
    slope: f64,
    t: f64,
) -> f64 {
    if slope.is_finite() {
        t * slope
    } else {
        vector::dot(gradient, &direction.map(|d| t * d))
    }
}
