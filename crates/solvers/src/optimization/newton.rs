//! Newton's method with backtracking line search.
//!
//! # Algorithm
//!
//! At each iterate the solver solves `∇²f(x)·Δx = -∇f(x)` for the Newton
//! step and computes the Newton decrement `λ² = -∇f(x)ᵀΔx`. It stops once
//! `λ²/2` falls below the configured tolerance; otherwise it backtracks along
//! `Δx` and moves.
//!
//! `λ²/2` estimates the gap `f(x) - p*` for self-concordant objectives, so
//! the tolerance is in units of the objective rather than the gradient.
//!
//! # Requirements
//!
//! The Hessian must be symmetric positive definite at every iterate. A
//! Hessian that is indefinite, singular, asymmetric, or non-finite fails the
//! solve with [`Error::Hessian`] instead of producing a garbage step.
//!
//! # Observer Events
//!
//! See [`descent`](super::descent) for the events emitted and the actions
//! observers can take.

mod hessian;


pub use hessian::HessianError;

use descent_core::{Negate, Observer, SecondOrder, vector};

use super::{
    EvalError,
    descent::{
        Action, Config, Error, Event, Solution,
        direction::{DirectionRule, Proposal, RuleError},
        run,
    },
};

/// The Newton step, measured by half the squared Newton decrement.
struct NewtonStep;

impl<P, const N: usize> DirectionRule<P, N> for NewtonStep
where
    P: SecondOrder<N>,
{
    fn propose(
        &self,
        objective: &P,
        x: &[f64; N],
        gradient: &[f64; N],
    ) -> Result<Proposal<N>, RuleError<P::Error>> {
        let h = objective
            .hessian(x)
            .map_err(|e| RuleError::Eval(EvalError::Objective(e)))?;
        let direction = hessian::newton_step(&h, gradient).map_err(RuleError::Hessian)?;

        let decrement_sq = -vector::dot(gradient, &direction);

        Ok(Proposal {
            direction,
            measure: 0.5 * decrement_sq,
        })
    }
}

/// Finds a minimizer of the objective using Newton's method.
///
/// The observer receives an [`Event`] after each accepted step.
///
/// # Errors
///
/// Returns an error if the objective fails or produces a non-finite value,
/// if the Hessian is not symmetric positive definite at an iterate, or if the
/// line search cannot find an acceptable step.
pub fn minimize<P, Obs, const N: usize>(
    objective: &P,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    P: SecondOrder<N>,
    Obs: Observer<Event<N>, Action>,
{
    run(objective, &NewtonStep, x0, config, observer, |v| v)
}

/// Finds a minimizer of the objective without observer support.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<P, const N: usize>(
    objective: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    P: SecondOrder<N>,
{
    minimize(objective, x0, config, ())
}

/// Finds a maximizer of a concave objective using Newton's method.
///
/// The Hessian of the objective must be negative definite at every iterate.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize<P, Obs, const N: usize>(
    objective: &P,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    P: SecondOrder<N>,
    Obs: Observer<Event<N>, Action>,
{
    run(&Negate(objective), &NewtonStep, x0, config, observer, |v| -v)
}

/// Finds a maximizer of a concave objective without observer support.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize_unobserved<P, const N: usize>(
    objective: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    P: SecondOrder<N>,
{
    maximize(objective, x0, config, ())
}
