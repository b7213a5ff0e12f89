//! Gradient descent with backtracking line search.
//!
//! # Algorithm
//!
//! At each iterate the search direction is the negative gradient,
//! `Δx = -∇f(x)`. The solver stops once `‖∇f(x)‖₂` falls below the
//! configured tolerance; otherwise it backtracks along `Δx` and moves.
//!
//! # When to Use
//!
//! Gradient descent needs only first derivatives and is cheap per step. On a
//! strongly convex objective with curvature bounded by `m ≤ ∇²f ≤ M`, the
//! objective gap shrinks geometrically with ratio about `1 - m/M` per step,
//! so it slows down as the condition number `M/m` grows. Prefer
//! [`newton`](super::newton) when Hessians are available and the problem is
//! badly conditioned.
//!
//! # Observer Events
//!
//! See [`descent`](super::descent) for the events emitted and the actions
//! observers can take.

use descent_core::{Negate, Objective, Observer, vector};

use super::descent::{
    Action, Config, Error, Event, Solution,
    direction::{DirectionRule, Proposal, RuleError},
    run,
};

/// Steepest descent under the Euclidean norm.
struct NegativeGradient;

impl<P, const N: usize> DirectionRule<P, N> for NegativeGradient
where
    P: Objective<N>,
{
    fn propose(
        &self,
        _objective: &P,
        _x: &[f64; N],
        gradient: &[f64; N],
    ) -> Result<Proposal<N>, RuleError<P::Error>> {
        let direction = vector::negated(gradient);
        Ok(Proposal {
            direction,
            measure: vector::norm(gradient),
        })
    }
}

/// Finds a minimizer of the objective using gradient descent.
///
/// The observer receives an [`Event`] after each accepted step.
///
/// # Errors
///
/// Returns an error if the objective fails or produces a non-finite value,
/// or if the line search cannot find an acceptable step.
pub fn minimize<P, Obs, const N: usize>(
    objective: &P,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    P: Objective<N>,
    Obs: Observer<Event<N>, Action>,
{
    run(objective, &NegativeGradient, x0, config, observer, |v| v)
}

/// Finds a minimizer of the objective without observer support.
///
/// # Errors
///
/// Returns an error if the objective fails or produces a non-finite value,
/// or if the line search cannot find an acceptable step.
pub fn minimize_unobserved<P, const N: usize>(
    objective: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    P: Objective<N>,
{
    minimize(objective, x0, config, ())
}

/// Finds a maximizer of a concave objective using gradient ascent.
///
/// Reported objective values are in the caller's terms (not negated).
///
/// # Errors
///
/// Returns an error if the objective fails or produces a non-finite value,
/// or if the line search cannot find an acceptable step.
pub fn maximize<P, Obs, const N: usize>(
    objective: &P,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    P: Objective<N>,
    Obs: Observer<Event<N>, Action>,
{
    run(&Negate(objective), &NegativeGradient, x0, config, observer, |v| -v)
}

/// Finds a maximizer of a concave objective without observer support.
///
/// # Errors
///
/// Returns an error if the objective fails or produces a non-finite value,
/// or if the line search cannot find an acceptable step.
pub fn maximize_unobserved<P, const N: usize>(
    objective: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    P: Objective<N>,
{
    maximize(objective, x0, config, ())
}
