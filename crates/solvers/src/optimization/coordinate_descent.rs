//! Greedy coordinate descent with backtracking line search.
//!
//! # Algorithm
//!
//! At each iterate the solver picks the coordinate with the largest gradient
//! magnitude, `i* = argmax_i |∂f/∂xᵢ|`, and searches along that axis alone:
//! `Δx = -(∂f/∂xᵢ*) eᵢ*`. This is steepest descent under the L1 norm. Ties go
//! to the lowest index. The solver stops once `‖∇f(x)‖₂` falls below the
//! configured tolerance.
//!
//! # Limitations
//!
//! Each step moves one coordinate, so objectives with strongly coupled
//! variables make the iterates zig-zag and converge slowly. That is inherent
//! to the method, not a defect of this implementation.
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

/// Steepest descent under the L1 norm.
struct SteepestCoordinate;

impl<P, const N: usize> DirectionRule<P, N> for SteepestCoordinate
where
    P: Objective<N>,
{
    fn propose(
        &self,
        _objective: &P,
        _x: &[f64; N],
        gradient: &[f64; N],
    ) -> Result<Proposal<N>, RuleError<P::Error>> {
        let mut direction = [0.0; N];
        if let Some(i) = steepest_coordinate(gradient) {
            direction[i] = -gradient[i];
        }

        Ok(Proposal {
            direction,
            measure: vector::norm(gradient),
        })
    }
}

/// Index of the largest-magnitude component, first one on ties.
///
/// Returns `None` only when `N == 0`.
fn steepest_coordinate<const N: usize>(gradient: &[f64; N]) -> Option<usize> {
    gradient
        .iter()
        .map(|g| g.abs())
        .enumerate()
        .fold(None, |best, (i, magnitude)| match best {
            Some((_, best_magnitude)) if best_magnitude >= magnitude => best,
            _ => Some((i, magnitude)),
        })
        .map(|(i, _)| i)
}

/// Finds a minimizer of the objective using coordinate descent.
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
    run(objective, &SteepestCoordinate, x0, config, observer, |v| v)
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

/// Finds a maximizer of a concave objective using coordinate ascent.
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
    run(&Negate(objective), &SteepestCoordinate, x0, config, observer, |v| -v)
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
