use descent_core::{Objective, Observer, vector};
use tracing::{debug, trace};

use crate::optimization::{evaluate, evaluate::gradient_at, line_search};

use super::{
    Action, Config, Error, Event, Solution, Status,
    direction::DirectionRule,
    state::State,
};

/// Core descent loop.
///
/// The `transform` function maps objective values to the caller's sign
/// convention before they are reported, allowing the same loop to serve
/// minimization (transform = identity) and maximization of a negated
/// objective (transform = negation).
pub(crate) fn run<P, R, Obs, F, const N: usize>(
    objective: &P,
    rule: &R,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
    transform: F,
) -> Result<Solution<N>, Error>
where
    P: Objective<N>,
    R: DirectionRule<P, N>,
    Obs: Observer<Event<N>, Action>,
    F: Fn(f64) -> f64,
{
    let start = evaluate(objective, x0).map_err(|e| Error::eval(0, e))?;
    let mut state = State::new(start, config.record_trajectory(), &transform);

    loop {
        let iter = state.iters();
        let proposal = rule
            .propose(objective, state.x(), state.gradient())
            .map_err(|e| Error::rule(iter, e))?;

        if proposal.is_converged(config.tolerance()) {
            debug!(iters = iter, measure = proposal.measure, "converged");
            return Ok(state.into_solution(Status::Converged, &transform));
        }

        if iter >= config.max_iters() {
            debug!(
                iters = iter,
                measure = proposal.measure,
                tolerance = config.tolerance(),
                "stopped at iteration limit without converging"
            );
            return Ok(state.into_solution(Status::MaxIters, &transform));
        }

        let iter = iter + 1;
        let step = line_search::backtrack(
            objective,
            state.x(),
            state.objective(),
            state.gradient(),
            &proposal.direction,
            config.line_search(),
        )
        .map_err(|source| Error::LineSearch { iter, source })?;

        let x = vector::step(state.x(), step.size, &proposal.direction);
        let gradient = gradient_at(objective, &x).map_err(|e| Error::eval(iter, e))?;
        let improvement = state.objective() - step.objective;

        state.advance(x, step.objective, gradient, &transform);

        let objective_value = transform(step.objective);
        trace!(
            iter,
            objective = objective_value,
            step_size = step.size,
            backtracks = step.backtracks,
            "accepted step"
        );

        let event = Event {
            iter,
            x,
            objective: objective_value,
            improvement,
            direction: proposal.direction,
            step_size: step.size,
            backtracks: step.backtracks,
            measure: proposal.measure,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(iters = iter, "stopped by observer");
            return Ok(state.into_solution(Status::StoppedByObserver, &transform));
        }
    }
}
