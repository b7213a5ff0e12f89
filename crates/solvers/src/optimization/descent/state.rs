use crate::optimization::Evaluation;

use super::{Solution, Status, Trajectory};

/// The solver's view of the current iterate.
///
/// Objective values are stored as the engine sees them; `transform` maps them
/// back to the caller's sign convention whenever they leave the engine.
pub(super) struct State<const N: usize> {
    x: [f64; N],
    objective: f64,
    gradient: [f64; N],
    iters: usize,
    trajectory: Option<Trajectory<N>>,
}

impl<const N: usize> State<N> {
    pub(super) fn new<F: Fn(f64) -> f64>(
        start: Evaluation<N>,
        record: bool,
        transform: &F,
    ) -> Self {
        let trajectory = record.then(|| {
            let mut trajectory = Trajectory::new();
            trajectory.push(start.x, transform(start.objective));
            trajectory
        });

        Self {
            x: start.x,
            objective: start.objective,
            gradient: start.gradient,
            iters: 0,
            trajectory,
        }
    }

    pub(super) fn x(&self) -> &[f64; N] {
        &self.x
    }

    pub(super) fn objective(&self) -> f64 {
        self.objective
    }

    pub(super) fn gradient(&self) -> &[f64; N] {
        &self.gradient
    }

    pub(super) fn iters(&self) -> usize {
        self.iters
    }

    /// Moves to an accepted iterate.
    pub(super) fn advance<F: Fn(f64) -> f64>(
        &mut self,
        x: [f64; N],
        objective: f64,
        gradient: [f64; N],
        transform: &F,
    ) {
        self.x = x;
        self.objective = objective;
        self.gradient = gradient;
        self.iters += 1;

        if let Some(trajectory) = &mut self.trajectory {
            trajectory.push(x, transform(objective));
        }
    }

    pub(super) fn into_solution<F: Fn(f64) -> f64>(
        self,
        status: Status,
        transform: &F,
    ) -> Solution<N> {
        Solution {
            status,
            x: self.x,
            objective: transform(self.objective),
            iters: self.iters,
            trajectory: self.trajectory,
        }
    }
}
