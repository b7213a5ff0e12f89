use super::Trajectory;

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The convergence measure fell below the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a descent solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// The final iterate.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// Number of accepted steps.
    pub iters: usize,

    /// Every iterate visited, if recording was enabled.
    pub trajectory: Option<Trajectory<N>>,
}

impl<const N: usize> Solution<N> {
    /// Returns `true` if the solver met its convergence criterion.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
