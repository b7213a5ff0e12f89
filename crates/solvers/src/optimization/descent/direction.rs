use descent_core::Objective;

use crate::optimization::{EvalError, newton::HessianError};

/// A search direction together with what the engine needs to use it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Proposal<const N: usize> {
    pub(crate) direction: [f64; N],

    /// Convergence measure compared against the tolerance.
    pub(crate) measure: f64,
}

impl<const N: usize> Proposal<N> {
    /// An exactly stationary point converges regardless of the tolerance.
    pub(crate) fn is_converged(&self, tolerance: f64) -> bool {
        self.measure < tolerance || self.measure <= 0.0
    }
}

pub(crate) enum RuleError<E> {
    Eval(EvalError<E>),
    Hessian(HessianError),
}

/// Chooses the search direction at an iterate.
pub(crate) trait DirectionRule<P, const N: usize>
where
    P: Objective<N>,
{
    fn propose(
        &self,
        objective: &P,
        x: &[f64; N],
        gradient: &[f64; N],
    ) -> Result<Proposal<N>, RuleError<P::Error>>;
}
