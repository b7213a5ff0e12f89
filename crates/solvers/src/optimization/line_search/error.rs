use std::error::Error as StdError;

use crate::optimization::{EvalError, Quantity};

/// Errors that can occur during a backtracking line search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not a descent direction: directional derivative {slope} must be negative")]
    NotDescent { slope: f64 },

    #[error("no acceptable step after {max_backtracks} backtracks (last trial step {step_size})")]
    MaxBacktracks { max_backtracks: usize, step_size: f64 },

    #[error("step size {step_size} no longer moves the iterate")]
    StepUnderflow { step_size: f64 },

    #[error("non-finite {quantity} during line search")]
    NonFinite { quantity: Quantity },

    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl<E> From<EvalError<E>> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<E>) -> Self {
        match err {
            EvalError::Objective(e) => Self::Objective(Box::new(e)),
            EvalError::NonFinite { quantity } => Self::NonFinite { quantity },
        }
    }
}
