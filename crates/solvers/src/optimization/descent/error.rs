use std::error::Error as StdError;

use crate::optimization::{EvalError, Quantity, line_search, newton::HessianError};

use super::direction::RuleError;

/// Errors that can occur during a descent solve.
///
/// `iter` is the step being attempted when the failure occurred, so a failure
/// at the starting point reports `iter = 0`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("objective error at iteration {iter}: {source}")]
    Objective {
        iter: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite {quantity} at iteration {iter}")]
    NonFinite { iter: usize, quantity: Quantity },

    #[error("invalid Hessian at iteration {iter}: {source}")]
    Hessian {
        iter: usize,
        #[source]
        source: HessianError,
    },

    #[error("line search failed at iteration {iter}: {source}")]
    LineSearch {
        iter: usize,
        #[source]
        source: line_search::Error,
    },
}

impl Error {
    /// Returns the iteration at which the solve failed.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Objective { iter, .. }
            | Self::NonFinite { iter, .. }
            | Self::Hessian { iter, .. }
            | Self::LineSearch { iter, .. } => *iter,
        }
    }

    pub(super) fn eval<E>(iter: usize, err: EvalError<E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match err {
            EvalError::Objective(e) => Self::Objective {
                iter,
                source: Box::new(e),
            },
            EvalError::NonFinite { quantity } => Self::NonFinite { iter, quantity },
        }
    }

    pub(super) fn rule<E>(iter: usize, err: RuleError<E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match err {
            RuleError::Eval(e) => Self::eval(iter, e),
            RuleError::Hessian(source) => Self::Hessian { iter, source },
        }
    }
}
