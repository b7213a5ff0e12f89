use std::fmt;

use thiserror::Error;

use descent_core::{Objective, vector};

/// The result of evaluating an objective at a given `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation<const N: usize> {
    pub x: [f64; N],

    pub objective: f64,

    pub gradient: [f64; N],
}

/// A computed quantity that can come back non-finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Objective,
    Gradient,
    Slope,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Objective => "objective",
            Self::Gradient => "gradient",
            Self::Slope => "directional derivative",
        })
    }
}

/// Errors that can occur when evaluating an objective.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// The objective or its gradient returned an error.
    #[error("objective evaluation failed")]
    Objective(#[source] E),

    /// The objective or its gradient produced a non-finite value.
    #[error("non-finite {quantity}")]
    NonFinite { quantity: Quantity },
}

/// Evaluates the objective and its gradient at `x`.
///
/// Unlike trial points in a line search, an iterate must lie inside the
/// domain, so an infinite objective is rejected here.
///
/// # Errors
///
/// Returns an error if either evaluation fails or produces a non-finite value.
pub fn evaluate<P, const N: usize>(
    objective: &P,
    x: [f64; N],
) -> Result<Evaluation<N>, EvalError<P::Error>>
where
    P: Objective<N>,
{
    let value = objective.value(&x).map_err(EvalError::Objective)?;
    if !value.is_finite() {
        return Err(EvalError::NonFinite {
            quantity: Quantity::Objective,
        });
    }

    let gradient = gradient_at(objective, &x)?;

    Ok(Evaluation {
        x,
        objective: value,
        gradient,
    })
}

/// Evaluates only the gradient at `x`, rejecting non-finite components.
pub(crate) fn gradient_at<P, const N: usize>(
    objective: &P,
    x: &[f64; N],
) -> Result<[f64; N], EvalError<P::Error>>
where
    P: Objective<N>,
{
    let gradient = objective.gradient(x).map_err(EvalError::Objective)?;
    if !vector::is_finite(&gradient) {
        return Err(EvalError::NonFinite {
            quantity: Quantity::Gradient,
        });
    }
    Ok(gradient)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::FnObjective;

    #[test]
    fn evaluates_value_and_gradient() {
        let parabola = FnObjective::new(
            |x: &[f64; 1]| x[0].powi(2) - 2.0 * x[0] - 5.0,
            |x: &[f64; 1]| [2.0 * x[0] - 2.0],
        );

        let eval = evaluate(&parabola, [3.0]).expect("finite everywhere");

        assert_eq!(eval.x, [3.0]);
        assert_relative_eq!(eval.objective, -2.0);
        assert_relative_eq!(eval.gradient[0], 4.0);
    }

    #[test]
    fn rejects_infinite_objective_at_iterate() {
        let barrier = FnObjective::new(
            |x: &[f64; 1]| if x[0] > 0.0 { -x[0].ln() } else { f64::INFINITY },
            |x: &[f64; 1]| [-1.0 / x[0]],
        );

        let result = evaluate(&barrier, [-1.0]);

        assert!(matches!(
            result,
            Err(EvalError::NonFinite {
                quantity: Quantity::Objective
            })
        ));
    }

    #[test]
    fn rejects_nan_gradient() {
        let broken = FnObjective::new(|_: &[f64; 2]| 0.0, |_: &[f64; 2]| [0.0, f64::NAN]);

        let result = evaluate(&broken, [0.0, 0.0]);

        assert!(matches!(
            result,
            Err(EvalError::NonFinite {
                quantity: Quantity::Gradient
            })
        ));
    }
}
