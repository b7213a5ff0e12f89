mod closures;

pub use closures::{FnObjective, FnSecondOrder};

/// A row-major `N × N` Hessian matrix.
pub type Hessian<const N: usize> = [[f64; N]; N];

/// A differentiable scalar function of `N` real variables.
///
/// Solvers treat implementations as pure: evaluating the same `x` twice must
/// give the same value and gradient. The dimension is carried by the const
/// generic `N`, so a gradient of the wrong length cannot be expressed.
pub trait Objective<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// A value of `f64::INFINITY` marks `x` as outside the domain. Line
    /// searches treat such a trial point as rejected and shrink the step.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be evaluated.
    fn value(&self, x: &[f64; N]) -> Result<f64, Self::Error>;

    /// Evaluates the gradient at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the gradient cannot be evaluated.
    fn gradient(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error>;
}

/// An [`Objective`] that can also supply its Hessian.
///
/// Newton's method requires the Hessian to be symmetric positive definite at
/// every point it visits, which holds everywhere for strictly convex
/// objectives.
pub trait SecondOrder<const N: usize>: Objective<N> {
    /// Evaluates the Hessian at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Hessian cannot be evaluated.
    fn hessian(&self, x: &[f64; N]) -> Result<Hessian<N>, Self::Error>;
}

impl<const N: usize, P> Objective<N> for &P
where
    P: Objective<N> + ?Sized,
{
    type Error = P::Error;

    fn value(&self, x: &[f64; N]) -> Result<f64, Self::Error> {
        (**self).value(x)
    }

    fn gradient(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error> {
        (**self).gradient(x)
    }
}

impl<const N: usize, P> SecondOrder<N> for &P
where
    P: SecondOrder<N> + ?Sized,
{
    fn hessian(&self, x: &[f64; N]) -> Result<Hessian<N>, Self::Error> {
        (**self).hessian(x)
    }
}
