use crate::{Hessian, Objective, SecondOrder};

/// Adapter that negates an objective, its gradient, and its Hessian.
///
/// Used to implement maximization by minimizing the negated objective.
/// Negating a concave objective gives a convex one, so every minimizer in the
/// toolkit can maximize through this adapter.
#[derive(Debug, Clone, Copy)]
pub struct Negate<P>(pub P);

impl<const N: usize, P> Objective<N> for Negate<P>
where
    P: Objective<N>,
{
    type Error = P::Error;

    fn value(&self, x: &[f64; N]) -> Result<f64, Self::Error> {
        self.0.value(x).map(|v| -v)
    }

    fn gradient(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error> {
        self.0.gradient(x).map(|g| g.map(|gi| -gi))
    }
}

impl<const N: usize, P> SecondOrder<N> for Negate<P>
where
    P: SecondOrder<N>,
{
    fn hessian(&self, x: &[f64; N]) -> Result<Hessian<N>, Self::Error> {
        self.0
            .hessian(x)
            .map(|h| h.map(|row| row.map(|hij| -hij)))
    }
}
