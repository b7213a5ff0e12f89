use std::convert::Infallible;

use super::{Hessian, Objective, SecondOrder};

/// An [`Objective`] built from a value closure and a gradient closure.
///
/// Closure arguments need an explicit type so the dimension can be inferred:
///
/// ```
/// use descent_core::{FnObjective, Objective};
///
/// let parabola = FnObjective::new(
///     |x: &[f64; 1]| x[0] * x[0] - 2.0 * x[0] - 5.0,
///     |x: &[f64; 1]| [2.0 * x[0] - 2.0],
/// );
///
/// assert_eq!(parabola.value(&[1.0]).unwrap(), -6.0);
/// assert_eq!(parabola.gradient(&[1.0]).unwrap(), [0.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnObjective<F, G> {
    value: F,
    gradient: G,
}

impl<F, G> FnObjective<F, G> {
    /// Bundles a value closure and a gradient closure.
    pub fn new(value: F, gradient: G) -> Self {
        Self { value, gradient }
    }

    /// Attaches a Hessian closure, producing a [`SecondOrder`] objective.
    pub fn with_hessian<H>(self, hessian: H) -> FnSecondOrder<F, G, H> {
        FnSecondOrder {
            value: self.value,
            gradient: self.gradient,
            hessian,
        }
    }
}

impl<const N: usize, F, G> Objective<N> for FnObjective<F, G>
where
    F: Fn(&[f64; N]) -> f64,
    G: Fn(&[f64; N]) -> [f64; N],
{
    type Error = Infallible;

    fn value(&self, x: &[f64; N]) -> Result<f64, Self::Error> {
        Ok((self.value)(x))
    }

    fn gradient(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error> {
        Ok((self.gradient)(x))
    }
}

/// A [`SecondOrder`] objective built from value, gradient, and Hessian closures.
///
/// Usually created with [`FnObjective::with_hessian`].
#[derive(Debug, Clone, Copy)]
pub struct FnSecondOrder<F, G, H> {
    value: F,
    gradient: G,
    hessian: H,
}

impl<const N: usize, F, G, H> Objective<N> for FnSecondOrder<F, G, H>
where
    F: Fn(&[f64; N]) -> f64,
    G: Fn(&[f64; N]) -> [f64; N],
{
    type Error = Infallible;

    fn value(&self, x: &[f64; N]) -> Result<f64, Self::Error> {
        Ok((self.value)(x))
    }

    fn gradient(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error> {
        Ok((self.gradient)(x))
    }
}

impl<const N: usize, F, G, H> SecondOrder<N> for FnSecondOrder<F, G, H>
where
    F: Fn(&[f64; N]) -> f64,
    G: Fn(&[f64; N]) -> [f64; N],
    H: Fn(&[f64; N]) -> Hessian<N>,
{
    fn hessian(&self, x: &[f64; N]) -> Result<Hessian<N>, Self::Error> {
        Ok((self.hessian)(x))
    }
}
