//! Step recorder for inspecting solver progress after a solve.

use descent_core::Observer;

use crate::traits::{HasIteration, HasObjective, HasStepSize};

/// One recorded step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub iteration: usize,
    pub objective: f64,
    pub step_size: f64,
}

/// An observer that records the iteration, objective, and step size of every
/// event it sees.
///
/// Pass `&mut Recorder` to a solver that takes its observer by value, then
/// read the rows once the solve completes:
///
/// ```
/// use descent_core::FnObjective;
/// use descent_observers::Recorder;
/// use descent_solvers::optimization::{descent::Config, gradient_descent};
///
/// let parabola = FnObjective::new(
///     |x: &[f64; 1]| x[0].powi(2) - 2.0 * x[0] - 5.0,
///     |x: &[f64; 1]| [2.0 * x[0] - 2.0],
/// );
///
/// let mut recorder = Recorder::new();
/// let solution =
///     gradient_descent::minimize(&parabola, [0.0], &Config::default(), &mut recorder).unwrap();
///
/// assert_eq!(recorder.len(), solution.iters);
/// ```
///
/// The recorder never returns an action.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    rows: Vec<Row>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded rows in event order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the recorded objective values.
    pub fn objectives(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.objective)
    }

    /// Consumes the recorder, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl<E, A> Observer<E, A> for Recorder
where
    E: HasIteration + HasObjective + HasStepSize,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.rows.push(Row {
            iteration: event.iteration(),
            objective: event.objective(),
            step_size: event.step_size(),
        });
        None
    }
}

/// Allows `&mut Recorder` to be passed to solvers that take an observer by
/// value, so the rows can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut Recorder
where
    E: HasIteration + HasObjective + HasStepSize,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
