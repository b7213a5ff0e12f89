//! Early stopping when the objective stops moving.

use descent_core::Observer;
use thiserror::Error;

use crate::traits::{CanStopEarly, HasObjective};

/// An observer that stops a solver once progress stalls.
///
/// A step counts as stalled when the objective changes by less than
/// `threshold` from the previous event. After `patience` consecutive stalled
/// steps, the guard requests an early stop. Any step that moves the objective
/// by at least `threshold` resets the count.
///
/// The comparison uses the magnitude of the change, so the guard works for
/// both minimization and maximization.
#[derive(Debug, Clone)]
pub struct StallGuard {
    threshold: f64,
    patience: usize,
    previous: Option<f64>,
    stalled: usize,
}

/// Errors that can occur when creating a [`StallGuard`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StallGuardError {
    #[error("threshold must be non-negative and not NaN")]
    Threshold,
}

impl StallGuard {
    /// Creates a guard that stops after `patience` consecutive steps whose
    /// objective change is below `threshold`.
    ///
    /// A `patience` of zero is treated as one. A zero threshold never fires,
    /// and an infinite one counts every step after the first as stalled.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is negative or NaN.
    pub fn new(threshold: f64, patience: usize) -> Result<Self, StallGuardError> {
        if threshold.is_nan() || threshold < 0.0 {
            return Err(StallGuardError::Threshold);
        }

        Ok(Self {
            threshold,
            patience: patience.max(1),
            previous: None,
            stalled: 0,
        })
    }

    /// Returns the number of consecutive stalled steps seen so far.
    #[must_use]
    pub fn stalled_steps(&self) -> usize {
        self.stalled
    }
}

impl<E, A> Observer<E, A> for StallGuard
where
    E: HasObjective,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let objective = event.objective();

        if let Some(previous) = self.previous.replace(objective) {
            if (previous - objective).abs() < self.threshold {
                self.stalled += 1;
            } else {
                self.stalled = 0;
            }
        }

        (self.stalled >= self.patience).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use descent_core::FnObjective;
    use descent_solvers::optimization::{
        descent::{Config, Status},
        gradient_descent,
    };

    struct Event(f64);

    impl HasObjective for Event {
        fn objective(&self) -> f64 {
            self.0
        }
    }

    #[derive(Debug, PartialEq)]
    struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    fn first_stop(guard: &mut StallGuard, objectives: &[f64]) -> Option<usize> {
        objectives
            .iter()
            .position(|&f| Observer::<Event, Stop>::observe(guard, &Event(f)).is_some())
    }

    #[test]
    fn stops_after_patience_runs_out() {
        let mut guard = StallGuard::new(1e-3, 2).unwrap();

        let stopped = first_stop(&mut guard, &[10.0, 5.0, 4.9999, 4.9998, 1.0]);

        assert_eq!(stopped, Some(3));
        assert_eq!(guard.stalled_steps(), 2);
    }

    #[test]
    fn progress_resets_the_count() {
        let mut guard = StallGuard::new(1e-3, 2).unwrap();

        let stopped = first_stop(&mut guard, &[10.0, 9.9999, 5.0, 4.9999, 1.0, 0.9999]);

        assert_eq!(stopped, None);
        assert_eq!(guard.stalled_steps(), 1);
    }

    #[test]
    fn first_event_never_stalls() {
        let mut guard = StallGuard::new(f64::INFINITY, 1).unwrap();

        assert_eq!(first_stop(&mut guard, &[3.0]), None);
        assert_eq!(first_stop(&mut guard, &[3.0]), Some(0));
    }

    #[test]
    fn rejects_meaningless_thresholds() {
        assert_eq!(
            StallGuard::new(f64::NAN, 3).unwrap_err(),
            StallGuardError::Threshold
        );
        assert_eq!(
            StallGuard::new(-1e-6, 3).unwrap_err(),
            StallGuardError::Threshold
        );
        assert!(StallGuard::new(0.0, 3).is_ok());
    }

    #[test]
    fn halts_a_slow_solve() {
        // f(x, y) = ½(x² + 1000y²) crawls along x once y has settled.
        let bowl = FnObjective::new(
            |x: &[f64; 2]| 0.5 * (x[0].powi(2) + 1000.0 * x[1].powi(2)),
            |x: &[f64; 2]| [x[0], 1000.0 * x[1]],
        );
        let config = Config::default().with_max_iters(100_000);

        let unguarded = gradient_descent::minimize_unobserved(&bowl, [10.0, 1.0], &config)
            .expect("should converge");

        let guard = StallGuard::new(1e-6, 3).unwrap();
        let guarded = gradient_descent::minimize(&bowl, [10.0, 1.0], &config, guard)
            .expect("should stop cleanly");

        assert_eq!(guarded.status, Status::StoppedByObserver);
        assert!(guarded.iters < unguarded.iters);
        assert!(guarded.objective < 50.0);
    }

    #[test]
    fn halts_a_slow_maximization() {
        // f(x, y) = -½(x² + 1000y²) creeps up toward 0 along x.
        let cap = FnObjective::new(
            |x: &[f64; 2]| -0.5 * (x[0].powi(2) + 1000.0 * x[1].powi(2)),
            |x: &[f64; 2]| [-x[0], -1000.0 * x[1]],
        );
        let config = Config::default().with_max_iters(100_000);

        let unguarded = gradient_descent::maximize_unobserved(&cap, [10.0, 1.0], &config)
            .expect("should converge");

        let guard = StallGuard::new(1e-6, 3).unwrap();
        let guarded = gradient_descent::maximize(&cap, [10.0, 1.0], &config, guard)
            .expect("should stop cleanly");

        assert_eq!(unguarded.status, Status::Converged);
        assert_eq!(guarded.status, Status::StoppedByObserver);
        assert!(guarded.iters < unguarded.iters);
        assert!(guarded.objective > -50.0);
        assert!(guarded.objective <= unguarded.objective);
    }
}
