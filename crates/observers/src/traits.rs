//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once works with every descent solver.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events that carry a step counter
//! - [`HasObjective`]: events that carry an objective value
//! - [`HasStepSize`]: events that carry an accepted line search step
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use descent_core::Observer;
//! use descent_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() <= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use descent_solvers::optimization::descent;

/// An event that carries a step counter.
pub trait HasIteration {
    /// Returns the 1-based step counter for this event.
    fn iteration(&self) -> usize;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event, in the caller's sign convention.
    fn objective(&self) -> f64;
}

/// An event that carries an accepted step size.
pub trait HasStepSize {
    /// Returns the accepted step size `t`.
    fn step_size(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<const N: usize> HasIteration for descent::Event<N> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl<const N: usize> HasObjective for descent::Event<N> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl<const N: usize> HasStepSize for descent::Event<N> {
    fn step_size(&self) -> f64 {
        self.step_size
    }
}

impl CanStopEarly for descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
