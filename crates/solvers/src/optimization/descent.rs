//! The iteration engine shared by every descent solver.
//!
//! # Algorithm
//!
//! Each solver supplies a rule for choosing a search direction and a
//! convergence measure at the current iterate. The engine then repeats:
//!
//! 1. Ask the rule for a direction and measure at `x`.
//! 2. Stop with [`Status::Converged`] if the measure is below the tolerance.
//! 3. Stop with [`Status::MaxIters`] if the iteration budget is spent.
//! 4. Run the backtracking [`line_search`] along the direction.
//! 5. Move to `x + t·Δx`, evaluate the gradient there, and emit an [`Event`].
//!
//! Every accepted step satisfies the sufficient-decrease condition, so the
//! objective never increases from one iterate to the next.
//!
//! # Iterates
//!
//! The starting point is taken by value. Callers keep their own copy, and
//! the solver updates its internal iterate in place.
//!
//! # Observer Events
//!
//! The engine emits one [`Event`] per accepted step. Observers can return
//! [`Action::StopEarly`] to halt after that step; the solution then reports
//! [`Status::StoppedByObserver`] and the point just reached.
//!
//! # Trajectory
//!
//! With [`Config::with_record_trajectory`], the solution carries a
//! [`Trajectory`] holding the start point and every accepted iterate.
//!
//! [`line_search`]: crate::optimization::line_search

mod action;
mod config;
mod error;
mod event;
mod run;
mod solution;
mod state;
mod trajectory;

pub(crate) mod direction;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use trajectory::{Iterate, Trajectory};

pub(crate) use run::run;
