//! Solvers for unconstrained optimization problems.
//!
//! An [`Objective`] supplies a scalar value and its gradient at points
//! `x: [f64; N]`; a [`SecondOrder`] objective also supplies its Hessian.
//! Solvers in this module search for the `x` that minimizes (or maximizes)
//! that value.
//!
//! # Solvers
//!
//! - [`gradient_descent`]: steps along the negative gradient
//! - [`coordinate_descent`]: steps along the single coordinate with the
//!   largest gradient magnitude
//! - [`newton`]: steps along the Newton direction, using the Newton decrement
//!   as the stopping criterion
//!
//! All three share the backtracking [`line_search`] and the iteration engine
//! in [`descent`], which owns configuration, events, and solutions.
//!
//! [`Objective`]: descent_core::Objective
//! [`SecondOrder`]: descent_core::SecondOrder

mod evaluate;

pub use evaluate::{EvalError, Evaluation, Quantity, evaluate};

pub mod coordinate_descent;
pub mod descent;
pub mod gradient_descent;
pub mod line_search;
pub mod newton;
