//! Core traits and types for the descent optimization toolkit.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Objective`]: a scalar function with its gradient, evaluated at
//!   points `x: [f64; N]`
//! - [`SecondOrder`]: an [`Objective`] that also supplies its Hessian
//! - [`FnObjective`], [`FnSecondOrder`]: adapters that turn plain closures
//!   into objectives
//! - [`Negate`]: flips the sign of an objective, turning maximization into
//!   minimization
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! The [`vector`] module holds the small amount of dense vector arithmetic
//! the solvers share.

mod negate;
mod objective;
mod observer;

pub mod vector;

pub use negate::Negate;
pub use objective::{FnObjective, FnSecondOrder, Hessian, Objective, SecondOrder};
pub use observer::Observer;
