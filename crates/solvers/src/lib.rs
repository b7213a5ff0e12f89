//! Numerical solvers for the descent optimization toolkit.
//!
//! See [`optimization`] for the available solvers.

pub mod optimization;
