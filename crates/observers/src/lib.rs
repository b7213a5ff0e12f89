//! Reusable observers for the descent solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in `descent-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasObjective`], [`HasStepSize`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Recorder`]: collects one row per accepted step
//! - [`StallGuard`]: stops a solver once the objective stops moving
//!
//! [`Observer`]: descent_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasObjective`]: traits::HasObjective
//! [`HasStepSize`]: traits::HasStepSize
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod recorder;
mod stall;

pub use recorder::{Recorder, Row};
pub use stall::{StallGuard, StallGuardError};
