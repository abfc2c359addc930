//! # Simulation Crate
//!
//! The `sim` crate provides the core logic for the fox/rabbit simulator.
//! It includes the discrete Lotka-Volterra engine, the population series it
//! produces, text charts for viewing a series, and flat-file persistence of
//! the rate parameters.

pub mod errors;
pub mod prelude;
pub mod simulation;
pub mod storage;
pub mod visualization;

pub use simulation::{simulate, ParameterSet, PopulationSeries};
