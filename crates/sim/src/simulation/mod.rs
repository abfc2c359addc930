//! Simulation engine and population series.
//!
//! Re-exports
//!
//! - `simulate`: runs the fox/rabbit recurrence and returns a fresh series.
//! - `PopulationSeries`: immutable record of one run.
//! - `ParameterSet`: the five rate coefficients.
//! - `SimulationBuilder`: fluent construction of a run.

pub mod builder;
pub mod engine;
pub mod parameters;
pub mod series;

pub use builder::SimulationBuilder;
pub use engine::{simulate, step, MAX_DURATION};
pub use parameters::{Parameter, ParameterSet};
pub use series::{PopulationSample, PopulationSeries};
