//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use foxhare_sim::prelude::*;
//!
//! let series = simulate(&ParameterSet::default(), 100, 10, 3).unwrap();
//! let mut out = Vec::<u8>::new();
//! render(ChartKind::Table, Some(&series), &mut out).unwrap();
//! ```

pub use crate::errors::{SeriesError, SimulationError};
pub use crate::simulation::{
    simulate, Parameter, ParameterSet, PopulationSample, PopulationSeries, SimulationBuilder,
    MAX_DURATION,
};
pub use crate::storage::{LoadedParameters, ParameterOrigin, ParameterStore, StoreError};
pub use crate::visualization::{compute_scale, render, ChartKind};
