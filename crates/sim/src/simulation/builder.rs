//! Builder pattern for running simulations.
//!
//! Provides a fluent API for assembling the inputs of a run, with the
//! default parameter set when none is given.

use crate::errors::SimulationError;
use crate::simulation::{simulate, ParameterSet, PopulationSeries};

/// Builder for a single simulation run.
///
/// # Examples
///
/// ```
/// use foxhare_sim::simulation::SimulationBuilder;
///
/// let series = SimulationBuilder::new()
///     .initial_rabbits(100)
///     .initial_foxes(10)
///     .duration(5)
///     .run()
///     .unwrap();
///
/// assert_eq!(series.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    params: ParameterSet,
    initial_rabbits: u64,
    initial_foxes: u64,
    duration: usize,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a builder with default parameters, empty populations and no
    /// duration.
    pub fn new() -> Self {
        Self {
            params: ParameterSet::default(),
            initial_rabbits: 0,
            initial_foxes: 0,
            duration: 0,
        }
    }

    /// Use the given rate coefficients.
    pub fn parameters(mut self, params: ParameterSet) -> Self {
        self.params = params;
        self
    }

    /// Set the rabbit population at time 0.
    pub fn initial_rabbits(mut self, rabbits: u64) -> Self {
        self.initial_rabbits = rabbits;
        self
    }

    /// Set the fox population at time 0.
    pub fn initial_foxes(mut self, foxes: u64) -> Self {
        self.initial_foxes = foxes;
        self
    }

    /// Set the number of time steps to simulate (required, must be > 0).
    pub fn duration(mut self, steps: usize) -> Self {
        self.duration = steps;
        self
    }

    /// Run the engine with the configured inputs.
    pub fn run(&self) -> Result<PopulationSeries, SimulationError> {
        simulate(
            &self.params,
            self.initial_rabbits,
            self.initial_foxes,
            self.duration,
        )
    }
}
