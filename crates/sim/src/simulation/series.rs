//! Population time series.
//!
//! A `PopulationSeries` is the complete record of one simulation run: rabbit
//! and fox counts for every time step, starting with the initial state at
//! index 0. It is built once and never modified afterwards.

use crate::errors::SeriesError;
use serde::Serialize;

/// Rabbit and fox counts at every simulated time step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulationSeries {
    rabbits: Vec<u64>,
    foxes: Vec<u64>,
}

/// One row of a `PopulationSeries`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopulationSample {
    pub time: usize,
    pub rabbits: u64,
    pub foxes: u64,
}

impl PopulationSeries {
    /// Allocate a series holding only the initial state, with room for
    /// `duration` further steps.
    pub(crate) fn with_initial(rabbits: u64, foxes: u64, duration: usize) -> Self {
        let mut series = Self {
            rabbits: Vec::with_capacity(duration + 1),
            foxes: Vec::with_capacity(duration + 1),
        };
        series.push(rabbits, foxes);
        series
    }

    pub(crate) fn push(&mut self, rabbits: u64, foxes: u64) {
        self.rabbits.push(rabbits);
        self.foxes.push(foxes);
    }

    /// Build a series from two equal-length columns.
    pub fn from_columns(rabbits: Vec<u64>, foxes: Vec<u64>) -> Result<Self, SeriesError> {
        if rabbits.len() != foxes.len() {
            return Err(SeriesError::LengthMismatch {
                rabbits: rabbits.len(),
                foxes: foxes.len(),
            });
        }
        Ok(Self { rabbits, foxes })
    }

    /// Number of time steps recorded, including the initial state.
    pub fn len(&self) -> usize {
        self.rabbits.len()
    }

    /// Check if the series holds no time steps at all.
    pub fn is_empty(&self) -> bool {
        self.rabbits.is_empty()
    }

    /// Rabbit counts indexed by time step.
    pub fn rabbits(&self) -> &[u64] {
        &self.rabbits
    }

    /// Fox counts indexed by time step.
    pub fn foxes(&self) -> &[u64] {
        &self.foxes
    }

    /// Get the sample at a given time step.
    pub fn get(&self, time: usize) -> Option<PopulationSample> {
        Some(PopulationSample {
            time,
            rabbits: *self.rabbits.get(time)?,
            foxes: *self.foxes.get(time)?,
        })
    }

    /// The final recorded state.
    pub fn last(&self) -> Option<PopulationSample> {
        self.len().checked_sub(1).and_then(|t| self.get(t))
    }

    /// Iterate over every time step in order.
    pub fn iter(&self) -> impl Iterator<Item = PopulationSample> + '_ {
        self.rabbits
            .iter()
            .zip(&self.foxes)
            .enumerate()
            .map(|(time, (&rabbits, &foxes))| PopulationSample {
                time,
                rabbits,
                foxes,
            })
    }
}
