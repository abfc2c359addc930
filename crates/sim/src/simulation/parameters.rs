//! Simulation parameters.
//!
//! The five rate coefficients that drive the fox/rabbit recurrence, plus a
//! `Parameter` selector used to address them by position when listing,
//! editing or persisting.

use serde::{Deserialize, Serialize};

/// Rate coefficients governing the predator-prey recurrence.
///
/// No range is enforced: zero and negative rates are accepted and simply
/// produce flat or collapsing trajectories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Rabbit birth rate
    pub birth_rate: f64,
    /// Rabbit death rate (kept for display and persistence; the recurrence
    /// does not read it)
    pub death_rate: f64,
    /// Predation rate (fox eats rabbits)
    pub predation_rate: f64,
    /// Fox birth rate per rabbit eaten
    pub fox_birth_rate: f64,
    /// Fox natural death rate
    pub fox_death_rate: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            birth_rate: 0.1,
            death_rate: 0.05,
            predation_rate: 0.02,
            fox_birth_rate: 0.01,
            fox_death_rate: 0.1,
        }
    }
}

impl ParameterSet {
    /// Create a parameter set from the five coefficients in persisted order.
    pub fn new(
        birth_rate: f64,
        death_rate: f64,
        predation_rate: f64,
        fox_birth_rate: f64,
        fox_death_rate: f64,
    ) -> Self {
        Self {
            birth_rate,
            death_rate,
            predation_rate,
            fox_birth_rate,
            fox_death_rate,
        }
    }

    /// Read a single coefficient.
    pub fn get(&self, param: Parameter) -> f64 {
        match param {
            Parameter::BirthRate => self.birth_rate,
            Parameter::DeathRate => self.death_rate,
            Parameter::PredationRate => self.predation_rate,
            Parameter::FoxBirthRate => self.fox_birth_rate,
            Parameter::FoxDeathRate => self.fox_death_rate,
        }
    }

    /// Overwrite a single coefficient.
    pub fn set(&mut self, param: Parameter, value: f64) {
        let slot = match param {
            Parameter::BirthRate => &mut self.birth_rate,
            Parameter::DeathRate => &mut self.death_rate,
            Parameter::PredationRate => &mut self.predation_rate,
            Parameter::FoxBirthRate => &mut self.fox_birth_rate,
            Parameter::FoxDeathRate => &mut self.fox_death_rate,
        };
        *slot = value;
    }

    /// The coefficients in persisted order.
    pub fn values(&self) -> [f64; 5] {
        Parameter::ALL.map(|p| self.get(p))
    }

    /// Build from coefficients in persisted order.
    pub fn from_values(values: [f64; 5]) -> Self {
        let [birth, death, predation, fox_birth, fox_death] = values;
        Self::new(birth, death, predation, fox_birth, fox_death)
    }
}

/// Selector for one of the five coefficients of a `ParameterSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    BirthRate,
    DeathRate,
    PredationRate,
    FoxBirthRate,
    FoxDeathRate,
}

impl Parameter {
    /// All parameters in persisted (and menu) order.
    pub const ALL: [Parameter; 5] = [
        Parameter::BirthRate,
        Parameter::DeathRate,
        Parameter::PredationRate,
        Parameter::FoxBirthRate,
        Parameter::FoxDeathRate,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Parameter::BirthRate => "Rabbit Birth Rate",
            Parameter::DeathRate => "Rabbit Death Rate",
            Parameter::PredationRate => "Predation Rate (Fox eats Rabbits)",
            Parameter::FoxBirthRate => "Fox Birth Rate per Rabbit Eaten",
            Parameter::FoxDeathRate => "Fox Natural Death Rate",
        }
    }

    /// Short label used when prompting for a new value.
    pub fn prompt_label(self) -> &'static str {
        match self {
            Parameter::PredationRate => "Predation Rate",
            other => other.label(),
        }
    }

    /// 1-based position in the menu listing.
    pub fn menu_index(self) -> usize {
        match self {
            Parameter::BirthRate => 1,
            Parameter::DeathRate => 2,
            Parameter::PredationRate => 3,
            Parameter::FoxBirthRate => 4,
            Parameter::FoxDeathRate => 5,
        }
    }

    /// Look up a parameter by its 1-based menu position.
    pub fn from_menu_index(index: i64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.menu_index() as i64 == index)
    }
}
