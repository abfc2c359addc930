//! Simulation engine for the fox/rabbit recurrence.
//!
//! Each time step reads only the previous step's populations:
//!
//! ```text
//! rabbits' = r + birth_rate * r - predation_rate * r * f
//! foxes'   = f + fox_birth_rate * r * f - fox_death_rate * f
//! ```
//!
//! and truncates the result toward zero, clamping negatives to 0.

use crate::errors::SimulationError;
use crate::simulation::{ParameterSet, PopulationSeries};

/// Largest number of time steps a single run may request.
pub const MAX_DURATION: usize = 1_000_000;

/// Run the recurrence for `duration` steps starting from the given
/// populations.
///
/// The returned series has `duration + 1` entries; index 0 is the initial
/// state.
///
/// # Errors
///
/// Returns `SimulationError::InvalidDuration` when `duration` is zero and
/// `SimulationError::DurationTooLarge` when it exceeds [`MAX_DURATION`].
///
/// # Examples
///
/// ```
/// use foxhare_sim::simulation::{simulate, ParameterSet};
///
/// let series = simulate(&ParameterSet::default(), 100, 10, 1).unwrap();
/// assert_eq!(series.rabbits(), &[100, 90]);
/// assert_eq!(series.foxes(), &[10, 19]);
/// ```
pub fn simulate(
    params: &ParameterSet,
    initial_rabbits: u64,
    initial_foxes: u64,
    duration: usize,
) -> Result<PopulationSeries, SimulationError> {
    if duration == 0 {
        return Err(SimulationError::InvalidDuration);
    }
    if duration > MAX_DURATION {
        return Err(SimulationError::DurationTooLarge {
            requested: duration,
            max: MAX_DURATION,
        });
    }

    log::debug!(
        "simulating {duration} steps from rabbits={initial_rabbits}, foxes={initial_foxes}"
    );

    let mut series = PopulationSeries::with_initial(initial_rabbits, initial_foxes, duration);
    let (mut rabbits, mut foxes) = (initial_rabbits, initial_foxes);
    for _ in 0..duration {
        (rabbits, foxes) = step(params, rabbits, foxes);
        series.push(rabbits, foxes);
    }

    log::debug!("simulation finished at rabbits={rabbits}, foxes={foxes}");
    Ok(series)
}

/// Advance both populations by a single time step.
pub fn step(params: &ParameterSet, rabbits: u64, foxes: u64) -> (u64, u64) {
    let r = rabbits as f64;
    let f = foxes as f64;

    let new_rabbits = r + params.birth_rate * r - params.predation_rate * r * f;
    let new_foxes = f + params.fox_birth_rate * r * f - params.fox_death_rate * f;

    (
        floor_to_nonnegative(new_rabbits),
        floor_to_nonnegative(new_foxes),
    )
}

/// Truncate toward zero, mapping negatives and NaN to 0.
///
/// `as` saturates at `u64::MAX` for values beyond the integer range.
fn floor_to_nonnegative(value: f64) -> u64 {
    if value > 0.0 {
        value as u64
    } else {
        0
    }
}
