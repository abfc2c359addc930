use std::error;
use std::fmt;

/// Errors that can occur when running the simulation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    /// The requested number of time steps was not positive.
    InvalidDuration,
    /// The requested number of time steps exceeds `MAX_DURATION`.
    DurationTooLarge { requested: usize, max: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDuration => write!(f, "Invalid duration: must be a positive integer"),
            Self::DurationTooLarge { requested, max } => {
                write!(f, "Invalid duration: {requested} exceeds the limit of {max} steps")
            }
        }
    }
}

impl error::Error for SimulationError {}

/// Error returned when a `PopulationSeries` is assembled from columns that
/// do not line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    /// Rabbit and fox columns have different lengths
    LengthMismatch { rabbits: usize, foxes: usize },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { rabbits, foxes } => {
                write!(f, "Series length mismatch: {rabbits} rabbits vs {foxes} foxes")
            }
        }
    }
}

impl error::Error for SeriesError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_duration_display() {
        let err = SimulationError::InvalidDuration;
        assert_eq!(
            err.to_string(),
            "Invalid duration: must be a positive integer"
        );
    }

    #[test]
    fn test_duration_too_large_display() {
        let err = SimulationError::DurationTooLarge {
            requested: 1_000_001,
            max: 1_000_000,
        };
        assert!(err.to_string().contains("1000001 exceeds the limit of 1000000"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = SeriesError::LengthMismatch {
            rabbits: 3,
            foxes: 2,
        };
        assert!(err.to_string().contains("3 rabbits vs 2 foxes"));
    }
}
