use foxhare_sim::errors::SimulationError;
use foxhare_sim::simulation::{Parameter, ParameterSet};
use foxhare_sim::storage::{LoadedParameters, ParameterOrigin};
use std::io::{self, Write};

pub const MENU_TITLE: &str = "===== Fox-Hare Population Simulation =====";

const MENU_OPTIONS: [&str; 7] = [
    "Display Simulation Constants",
    "Modify Simulation Constants",
    "Run Simulation",
    "Display Population Over Time",
    "Display Population vs. Time Diagram",
    "Display Fox Population vs. Rabbit Population Diagram",
    "Exit",
];

pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{MENU_TITLE}")?;
    for (i, option) in MENU_OPTIONS.iter().enumerate() {
        writeln!(out, "{}. {option}", i + 1)?;
    }
    writeln!(out, "{}", "=".repeat(MENU_TITLE.len() + 1))
}

pub fn print_parameters<W: Write>(params: &ParameterSet, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Current Simulation Constants:")?;
    for param in Parameter::ALL {
        writeln!(
            out,
            "{}. {}: {:.4}",
            param.menu_index(),
            param.label(),
            params.get(param)
        )?;
    }
    writeln!(out)
}

/// Tell the user how the startup parameters were obtained. Nothing is
/// printed when they were read from the file as expected.
pub fn print_load_report<W: Write>(loaded: &LoadedParameters, out: &mut W) -> io::Result<()> {
    match loaded.origin {
        ParameterOrigin::Stored => Ok(()),
        ParameterOrigin::CreatedDefaults { written: true } => {
            writeln!(out, "Constants file created with default values.")
        }
        ParameterOrigin::CreatedDefaults { written: false } => {
            writeln!(out, "Error creating constants file. Using default values.")
        }
        ParameterOrigin::MalformedDefaults => {
            writeln!(out, "Error reading constants file. Using default values.")
        }
    }
}

/// User-facing wording for a rejected run.
pub fn duration_message(err: &SimulationError) -> String {
    match err {
        SimulationError::InvalidDuration => "Duration must be a positive integer.".to_string(),
        SimulationError::DurationTooLarge { max, .. } => {
            format!("Duration must be at most {max} time steps.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_menu_lists_seven_options() {
        let text = capture(|out| print_menu(out));
        assert!(text.starts_with(MENU_TITLE));
        assert!(text.contains("1. Display Simulation Constants\n"));
        assert!(text.contains("7. Exit\n"));
        assert!(text.ends_with(&format!("{}\n", "=".repeat(43))));
    }

    #[test]
    fn test_parameters_listing() {
        let text = capture(|out| print_parameters(&ParameterSet::default(), out));
        assert_eq!(
            text,
            "\nCurrent Simulation Constants:\n\
             1. Rabbit Birth Rate: 0.1000\n\
             2. Rabbit Death Rate: 0.0500\n\
             3. Predation Rate (Fox eats Rabbits): 0.0200\n\
             4. Fox Birth Rate per Rabbit Eaten: 0.0100\n\
             5. Fox Natural Death Rate: 0.1000\n\n"
        );
    }

    #[test]
    fn test_load_report() {
        let report = |origin| {
            capture(|out| {
                print_load_report(
                    &LoadedParameters {
                        params: ParameterSet::default(),
                        origin,
                    },
                    out,
                )
            })
        };
        assert_eq!(report(ParameterOrigin::Stored), "");
        assert!(report(ParameterOrigin::CreatedDefaults { written: true }).contains("created"));
        assert!(report(ParameterOrigin::MalformedDefaults).contains("Error reading"));
    }

    #[test]
    fn test_duration_message() {
        assert_eq!(
            duration_message(&SimulationError::InvalidDuration),
            "Duration must be a positive integer."
        );
        assert_eq!(
            duration_message(&SimulationError::DurationTooLarge {
                requested: 7,
                max: 5
            }),
            "Duration must be at most 5 time steps."
        );
    }
}
