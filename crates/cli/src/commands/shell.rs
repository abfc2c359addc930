use anyhow::Result;
use foxhare_sim::simulation::{simulate, Parameter, ParameterSet, PopulationSeries};
use foxhare_sim::storage::ParameterStore;
use foxhare_sim::visualization::{self, ChartKind};
use std::io::{BufRead, Write};

use crate::defaults::EDITOR_EXIT_CHOICE;
use crate::printing::{duration_message, print_load_report, print_menu, print_parameters};
use crate::prompt::Prompter;

/// Everything the menu shares between choices.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub params: ParameterSet,
    /// Result of the latest successful run, replaced wholesale by the next
    pub series: Option<PopulationSeries>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ShowParameters,
    EditParameters,
    RunSimulation,
    ShowTable,
    ShowDualChart,
    ShowFoxVsRabbit,
    Exit,
}

impl MenuChoice {
    fn from_number(n: i64) -> Option<Self> {
        Some(match n {
            1 => Self::ShowParameters,
            2 => Self::EditParameters,
            3 => Self::RunSimulation,
            4 => Self::ShowTable,
            5 => Self::ShowDualChart,
            6 => Self::ShowFoxVsRabbit,
            7 => Self::Exit,
            _ => return None,
        })
    }
}

/// Whether the menu loop keeps going after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive menu.
pub struct Shell<R, W> {
    state: AppState,
    store: ParameterStore,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Load parameters from `store` and report how they were obtained.
    pub fn start(store: ParameterStore, input: R, output: W) -> Result<Self> {
        let mut prompt = Prompter::new(input, output);
        let loaded = store.load();
        print_load_report(&loaded, prompt.output())?;

        Ok(Self {
            state: AppState {
                params: loaded.params,
                series: None,
            },
            store,
            prompt,
        })
    }

    /// Run the menu until the user exits or input ends. Returns the final
    /// state.
    pub fn run(mut self) -> Result<AppState> {
        loop {
            print_menu(self.prompt.output())?;
            let Some(choice) = self.prompt.integer("Enter your choice: ")? else {
                break;
            };

            let flow = match MenuChoice::from_number(choice) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(
                        self.prompt.output(),
                        "Invalid choice. Please select a valid option."
                    )?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.prompt.output(), "Exiting program.")?;
        self.prompt.output().flush()?;
        Ok(self.state)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        log::debug!("menu choice {choice:?}");
        match choice {
            MenuChoice::ShowParameters => {
                print_parameters(&self.state.params, self.prompt.output())?;
                Ok(Flow::Continue)
            }
            MenuChoice::EditParameters => self.edit_parameters(),
            MenuChoice::RunSimulation => self.run_simulation(),
            MenuChoice::ShowTable => self.show(ChartKind::Table),
            MenuChoice::ShowDualChart => self.show(ChartKind::Dual),
            MenuChoice::ShowFoxVsRabbit => self.show(ChartKind::FoxVsRabbit),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn show(&mut self, kind: ChartKind) -> Result<Flow> {
        visualization::render(kind, self.state.series.as_ref(), self.prompt.output())?;
        Ok(Flow::Continue)
    }

    fn edit_parameters(&mut self) -> Result<Flow> {
        loop {
            print_parameters(&self.state.params, self.prompt.output())?;
            write!(
                self.prompt.output(),
                "Select the constant to modify (1-5) or {EDITOR_EXIT_CHOICE} to exit: "
            )?;
            let Some(choice) = self.prompt.integer("")? else {
                return Ok(Flow::Exit);
            };
            if choice == EDITOR_EXIT_CHOICE {
                return Ok(Flow::Continue);
            }

            let Some(param) = Parameter::from_menu_index(choice) else {
                writeln!(
                    self.prompt.output(),
                    "Invalid choice. Please select a valid option."
                )?;
                continue;
            };

            let label = format!("Enter new {}: ", param.prompt_label());
            let Some(value) = self.prompt.number(&label)? else {
                return Ok(Flow::Exit);
            };
            self.state.params.set(param, value);
            log::info!("{} set to {value}", param.label());
            self.persist()?;
        }
    }

    /// Save the current parameters. A failed save is reported and the
    /// in-memory values are kept.
    fn persist(&mut self) -> Result<()> {
        match self.store.save(&self.state.params) {
            Ok(()) => writeln!(self.prompt.output(), "Constants saved successfully.")?,
            Err(e) => {
                log::warn!("{e}");
                writeln!(
                    self.prompt.output(),
                    "Error opening constants file for writing. ({})",
                    self.store.path().display()
                )?;
            }
        }
        Ok(())
    }

    fn run_simulation(&mut self) -> Result<Flow> {
        writeln!(self.prompt.output(), "\n--- Run Simulation ---")?;

        let Some(rabbits) = self.population("Enter initial number of rabbits: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(foxes) = self.population("Enter initial number of foxes: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(duration) = self
            .prompt
            .integer("Enter simulation duration (time steps): ")?
        else {
            return Ok(Flow::Exit);
        };

        let steps = if duration <= 0 {
            0
        } else {
            usize::try_from(duration).unwrap_or(usize::MAX)
        };

        match simulate(&self.state.params, rabbits, foxes, steps) {
            Ok(series) => {
                if let Some(end) = series.last() {
                    log::info!(
                        "run ended at t={} with rabbits={}, foxes={}",
                        end.time,
                        end.rabbits,
                        end.foxes
                    );
                }
                self.state.series = Some(series);
                writeln!(self.prompt.output(), "Simulation completed successfully.\n")?;
            }
            Err(e) => writeln!(self.prompt.output(), "{}", duration_message(&e))?,
        }
        Ok(Flow::Continue)
    }

    /// Prompt until a non-negative population is entered.
    fn population(&mut self, label: &str) -> Result<Option<u64>> {
        loop {
            let Some(value) = self.prompt.integer(label)? else {
                return Ok(None);
            };
            match u64::try_from(value) {
                Ok(count) => return Ok(Some(count)),
                Err(_) => writeln!(
                    self.prompt.output(),
                    "Population must be a non-negative integer."
                )?,
            }
        }
    }
}
