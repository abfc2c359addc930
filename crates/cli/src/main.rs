mod args;
mod commands;
pub mod defaults;
mod printing;
mod prompt;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use foxhare_sim::storage::ParameterStore;
use log::LevelFilter;
use std::io;
use std::path::PathBuf;

use args::RunArgs;
use commands::{params, run, shell::Shell};

/// Fox-Hare: a predator-prey population simulator
///
/// Advances rabbit and fox populations with a discrete Lotka-Volterra
/// recurrence and draws the result as text charts. Rate parameters are kept
/// in a small constants file between sessions.
#[derive(Parser, Debug)]
#[command(name = "foxhare")]
#[command(author, version, about = "Simulates fox and rabbit populations over time", long_about = None)]
struct Cli {
    /// Constants file holding the five rate parameters
    #[arg(short, long, global = true, default_value = defaults::CONSTANTS_FILE)]
    constants: PathBuf,

    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive menu (the default when no command is given).
    Interactive,

    /// Run one simulation with the stored parameters and print it.
    Run(RunArgs),

    /// Show the stored simulation parameters.
    Params {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let store = ParameterStore::new(&cli.constants);
    let stdout = io::stdout();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            Shell::start(store, io::stdin().lock(), stdout.lock())?.run()?;
        }
        Commands::Run(args) => {
            run::run_simulation(&store, &args, &mut stdout.lock())?;
        }
        Commands::Params { json } => {
            params::show_parameters(&store, json, &mut stdout.lock())?;
        }
    }

    Ok(())
}
