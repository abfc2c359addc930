use clap::{Args, ValueEnum};
use foxhare_sim::visualization::ChartKind;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Initial number of rabbits
    #[arg(short, long)]
    pub rabbits: u64,

    /// Initial number of foxes
    #[arg(short, long)]
    pub foxes: u64,

    /// Simulation duration (time steps)
    #[arg(short, long)]
    pub steps: usize,

    /// How to display the result
    #[arg(long, value_enum, default_value_t = View::Table)]
    pub view: View,

    /// Print the parameters and series as JSON instead of a chart
    #[arg(long, conflicts_with = "view")]
    pub json: bool,
}

/// Chart selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Time, rabbits and foxes as columns
    Table,
    /// Population vs. time bar chart
    Dual,
    /// Fox population vs. rabbit population chart
    FoxVsRabbit,
}

impl From<View> for ChartKind {
    fn from(view: View) -> Self {
        match view {
            View::Table => ChartKind::Table,
            View::Dual => ChartKind::Dual,
            View::FoxVsRabbit => ChartKind::FoxVsRabbit,
        }
    }
}
