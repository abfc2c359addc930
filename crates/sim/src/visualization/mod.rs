//! Text rendering of population series.
//!
//! Three views are available: a plain table, a dual population-vs-time bar
//! chart sharing one scale, and a fox-vs-rabbit chart that prints rabbit
//! counts as numbers and draws foxes as bars. Every renderer accepts an
//! optional series and prints a notice instead when there is nothing to show.

pub mod chart;
pub mod scale;

pub use chart::{render_dual_time_chart, render_fox_vs_rabbit_chart, render_table};
pub use scale::{compute_scale, MAX_BAR_WIDTH};

use crate::simulation::PopulationSeries;
use std::io::{self, Write};

/// Printed in place of any view when no simulation has been run yet.
pub const NO_DATA_NOTICE: &str = "No simulation data available. Please run a simulation first.";

/// Character used to draw one bar segment.
pub const MARK: char = '*';

/// The available views of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Time, rabbits and foxes as columns
    Table,
    /// Rabbit and fox bars per time step on a shared scale
    Dual,
    /// Raw rabbit count next to a scaled fox bar
    FoxVsRabbit,
}

/// Render `series` in the requested view.
pub fn render<W: Write>(
    kind: ChartKind,
    series: Option<&PopulationSeries>,
    out: &mut W,
) -> io::Result<()> {
    match kind {
        ChartKind::Table => render_table(series, out),
        ChartKind::Dual => render_dual_time_chart(series, out),
        ChartKind::FoxVsRabbit => render_fox_vs_rabbit_chart(series, out),
    }
}

/// Returns the series if it holds at least one step, otherwise writes the
/// no-data notice.
pub(crate) fn require_data<'a, W: Write>(
    series: Option<&'a PopulationSeries>,
    out: &mut W,
) -> io::Result<Option<&'a PopulationSeries>> {
    match series {
        Some(s) if !s.is_empty() => Ok(Some(s)),
        _ => {
            writeln!(out, "{NO_DATA_NOTICE}")?;
            writeln!(out)?;
            Ok(None)
        }
    }
}
