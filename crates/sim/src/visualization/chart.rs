//! Table and bar chart renderers.

use super::{compute_scale, require_data, MARK};
use crate::simulation::PopulationSeries;
use std::io::{self, Write};

const TABLE_RULE_WIDTH: usize = 28;
const CHART_RULE_WIDTH: usize = 39;

/// List time, rabbits and foxes for every step.
pub fn render_table<W: Write>(series: Option<&PopulationSeries>, out: &mut W) -> io::Result<()> {
    let Some(series) = require_data(series, out)? else {
        return Ok(());
    };

    writeln!(out)?;
    writeln!(out, "Time\tRabbits\tFoxes")?;
    writeln!(out, "{}", "-".repeat(TABLE_RULE_WIDTH))?;
    for sample in series.iter() {
        writeln!(out, "{}\t{}\t{}", sample.time, sample.rabbits, sample.foxes)?;
    }
    writeln!(out)
}

/// Draw rabbit and fox bars per time step, both on one scale derived from
/// the largest count of either species.
pub fn render_dual_time_chart<W: Write>(
    series: Option<&PopulationSeries>,
    out: &mut W,
) -> io::Result<()> {
    let Some(series) = require_data(series, out)? else {
        return Ok(());
    };

    let scale = compute_scale(series.rabbits().iter().chain(series.foxes()));

    writeln!(out)?;
    writeln!(out, "Population vs. Time Diagram (Text-Based)")?;
    writeln!(out, "Each '{MARK}' represents approximately {scale} individuals.")?;
    writeln!(out, "Time\tRabbits\tFoxes")?;
    writeln!(out, "{}", "-".repeat(CHART_RULE_WIDTH))?;
    for sample in series.iter() {
        writeln!(
            out,
            "{}\t{}\t{}",
            sample.time,
            bar(sample.rabbits, scale),
            bar(sample.foxes, scale)
        )?;
    }
    writeln!(out)
}

/// Print each rabbit count next to a fox bar.
///
/// Rabbit and fox scales are derived independently. Only the fox scale sets
/// bar lengths; the rabbit scale is reported in the legend but rabbits are
/// printed as raw numbers.
pub fn render_fox_vs_rabbit_chart<W: Write>(
    series: Option<&PopulationSeries>,
    out: &mut W,
) -> io::Result<()> {
    let Some(series) = require_data(series, out)? else {
        return Ok(());
    };

    let scale_rabbits = compute_scale(series.rabbits());
    let scale_foxes = compute_scale(series.foxes());

    writeln!(out)?;
    writeln!(out, "Fox Population vs. Rabbit Population Diagram (Text-Based)")?;
    writeln!(
        out,
        "Each '{MARK}' represents approximately {scale_rabbits} Rabbits and {scale_foxes} Foxes."
    )?;
    writeln!(out, "Rabbits\tFoxes\t")?;
    writeln!(out, "{}", "-".repeat(CHART_RULE_WIDTH))?;
    for sample in series.iter() {
        writeln!(out, "{}\t{}", sample.rabbits, bar(sample.foxes, scale_foxes))?;
    }
    writeln!(out)
}

fn bar(count: u64, scale: u64) -> String {
    let width = usize::try_from(count / scale).unwrap_or(usize::MAX);
    std::iter::repeat(MARK).take(width).collect()
}
