use anyhow::Result;
use foxhare_sim::simulation::simulate;
use foxhare_sim::storage::ParameterStore;
use foxhare_sim::visualization;
use serde_json::json;
use std::io::Write;

use crate::args::RunArgs;
use crate::printing::duration_message;

/// Run one simulation with the stored parameters and print the result.
pub fn run_simulation<W: Write>(store: &ParameterStore, args: &RunArgs, out: &mut W) -> Result<()> {
    let params = store.load().params;
    let series = simulate(&params, args.rabbits, args.foxes, args.steps).map_err(|e| {
        let message = duration_message(&e);
        anyhow::Error::new(e).context(message)
    })?;

    if args.json {
        let report = json!({
            "parameters": params,
            "series": series,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        visualization::render(args.view.into(), Some(&series), out)?;
    }
    Ok(())
}
