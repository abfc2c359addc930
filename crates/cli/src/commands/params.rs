use anyhow::Result;
use foxhare_sim::storage::ParameterStore;
use std::io::Write;

use crate::printing::{print_load_report, print_parameters};

/// Show the parameters that a run would use.
pub fn show_parameters<W: Write>(store: &ParameterStore, json: bool, out: &mut W) -> Result<()> {
    let loaded = store.load();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&loaded.params)?)?;
    } else {
        print_load_report(&loaded, out)?;
        print_parameters(&loaded.params, out)?;
    }
    Ok(())
}
