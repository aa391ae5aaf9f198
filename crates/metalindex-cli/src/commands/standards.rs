use metalindex_core::reference::standards;

use crate::error::CliError;
use crate::output;

pub fn run(output_format: &str) -> Result<(), CliError> {
    let table = standards();

    match output_format {
        "json" => output::json::print(table)?,
        _ => output::table::print_standards(table),
    }

    Ok(())
}
