use metalindex_core::index;
use metalindex_core::input::load_sample;
use std::path::Path;

use crate::error::CliError;
use crate::output;

pub fn run(index_name: &str, sample_file: &Path, output_format: &str) -> Result<(), CliError> {
    let kind = super::parse_index(index_name)?;
    let sample = load_sample(sample_file)?;
    let outcome = index::calculate(kind, &sample.metals)?;

    match output_format {
        "json" => output::json::print(&outcome)?,
        _ => output::table::print_outcome(&outcome),
    }

    Ok(())
}
