use metalindex_core::input::load_sample;
use std::path::Path;

use crate::error::CliError;
use crate::output;

pub fn run(sample_file: &Path, output_format: &str, verbose: bool) -> Result<(), CliError> {
    let sample = load_sample(sample_file)?;
    let report = metalindex_core::assess_sample(&sample)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_report(&sample, &report, verbose),
    }

    Ok(())
}
