use metalindex_core::input::load_samples;
use std::path::Path;
use tracing::info;

use crate::error::CliError;
use crate::output;

pub fn run(samples_file: &Path, output_format: &str) -> Result<(), CliError> {
    let samples = load_samples(samples_file)?;
    info!(samples = samples.len(), file = %samples_file.display(), "running batch");
    let batch = metalindex_core::assess_batch(&samples)?;

    match output_format {
        "json" => output::json::print(&batch)?,
        _ => output::table::print_batch(&batch),
    }

    Ok(())
}
