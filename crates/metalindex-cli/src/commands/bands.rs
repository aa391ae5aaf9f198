use metalindex_core::index::describe_bands;

use crate::error::CliError;

pub fn run(index_name: &str) -> Result<(), CliError> {
    let kind = super::parse_index(index_name)?;
    let bands = describe_bands(kind);

    println!("{} ({})\n", kind, kind.key());
    println!("Bands, cleanest first:\n");

    let width = bands.iter().map(|b| b.range.len()).max().unwrap_or(10);
    for band in &bands {
        println!("  {:<width$}  {}", band.range, band.label, width = width);
    }
    println!();
    println!("A value exactly on a boundary falls into the band whose range includes it.");

    Ok(())
}
