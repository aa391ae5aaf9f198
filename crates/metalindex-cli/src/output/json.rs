use metalindex_core::error::IndexError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), IndexError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
