pub mod bands;
pub mod batch;
pub mod calculate;
pub mod comprehensive;
pub mod standards;

use metalindex_core::error::IndexError;
use metalindex_core::model::IndexKind;

/// Resolve an index name given on the command line.
pub(crate) fn parse_index(name: &str) -> Result<IndexKind, IndexError> {
    IndexKind::from_str_loose(name).ok_or_else(|| IndexError::UnknownIndex(name.to_string()))
}
