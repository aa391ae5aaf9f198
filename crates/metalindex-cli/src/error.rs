use metalindex_core::error::IndexError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("failed to read config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}
