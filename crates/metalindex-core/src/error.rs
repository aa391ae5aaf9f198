use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to load samples from {path}: {reason}")]
    SampleLoad { path: PathBuf, reason: String },

    #[error("unknown index '{0}'")]
    UnknownIndex(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IndexError {
    /// A metal whose arithmetic leaves the representable decimal range.
    pub(crate) fn out_of_range(metal: &str) -> Self {
        IndexError::InvalidInput(format!("value out of range for metal '{metal}'"))
    }
}
