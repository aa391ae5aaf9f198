use crate::error::IndexError;
use crate::model::Sample;
use serde::Deserialize;
use std::path::Path;

/// A sample file holds either one sample object or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum SampleFile {
    Many(Vec<Sample>),
    One(Box<Sample>),
}

/// Load one or more samples from a JSON file.
pub fn load_samples(path: &Path) -> Result<Vec<Sample>, IndexError> {
    let content = std::fs::read_to_string(path).map_err(|e| IndexError::SampleLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let file: SampleFile =
        serde_json::from_str(&content).map_err(|e| IndexError::SampleLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(match file {
        SampleFile::Many(samples) => samples,
        SampleFile::One(sample) => vec![*sample],
    })
}

/// Load exactly one sample from a JSON file.
pub fn load_sample(path: &Path) -> Result<Sample, IndexError> {
    let mut samples = load_samples(path)?;
    if samples.len() != 1 {
        return Err(IndexError::SampleLoad {
            path: path.to_path_buf(),
            reason: format!("expected a single sample, found {}", samples.len()),
        });
    }
    Ok(samples.remove(0))
}

/// Parse a single sample from a JSON string.
pub fn parse_sample_str(json: &str) -> Result<Sample, IndexError> {
    Ok(serde_json::from_str(json)?)
}
