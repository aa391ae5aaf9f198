//! User-level configuration for the metalindex CLI
//!
//! Sources, lowest priority first:
//! - `<config dir>/metalindex/config.toml`, or the file given with `--config`
//! - `METALINDEX_LOG` environment variable
//! - command-line flags

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::CliError;

const LOG_ENV: &str = "METALINDEX_LOG";

#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    /// Default output format: "table" or "json"
    pub output: Option<String>,

    /// Default tracing filter
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Load the config file and apply environment overrides.
    ///
    /// A missing default file is not an error; an explicit `--config` that
    /// cannot be read or parsed is.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        let mut config = CliConfig::default();

        match explicit {
            Some(path) => config.merge(Self::read(path)?),
            None => {
                if let Some(path) = Self::user_config_path().filter(|p| p.exists()) {
                    config.merge(Self::read(&path)?);
                }
            }
        }

        if let Ok(level) = std::env::var(LOG_ENV) {
            if !level.trim().is_empty() {
                config.log_level = Some(level);
            }
        }

        Ok(config)
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("metalindex").join("config.toml"))
    }

    fn read(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: CliConfig) {
        if other.output.is_some() {
            self.output = other.output;
        }
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
    }

    /// The flag if given, else the configured format, else "table".
    pub fn output_format(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.output.clone())
            .unwrap_or_else(|| "table".to_string())
    }
}
