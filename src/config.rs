//! Configuration file handling for report sources.
//!
//! This module provides loading and parsing of `.compat_matrix.json`
//! configuration files. Every field is optional; built-in defaults point at
//! the published compatibility reports.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::fetch::Source;
use crate::pipeline::Pipeline;

/// Configuration file looked up in the current directory
pub const DEFAULT_CONFIG_FILE: &str = ".compat_matrix.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid JSON in {path}: {message}")]
    Parse { path: String, message: String },
}

/// Per-pipeline report sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub producer: Option<Source>,
    pub producer_consumer: Option<Source>,
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sources: SourcesConfig,
    /// Request timeout in seconds; absent keeps the HTTP client default
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `.compat_matrix.json` in the
    /// current directory is used when present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    debug!("no configuration file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Report source for `pipeline`, falling back to its published URL
    pub fn source_for(&self, pipeline: Pipeline) -> Source {
        let configured = match pipeline {
            Pipeline::Producer => &self.sources.producer,
            Pipeline::ProducerConsumer => &self.sources.producer_consumer,
        };
        configured
            .clone()
            .unwrap_or_else(|| pipeline.default_source())
    }

    /// Resolve the source for a command, preferring an explicit `--input` file
    pub fn resolve_source(&self, pipeline: Pipeline, input: Option<&Path>) -> Source {
        match input {
            Some(path) => Source::file(path),
            None => self.source_for(pipeline),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
