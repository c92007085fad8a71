//! Retrieval of the raw CSV support report.
//!
//! A report is read either over HTTP or from a local file. Every render pass
//! loads the report again; nothing is cached between calls.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while retrieving a report
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Fetching '{url}' failed with HTTP status {status}")]
    RemoteFetch { url: String, status: u16 },

    #[error("Request to '{url}' failed: {message}")]
    Transport { url: String, message: String },

    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },
}

/// Where a support report comes from.
///
/// JSON format uses a "type" field with lowercase variant names, matching the
/// `sources` table of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Source {
    /// Remote CSV fetched with a blocking GET
    Url { url: String },
    /// CSV file on the local filesystem
    File { path: PathBuf },
}

impl Source {
    pub fn url(url: impl Into<String>) -> Self {
        Source::Url { url: url.into() }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Source::File { path: path.into() }
    }

    /// Load the raw report bytes.
    ///
    /// `timeout` only applies to URL sources; `None` keeps the transport default.
    pub fn load(&self, timeout: Option<Duration>) -> Result<Vec<u8>, FetchError> {
        match self {
            Source::Url { url } => fetch(url, timeout),
            Source::File { path } => {
                debug!(path = %path.display(), "reading support report from file");
                fs::read(path).map_err(|e| FetchError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
            }
        }
    }
}

/// Perform a blocking GET and return the response body.
///
/// Any non-success status aborts with [`FetchError::RemoteFetch`]. There is no retry.
pub fn fetch(url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, FetchError> {
    let transport = |e: reqwest::Error| FetchError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    };

    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(transport)?;

    let started = Instant::now();
    let resp = client.get(url).send().map_err(transport)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::RemoteFetch {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = resp.bytes().map_err(transport)?;
    info!(
        url,
        bytes = body.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "fetched support report"
    );
    Ok(body.to_vec())
}
