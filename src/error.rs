//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or checking configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no submission endpoint configured; set NHS_SUBMIT_URL or `submit_url` in {path}")]
    MissingSubmitUrl { path: String },

    #[error("submission endpoint `{0}` is not an http(s) URL")]
    InvalidSubmitUrl(String),

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures while dispatching a record to the sink.
///
/// All variants surface to the user as the same generic message.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("dispatch task failed: {0}")]
    Task(String),
}
