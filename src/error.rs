//! Error types shared across the library

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or writing the persisted records.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no usable data directory could be determined")]
    NoDataDir,
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures of best-effort external capabilities (notify-send, tmux, stty).
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("failed to execute {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed: {stderr}")]
    Failed { command: String, stderr: String },

    #[error("{0} is not available")]
    Unavailable(String),
}
