use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for ikigai
#[derive(Debug, Error)]
pub enum IkigaiError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid URL in config ({field}): {message}")]
    InvalidConfigUrl { field: &'static str, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
