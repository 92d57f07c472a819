//! Domain error types for cascader
//!
//! Provides structured error types for different domains:
//! - `CascadeError` for dropdown state changes
//! - `DatasetError` for loading option data
//! - `CascaderError` for the binary: arguments, loading, writing output

use std::path::PathBuf;
use thiserror::Error;

/// Errors of the binary's startup and output paths
#[derive(Debug, Error)]
pub enum CascaderError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised by the dropdown state holder
#[derive(Debug, Error)]
pub enum CascadeError {
    #[error("Level '{0}' is not part of the hierarchy")]
    UnknownLevel(String),
}

/// Errors related to reading option data
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {0}: {1}")]
    Toml(PathBuf, toml::de::Error),

    #[error("Invalid JSON in {0}: {1}")]
    Json(PathBuf, serde_json::Error),

    #[error("Unsupported data file extension: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
}

/// Result type alias for CascaderError
pub type Result<T> = std::result::Result<T, CascaderError>;

/// Result type alias for CascadeError
pub type CascadeResult<T> = std::result::Result<T, CascadeError>;

/// Result type alias for DatasetError
pub type DatasetResult<T> = std::result::Result<T, DatasetError>;

impl From<String> for CascaderError {
    fn from(msg: String) -> Self {
        CascaderError::InvalidArgument(msg)
    }
}

impl From<&str> for CascaderError {
    fn from(msg: &str) -> Self {
        CascaderError::InvalidArgument(msg.to_string())
    }
}
