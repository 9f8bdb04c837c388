//! Error types for settings parsing.

use crate::error::BundleError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Settings loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("failed to read settings file: {0}")]
    Io(#[from] io::Error),
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Unknown file type
    #[error("Unknown file type: {}", .0.display())]
    UnknownFileType(PathBuf),
    /// Configured bundle could not be installed
    #[error(transparent)]
    Bundle(#[from] BundleError),
}
