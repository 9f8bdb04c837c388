//! Error types for bundle loading and request interception.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error domain reported with interception failures.
pub const ERROR_DOMAIN: &str = "mockingbird";

/// Errors raised while loading a mock bundle from disk.
///
/// A failed load never touches the active bundle, so callers may retry or
/// keep running with whatever was installed before.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Bundle path does not exist or is not a directory
    #[error("mock bundle not found: {}", path.display())]
    NotFound { path: PathBuf },
    /// `bundle.json` is malformed or one of its entries is invalid
    #[error("invalid bundle description file {}: {source}", path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },
    /// Any other failure while reading the bundle
    #[error("invalid mock bundle {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reason a manifest document was rejected.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest is not valid JSON
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// Top-level value is not an array
    #[error("top-level value must be an array of entries")]
    NotAnArray,
    /// Entry at `index` is missing a required field or has the wrong shape
    #[error("entry {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

/// Per-request failure delivered through the host failure callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterceptError {
    /// No entry matched and the interceptor does not handle all requests
    #[error("no mock response for {method} {url}")]
    NoMatch { method: String, url: String },
}

impl InterceptError {
    /// Numeric code within [`ERROR_DOMAIN`].
    pub fn code(&self) -> i32 {
        match self {
            InterceptError::NoMatch { .. } => 1000,
        }
    }

    pub fn domain(&self) -> &'static str {
        ERROR_DOMAIN
    }
}
