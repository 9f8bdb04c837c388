//! Loading mock bundles from a directory.

use crate::bundle::entry::MockEntry;
use crate::bundle::manifest::{parse_manifest, MANIFEST_FILE};
use crate::error::BundleError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ordered mock entries plus the directory their body files live in.
///
/// Entry order is match priority. A bundle is immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockBundle {
    entries: Vec<MockEntry>,
    base_path: PathBuf,
}

impl MockBundle {
    /// Create a bundle from already validated entries.
    pub fn new(entries: Vec<MockEntry>, base_path: impl Into<PathBuf>) -> Self {
        Self {
            entries,
            base_path: base_path.into(),
        }
    }

    /// Load `bundle.json` from `base_path`.
    ///
    /// Returns a fully validated bundle or an error; nothing is partially
    /// constructed.
    pub fn load(base_path: impl AsRef<Path>) -> Result<Self, BundleError> {
        let base_path = base_path.as_ref();
        if !base_path.is_dir() {
            return Err(BundleError::NotFound {
                path: base_path.to_path_buf(),
            });
        }

        let invalid = |source| BundleError::Invalid {
            path: base_path.to_path_buf(),
            source,
        };
        let absolute = fs::canonicalize(base_path).map_err(invalid)?;
        let content = fs::read_to_string(absolute.join(MANIFEST_FILE)).map_err(invalid)?;

        let entries =
            parse_manifest(&content).map_err(|source| BundleError::InvalidManifest {
                path: absolute.clone(),
                source,
            })?;

        debug!(path = %absolute.display(), entries = entries.len(), "Parsed mock bundle");
        Ok(Self::new(entries, absolute))
    }

    /// Entries in match priority order.
    pub fn entries(&self) -> &[MockEntry] {
        &self.entries
    }

    /// Absolute directory the bundle was loaded from.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
