//! Interceptor settings from a file or the environment.

use crate::config::error::ConfigError;
use crate::config::parser::SettingsFormat;
use crate::mocks::MockState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming the bundle directory.
pub const ENV_BUNDLE: &str = "MOCKINGBIRD_BUNDLE";
/// Environment variable enabling `handle_all_requests`.
pub const ENV_HANDLE_ALL: &str = "MOCKINGBIRD_HANDLE_ALL";

/// Which bundle to activate and whether unmatched requests are claimed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Bundle directory; relative paths in a settings file resolve against the file's directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<PathBuf>,
    /// Answer unmatched requests with a diagnostic `501`
    pub handle_all_requests: bool,
}

impl Settings {
    /// Load settings from a YAML, JSON or JSONC file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = SettingsFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnknownFileType(path.to_path_buf()))?;
        let content = fs::read_to_string(path)?;
        let mut settings: Self = format.parse(&content)?;

        if let (Some(bundle), Some(dir)) = (&settings.bundle, path.parent()) {
            if bundle.is_relative() {
                settings.bundle = Some(dir.join(bundle));
            }
        }
        Ok(settings)
    }

    /// Read `MOCKINGBIRD_BUNDLE` and `MOCKINGBIRD_HANDLE_ALL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bundle: lookup(ENV_BUNDLE)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            handle_all_requests: lookup(ENV_HANDLE_ALL)
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
        }
    }

    /// Install the configured bundle (or clear it) and set the flag.
    ///
    /// When the bundle fails to load nothing in `state` changes.
    pub fn apply(&self, state: &MockState) -> Result<(), ConfigError> {
        state.set_mock_bundle(self.bundle.as_deref())?;
        state.set_handle_all_requests(self.handle_all_requests);
        info!(
            bundle = ?self.bundle,
            handle_all_requests = self.handle_all_requests,
            "Applied mock settings"
        );
        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
