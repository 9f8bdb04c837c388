//! Settings selecting the active bundle and interception policy.

pub mod error;
pub mod parser;
pub mod settings;

pub use error::ConfigError;
pub use parser::SettingsFormat;
pub use settings::{Settings, ENV_BUNDLE, ENV_HANDLE_ALL};
