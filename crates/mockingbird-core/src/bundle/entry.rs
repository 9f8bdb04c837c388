//! Mock entry types.

use std::collections::HashMap;

/// Default request method when the manifest does not declare one.
pub const DEFAULT_METHOD: &str = "GET";

/// Declared query parameters of an entry.
///
/// `Some(value)` requires the incoming parameter to equal `value`,
/// `None` accepts any value as long as the parameter is present.
pub type QueryParameters = HashMap<String, Option<String>>;

/// One rule of a mock bundle: a request shape mapped to a canned response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockEntry {
    /// Normalized URL in the form `://host[:port]/path`
    pub url: String,
    /// HTTP method, compared case-sensitively
    pub method: String,
    /// Declared query parameters
    pub query_parameters: QueryParameters,
    /// Response status code
    pub response_code: i64,
    /// Response headers
    pub response_headers: HashMap<String, String>,
    /// Body file, relative to the bundle base directory
    pub response_file: Option<String>,
    /// `Content-Type` override
    pub response_mime: Option<String>,
}

impl MockEntry {
    /// Create an entry answering `GET url` with `response_code` and nothing else.
    pub fn new(url: impl Into<String>, response_code: i64) -> Self {
        Self {
            url: url.into(),
            method: DEFAULT_METHOD.to_string(),
            query_parameters: QueryParameters::new(),
            response_code,
            response_headers: HashMap::new(),
            response_file: None,
            response_mime: None,
        }
    }

    /// Whether the entry declares a wildcard for `name`.
    pub fn is_wildcard(&self, name: &str) -> bool {
        matches!(self.query_parameters.get(name), Some(None))
    }
}
