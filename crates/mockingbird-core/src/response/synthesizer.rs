//! Building responses from matched entries.

use crate::bundle::MockEntry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";

/// Status used when all requests are claimed but none matched.
pub const NOT_IMPLEMENTED: i64 = 501;

/// Synthesized response: status, headers and optional body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub status: i64,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl MockResponse {
    /// Header value looked up case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Insert `name`, replacing any header that differs only in case.
fn set_header(headers: &mut HashMap<String, String>, name: &str, value: String) {
    headers.retain(|k, _| !k.eq_ignore_ascii_case(name));
    headers.insert(name.to_string(), value);
}

/// Read a body file relative to the bundle directory.
///
/// Failures are logged and yield `None`; a missing body never fails the request.
pub fn load_body(base_dir: &Path, file: &str) -> Option<Vec<u8>> {
    let path = base_dir.join(file.trim_start_matches('/'));
    match fs::read(&path) {
        Ok(data) => Some(data),
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "Could not read response file, sending no body"
            );
            None
        }
    }
}

/// Build the response for a matched entry.
pub fn synthesize(entry: &MockEntry, base_dir: &Path) -> MockResponse {
    let mut headers = entry.response_headers.clone();
    if let Some(mime) = &entry.response_mime {
        set_header(&mut headers, CONTENT_TYPE, mime.clone());
    }

    let body = entry
        .response_file
        .as_deref()
        .and_then(|file| load_body(base_dir, file));
    match &body {
        Some(data) => set_header(&mut headers, CONTENT_LENGTH, data.len().to_string()),
        None if entry.response_file.is_some() => {
            headers.retain(|k, _| !k.eq_ignore_ascii_case(CONTENT_LENGTH));
        }
        None => {}
    }

    debug!(
        url = %entry.url,
        status = entry.response_code,
        body_len = body.as_ref().map(Vec::len),
        "Synthesized mock response"
    );

    MockResponse {
        status: entry.response_code,
        headers,
        body,
    }
}

/// Diagnostic `501` sent when every request is claimed and nothing matched.
pub fn not_found_response(bundle_path: Option<&Path>) -> MockResponse {
    let message = match bundle_path {
        Some(path) => format!(
            "Mockingbird response not available. Please add a response to the bundle at {}.",
            path.display()
        ),
        None => "Mockingbird response not available. No mock bundle is active, please set a \
                 bundle that contains a response for this request."
            .to_string(),
    };
    let body = message.into_bytes();

    let mut headers = HashMap::new();
    headers.insert(CONTENT_TYPE.to_string(), "text/plain".to_string());
    headers.insert(CONTENT_LENGTH.to_string(), body.len().to_string());

    MockResponse {
        status: NOT_IMPLEMENTED,
        headers,
        body: Some(body),
    }
}
