//! Manifest (`bundle.json`) parsing.
//!
//! Required fields are hard failures, optional fields are read through
//! shape validators that either produce a typed value or treat the field as
//! absent.

use crate::bundle::entry::{MockEntry, QueryParameters, DEFAULT_METHOD};
use crate::error::ManifestError;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use tracing::warn;

/// Manifest file name inside a bundle directory.
pub const MANIFEST_FILE: &str = "bundle.json";

type Object = Map<String, Value>;

/// Expected shape of a manifest field.
trait Shape<'a>: Sized {
    fn from_value(value: &'a Value) -> Option<Self>;
}

impl<'a> Shape<'a> for &'a str {
    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> Shape<'a> for &'a Object {
    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object()
    }
}

impl<'a> Shape<'a> for &'a Number {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }
}

/// Field of the expected shape, or `None` when absent or mistyped.
fn optional<'a, T: Shape<'a>>(object: &'a Object, key: &str) -> Option<T> {
    object.get(key).and_then(T::from_value)
}

fn required<'a, T: Shape<'a>>(
    object: &'a Object,
    key: &str,
    context: &str,
    index: usize,
) -> Result<T, ManifestError> {
    optional(object, key).ok_or_else(|| {
        invalid_entry(
            index,
            format!("{context}.{key} is missing or has the wrong type"),
        )
    })
}

fn invalid_entry(index: usize, reason: impl Into<String>) -> ManifestError {
    ManifestError::InvalidEntry {
        index,
        reason: reason.into(),
    }
}

/// Parse manifest text into entries, preserving declaration order.
pub fn parse_manifest(content: &str) -> Result<Vec<MockEntry>, ManifestError> {
    let document: Value = serde_json::from_str(content)?;
    let Value::Array(items) = document else {
        return Err(ManifestError::NotAnArray);
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_entry(item, index))
        .collect()
}

/// Validate one manifest element and build the entry it describes.
pub fn parse_entry(item: &Value, index: usize) -> Result<MockEntry, ManifestError> {
    let entry = item
        .as_object()
        .ok_or_else(|| invalid_entry(index, "entry must be an object"))?;
    let request: &Object = required(entry, "request", "entry", index)?;
    let response: &Object = required(entry, "response", "entry", index)?;

    let url: &str = required(request, "url", "request", index)?;
    if url.is_empty() {
        return Err(invalid_entry(index, "request.url must not be empty"));
    }

    let code: &Number = required(response, "code", "response", index)?;

    let method = optional::<&str>(request, "method").unwrap_or(DEFAULT_METHOD);
    let query_parameters = optional::<&Object>(request, "parameters")
        .map(|parameters| query_parameters(parameters, index))
        .unwrap_or_default();
    let response_headers = optional::<&Object>(response, "headers")
        .map(string_map)
        .unwrap_or_default();

    Ok(MockEntry {
        url: lowercase_host(url),
        method: method.to_string(),
        query_parameters,
        response_code: status_code(code),
        response_headers,
        response_file: optional::<&str>(response, "file").map(String::from),
        response_mime: optional::<&str>(response, "mime_type").map(String::from),
    })
}

/// Any number is accepted; fractions are truncated, out-of-range values saturate.
fn status_code(code: &Number) -> i64 {
    code.as_i64()
        .or_else(|| code.as_f64().map(|f| f.trunc() as i64))
        .unwrap_or_default()
}

/// Hosts of request URLs arrive lowercased, so entry hosts are stored the same way.
fn lowercase_host(url: &str) -> String {
    let Some(rest) = url.strip_prefix("://") else {
        return url.to_string();
    };
    let (authority, path) = rest.split_at(rest.find('/').unwrap_or(rest.len()));
    format!("://{}{path}", authority.to_ascii_lowercase())
}

fn query_parameters(parameters: &Object, index: usize) -> QueryParameters {
    let mut result = QueryParameters::new();
    for (name, value) in parameters {
        match value {
            Value::String(expected) => {
                result.insert(name.clone(), Some(expected.clone()));
            }
            Value::Null => {
                result.insert(name.clone(), None);
            }
            other => {
                warn!(
                    entry = index,
                    parameter = %name,
                    value = %other,
                    "Query parameter has invalid value, skipping"
                );
            }
        }
    }
    result
}

fn string_map(object: &Object) -> HashMap<String, String> {
    object
        .iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}
