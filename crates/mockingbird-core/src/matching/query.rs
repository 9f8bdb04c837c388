//! Query parameter parsing and matching against declared entry parameters.

use crate::bundle::QueryParameters;

/// One `name[=value]` item of a request query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItem {
    pub name: String,
    /// `None` when the item carries no `=`
    pub value: Option<String>,
}

impl QueryItem {
    pub fn new(name: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            name: name.into(),
            value: value.map(String::from),
        }
    }
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .unwrap_or_else(|_| raw.into())
        .into_owned()
}

/// Parse a raw query string into items with URL decoding.
///
/// Empty pairs are skipped; order and repeated names are preserved.
pub fn parse_query_items(query_str: &str) -> Vec<QueryItem> {
    query_str
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => QueryItem {
                name: decode(name),
                value: Some(decode(value)),
            },
            None => QueryItem {
                name: decode(pair),
                value: None,
            },
        })
        .collect()
}

/// Check incoming query items against the parameters an entry declares.
///
/// Without incoming items the entry must declare nothing. Otherwise each
/// incoming item needs a declared parameter of the same name that is either a
/// wildcard or holds the same value. Declared parameters the request does not
/// send are not required.
pub fn query_matches(declared: &QueryParameters, actual: &[QueryItem]) -> bool {
    if actual.is_empty() {
        return declared.is_empty();
    }

    actual.iter().all(|item| match declared.get(&item.name) {
        Some(None) => true,
        Some(Some(expected)) => item.value.as_deref() == Some(expected.as_str()),
        None => false,
    })
}
