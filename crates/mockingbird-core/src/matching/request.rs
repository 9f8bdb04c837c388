//! Request descriptor used by the match engine.

use crate::matching::query::{parse_query_items, QueryItem};
use crate::matching::url::normalize_url;
use url::Url;

/// Normalized view of an incoming request: everything entry lookup needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// URL in `://host[:port]/path` form
    pub url: String,
    /// HTTP method as sent by the client
    pub method: String,
    /// Query items in request order, empty when there is no query
    pub query: Vec<QueryItem>,
}

impl RequestDescriptor {
    pub fn new(url: impl Into<String>, method: impl Into<String>, query: Vec<QueryItem>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            query,
        }
    }

    /// Describe a request for `url` sent with `method`.
    pub fn from_url(method: &str, url: &Url) -> Self {
        Self {
            url: normalize_url(url),
            method: method.to_string(),
            query: url.query().map(parse_query_items).unwrap_or_default(),
        }
    }
}
