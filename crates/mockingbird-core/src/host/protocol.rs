//! Protocol handler contract between the host networking stack and a handler.

use crate::error::InterceptError;
use crate::matching::RequestDescriptor;
use std::collections::HashMap;
use url::Url;

/// HTTP version reported on synthesized responses.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Outgoing request as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: Url,
    pub method: String,
    pub headers: HashMap<String, String>,
}

impl Request {
    pub fn new(method: impl Into<String>, url: Url) -> Self {
        Self {
            url,
            method: method.into(),
            headers: HashMap::new(),
        }
    }

    /// Shorthand for a `GET` request.
    pub fn get(url: Url) -> Self {
        Self::new("GET", url)
    }

    /// Normalized descriptor used for entry lookup.
    pub fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor::from_url(&self.method, &self.url)
    }
}

/// Status line and headers delivered before any body data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub url: Url,
    pub status: i64,
    pub version: &'static str,
    pub headers: HashMap<String, String>,
}

/// Callbacks a handler uses to report progress of one request back to the host.
pub trait ProtocolClient {
    fn did_receive_response(&mut self, response: ResponseHead);

    fn did_load_data(&mut self, data: &[u8]);

    fn did_finish_loading(&mut self);

    fn did_fail(&mut self, error: InterceptError);
}

/// A request handler registered in the host's protocol chain.
///
/// The host asks `can_intercept` first; only handlers that accept a request
/// are started for it.
pub trait ProtocolHandler: Send + Sync {
    /// Whether this handler wants to answer `request`.
    fn can_intercept(&self, request: &Request) -> bool;

    /// Canonical form of `request` used by the host for caching decisions.
    fn canonicalize(&self, request: Request) -> Request {
        request
    }

    fn is_cache_equivalent(&self, a: &Request, b: &Request) -> bool;

    /// Answer `request`, reporting through `client`.
    fn start_loading(&self, request: &Request, client: &mut dyn ProtocolClient);

    fn stop_loading(&self, request: &Request);
}
