//! Mockingbird: recorded HTTP responses served from disk.
//!
//! A mock bundle is a directory with a `bundle.json` manifest:
//!
//! ```json
//! [
//!   {
//!     "request": { "url": "://httpbin.org/get", "parameters": { "show_env": "1" } },
//!     "response": { "code": 200, "file": "get.json", "mime_type": "application/json" }
//!   }
//! ]
//! ```
//!
//! Register the interceptor at the front of the host's protocol chain, then
//! activate a bundle with [`set_mock_bundle`]. Matching requests are answered
//! from the bundle; with [`set_handle_all_requests`] unmatched requests get a
//! diagnostic `501` instead of reaching the network.

pub mod bundle;
pub mod config;
pub mod error;
pub mod host;
pub mod matching;
pub mod mocks;
pub mod response;

pub use bundle::{MockBundle, MockEntry};
pub use config::Settings;
pub use error::{BundleError, InterceptError, ManifestError, ERROR_DOMAIN};
pub use host::{ProtocolChain, ProtocolClient, ProtocolHandler, Request, ResponseHead};
pub use mocks::{
    active_bundle, handle_all_requests, register, set_handle_all_requests, set_mock_bundle,
    MockInterceptor, MockState,
};
pub use response::MockResponse;

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
