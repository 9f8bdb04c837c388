//! URL normalization for entry lookup.

use std::borrow::Cow;
use url::Url;

/// Reduce a request URL to the `://host[:port]/path` form used by entries.
///
/// Scheme, query and fragment are dropped. The port is kept only when it is
/// explicit and differs from the scheme default. The path is percent-decoded.
pub fn normalize_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    let path = urlencoding::decode(url.path()).unwrap_or(Cow::Borrowed(url.path()));

    match url.port() {
        Some(port) => format!("://{host}:{port}{path}"),
        None => format!("://{host}{path}"),
    }
}
