//! Request matching against bundle entries.

mod entry;
mod query;
mod request;
mod url;

pub use entry::{entry_matches, find_match};
pub use query::{parse_query_items, query_matches, QueryItem};
pub use request::RequestDescriptor;
pub use self::url::normalize_url;
