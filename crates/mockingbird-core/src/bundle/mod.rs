//! Mock bundle model and loading.
//!
//! A bundle is a directory holding a `bundle.json` manifest plus the body
//! files its entries reference.

pub mod entry;
pub mod loader;
pub mod manifest;

pub use entry::{MockEntry, QueryParameters, DEFAULT_METHOD};
pub use loader::MockBundle;
pub use manifest::{parse_manifest, MANIFEST_FILE};
