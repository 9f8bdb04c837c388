//! Response synthesis for intercepted requests.

mod synthesizer;

pub use synthesizer::{
    load_body, not_found_response, synthesize, MockResponse, CONTENT_LENGTH, CONTENT_TYPE,
    NOT_IMPLEMENTED,
};
