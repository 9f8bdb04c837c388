//! Host networking stack interface.
//!
//! The host keeps an ordered [`ProtocolChain`] of [`ProtocolHandler`]s and
//! reports the progress of each request through a [`ProtocolClient`].

mod chain;
mod protocol;

pub use chain::ProtocolChain;
pub use protocol::{ProtocolClient, ProtocolHandler, Request, ResponseHead, HTTP_VERSION};
