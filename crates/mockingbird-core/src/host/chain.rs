//! Ordered chain of protocol handlers consulted for every request.

use crate::host::protocol::{ProtocolClient, ProtocolHandler, Request};
use std::fmt;
use std::sync::Arc;

/// Handlers in the order the host asks them.
///
/// The first handler whose `can_intercept` accepts a request answers it;
/// when none does, the host falls back to real networking.
#[derive(Clone, Default)]
pub struct ProtocolChain {
    handlers: Vec<Arc<dyn ProtocolHandler>>,
}

impl ProtocolChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `handler` so it is asked before every handler already registered.
    pub fn register_front(&mut self, handler: Arc<dyn ProtocolHandler>) {
        self.handlers.insert(0, handler);
    }

    pub fn push_back(&mut self, handler: Arc<dyn ProtocolHandler>) {
        self.handlers.push(handler);
    }

    pub fn handlers(&self) -> &[Arc<dyn ProtocolHandler>] {
        &self.handlers
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// First handler accepting `request`.
    pub fn handler_for(&self, request: &Request) -> Option<Arc<dyn ProtocolHandler>> {
        self.handlers
            .iter()
            .find(|handler| handler.can_intercept(request))
            .cloned()
    }

    /// Run `request` through the first accepting handler.
    ///
    /// Returns `false` when no handler claimed it and the host has to perform
    /// the request itself.
    pub fn dispatch(&self, request: &Request, client: &mut dyn ProtocolClient) -> bool {
        let Some(handler) = self.handler_for(request) else {
            return false;
        };
        let canonical = handler.canonicalize(request.clone());
        handler.start_loading(&canonical, client);
        true
    }
}

impl fmt::Debug for ProtocolChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtocolChain")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
