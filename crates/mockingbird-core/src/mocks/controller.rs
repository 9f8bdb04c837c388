//! Interception controller driven by the host networking stack.
//!
//! [`MockInterceptor`] decides whether a request is claimed and runs one
//! [`Interception`] per started request. An interception moves through
//! `Idle -> Deciding -> Responding -> Done` and delivers exactly one terminal
//! outcome to the host: a response followed by `did_finish_loading`, or
//! `did_fail`.

use crate::bundle::MockBundle;
use crate::error::InterceptError;
use crate::host::{
    ProtocolChain, ProtocolClient, ProtocolHandler, Request, ResponseHead, HTTP_VERSION,
};
use crate::matching::find_match;
use crate::mocks::state::MockState;
use crate::response::{not_found_response, synthesize, MockResponse};
use std::sync::Arc;
use tracing::{debug, warn};

/// Progress of a single interception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, not started yet
    Idle,
    /// Resolving the matching entry
    Deciding,
    /// Delivering the outcome to the host
    Responding,
    /// Terminal outcome delivered
    Done,
}

/// Result of resolving a request against the state at start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// An entry matched
    Matched(MockResponse),
    /// Nothing matched but all requests are claimed
    NotFound(MockResponse),
    /// Nothing matched; the request fails
    Declined(InterceptError),
}

/// Resolve `request` against a bundle snapshot.
pub fn resolve(
    bundle: Option<&MockBundle>,
    handle_all_requests: bool,
    request: &Request,
) -> Resolution {
    let descriptor = request.descriptor();
    if let Some(bundle) = bundle {
        if let Some(entry) = find_match(bundle, &descriptor) {
            return Resolution::Matched(synthesize(entry, bundle.base_path()));
        }
    }

    if handle_all_requests {
        Resolution::NotFound(not_found_response(bundle.map(MockBundle::base_path)))
    } else {
        Resolution::Declined(InterceptError::NoMatch {
            method: request.method.clone(),
            url: request.url.to_string(),
        })
    }
}

/// One started request.
#[derive(Debug)]
pub struct Interception {
    state: Arc<MockState>,
    request: Request,
    phase: Phase,
}

impl Interception {
    pub fn new(state: Arc<MockState>, request: Request) -> Self {
        Self {
            state,
            request,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Resolve the request and deliver the outcome to `client`.
    ///
    /// The match is resolved again here rather than reusing the decision made
    /// in `can_intercept`. Only the first call delivers anything.
    pub fn start(&mut self, client: &mut dyn ProtocolClient) {
        if self.phase != Phase::Idle {
            warn!(
                url = %self.request.url,
                phase = ?self.phase,
                "Interception already started"
            );
            return;
        }

        self.phase = Phase::Deciding;
        let bundle = self.state.active_bundle();
        let resolution = resolve(
            bundle.as_deref(),
            self.state.handle_all_requests(),
            &self.request,
        );

        self.phase = Phase::Responding;
        match resolution {
            Resolution::Matched(response) | Resolution::NotFound(response) => {
                self.deliver(response, client);
            }
            Resolution::Declined(error) => {
                warn!(
                    method = %self.request.method,
                    url = %self.request.url,
                    "No mock response, failing request"
                );
                client.did_fail(error);
            }
        }
        self.phase = Phase::Done;
    }

    fn deliver(&self, response: MockResponse, client: &mut dyn ProtocolClient) {
        debug!(
            method = %self.request.method,
            url = %self.request.url,
            status = response.status,
            "Delivering mock response"
        );
        client.did_receive_response(ResponseHead {
            url: self.request.url.clone(),
            status: response.status,
            version: HTTP_VERSION,
            headers: response.headers,
        });
        if let Some(body) = &response.body {
            client.did_load_data(body);
        }
        client.did_finish_loading();
    }

    /// Nothing to cancel: `start` runs to completion synchronously.
    pub fn stop(&mut self) {
        debug!(url = %self.request.url, phase = ?self.phase, "Stop requested");
    }
}

/// Protocol handler answering requests from the active mock bundle.
#[derive(Debug, Clone)]
pub struct MockInterceptor {
    state: Arc<MockState>,
}

impl MockInterceptor {
    pub fn new(state: Arc<MockState>) -> Self {
        Self { state }
    }

    /// Interceptor bound to the process-wide state.
    pub fn global() -> Self {
        Self::new(MockState::global())
    }

    pub fn state(&self) -> &Arc<MockState> {
        &self.state
    }

    /// Put this interceptor in front of every handler already in `chain`.
    pub fn register(self: Arc<Self>, chain: &mut ProtocolChain) {
        chain.register_front(self);
    }

    /// Prepare an interception for `request`.
    pub fn interception(&self, request: &Request) -> Interception {
        Interception::new(Arc::clone(&self.state), request.clone())
    }
}

impl ProtocolHandler for MockInterceptor {
    fn can_intercept(&self, request: &Request) -> bool {
        let Some(bundle) = self.state.active_bundle() else {
            return false;
        };

        let matched = find_match(&bundle, &request.descriptor()).is_some();
        let claimed = matched || self.state.handle_all_requests();
        debug!(
            method = %request.method,
            url = %request.url,
            matched,
            claimed,
            "Intercept decision"
        );
        claimed
    }

    fn is_cache_equivalent(&self, _a: &Request, _b: &Request) -> bool {
        false
    }

    fn start_loading(&self, request: &Request, client: &mut dyn ProtocolClient) {
        self.interception(request).start(client);
    }

    fn stop_loading(&self, _request: &Request) {}
}

/// Register the process-wide interceptor at the front of `chain`.
pub fn register(chain: &mut ProtocolChain) {
    Arc::new(MockInterceptor::global()).register(chain);
}
