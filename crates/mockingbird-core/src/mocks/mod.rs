//! Interception state and controller.
//!
//! This module provides:
//! - [`MockState`]: the active bundle snapshot and the `handle_all_requests` flag
//! - [`MockInterceptor`]: the protocol handler the host consults for every request

pub mod controller;
pub mod state;

pub use controller::{register, resolve, Interception, MockInterceptor, Phase, Resolution};
pub use state::{
    active_bundle, handle_all_requests, set_handle_all_requests, set_mock_bundle, MockState,
};
