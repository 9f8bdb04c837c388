//! Process-wide mock state: the active bundle and the handle-all flag.

use crate::bundle::MockBundle;
use crate::error::BundleError;
use lazy_static::lazy_static;
use parking_lot::{Mutex, RwLock};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

lazy_static! {
    static ref GLOBAL_STATE: Arc<MockState> = Arc::new(MockState::new());
}

/// Active bundle snapshot plus the `handle_all_requests` flag.
///
/// Readers take an `Arc` snapshot of the bundle and never hold the lock while
/// matching, so a swap is observed either fully or not at all. Installs are
/// serialized with each other and parse the manifest before swapping.
#[derive(Debug, Default)]
pub struct MockState {
    bundle: RwLock<Option<Arc<MockBundle>>>,
    install_lock: Mutex<()>,
    handle_all_requests: AtomicBool,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide state shared by the global interceptor.
    pub fn global() -> Arc<MockState> {
        Arc::clone(&GLOBAL_STATE)
    }

    /// Load the bundle at `path` and make it active, or clear it with `None`.
    ///
    /// On error the previously active bundle stays in place.
    pub fn set_mock_bundle(&self, path: Option<&Path>) -> Result<(), BundleError> {
        let _guard = self.install_lock.lock();

        let Some(path) = path else {
            *self.bundle.write() = None;
            info!("Cleared mock bundle");
            return Ok(());
        };

        let bundle = MockBundle::load(path)?;
        info!(
            path = %bundle.base_path().display(),
            entries = bundle.len(),
            "Installed mock bundle"
        );
        *self.bundle.write() = Some(Arc::new(bundle));
        Ok(())
    }

    /// Make an already loaded bundle active.
    pub fn install(&self, bundle: MockBundle) {
        let _guard = self.install_lock.lock();
        *self.bundle.write() = Some(Arc::new(bundle));
    }

    pub fn clear(&self) {
        let _guard = self.install_lock.lock();
        *self.bundle.write() = None;
    }

    /// Snapshot of the active bundle.
    pub fn active_bundle(&self) -> Option<Arc<MockBundle>> {
        self.bundle.read().clone()
    }

    pub fn handle_all_requests(&self) -> bool {
        self.handle_all_requests.load(Ordering::Acquire)
    }

    /// Claim every request while a bundle is active, answering unmatched ones with `501`.
    pub fn set_handle_all_requests(&self, value: bool) {
        self.handle_all_requests.store(value, Ordering::Release);
    }
}

/// Set the process-wide active bundle; `None` clears it.
pub fn set_mock_bundle(path: Option<&Path>) -> Result<(), BundleError> {
    GLOBAL_STATE.set_mock_bundle(path)
}

pub fn set_handle_all_requests(value: bool) {
    GLOBAL_STATE.set_handle_all_requests(value);
}

pub fn handle_all_requests() -> bool {
    GLOBAL_STATE.handle_all_requests()
}

/// Snapshot of the process-wide active bundle.
pub fn active_bundle() -> Option<Arc<MockBundle>> {
    GLOBAL_STATE.active_bundle()
}
