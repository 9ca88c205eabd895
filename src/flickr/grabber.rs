use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use bytes::Bytes;
use tokio::task::{AbortHandle, JoinHandle};

use super::Client;
use super::models::PhotoSelection;
use super::result::Result;

/// Clears the busy flag when the grab finishes or its task is dropped.
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Drives grabs against one gallery with at most one request in flight.
///
/// Triggering while a grab is still running aborts the old task before the
/// new one starts, so a stale response can never land after a newer one.
/// The busy flag drops back to `false` on every exit path: success,
/// failure, or cancellation.
pub struct Grabber {
    client: Client,
    gallery_id: String,
    busy: Arc<AtomicBool>,
    in_flight: Option<AbortHandle>,
}

impl Grabber {
    pub fn new<T: Into<String>>(client: Client, gallery_id: T) -> Self {
        Self {
            client,
            gallery_id: gallery_id.into(),
            busy: Arc::new(AtomicBool::new(false)),
            in_flight: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Starts a new grab, cancelling any previous one that has not resolved
    /// yet. Must be called from within a tokio runtime.
    pub fn trigger(&mut self) -> JoinHandle<Result<(PhotoSelection, Bytes)>> {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        // Each trigger owns a fresh flag; a cancelled task clearing its own
        // flag cannot touch the newer trigger's.
        self.busy = Arc::new(AtomicBool::new(true));

        let guard = BusyGuard(self.busy.clone());
        let client = self.client.clone();
        let gallery_id = self.gallery_id.clone();

        let handle = tokio::spawn(async move {
            let _busy = guard;

            client.grab_photo(&gallery_id).await
        });
        self.in_flight = Some(handle.abort_handle());

        handle
    }
}
