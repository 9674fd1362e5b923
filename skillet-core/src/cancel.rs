//! Cooperative cancellation for in-flight probes.
//!
//! Dropping a probe future already aborts its request; the token exists so a
//! caller can abandon a probe it no longer owns, e.g. when the search input
//! changes before the previous request resolves. Each logical request gets a
//! fresh pair.

use tokio::sync::watch;

/// Create a linked handle/token pair.
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

/// Triggers cancellation. Held by the caller that issued the request.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Abort whichever attempt is in flight on the linked token.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Observed by the prober between and during candidate attempts.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve when cancellation is requested.
    ///
    /// If the handle was dropped without cancelling, this pends forever,
    /// which is the correct behavior inside a `select!` against the request.
    pub async fn cancelled(&mut self) {
        if self.rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
