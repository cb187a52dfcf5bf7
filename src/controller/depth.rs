//! Operation-depth counter
//!
//! Counts controller operations in flight and publishes a busy flag. It is
//! not a lock: overlapping operations still run.

use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::watch;
use tracing::debug;

/// Re-entrancy counter with an observable busy signal
#[derive(Debug)]
pub struct OperationDepth {
    depth: AtomicUsize,
    busy: watch::Sender<bool>,
}

impl Default for OperationDepth {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationDepth {
    /// Create an idle counter
    pub fn new() -> Self {
        let (busy, _) = watch::channel(false);
        Self {
            depth: AtomicUsize::new(0),
            busy,
        }
    }

    /// Enter an operation. The returned guard leaves it when dropped, on
    /// every exit path.
    pub fn enter(&self) -> DepthGuard<'_> {
        self.depth.fetch_add(1, Ordering::SeqCst);
        self.publish();
        DepthGuard { owner: self }
    }

    /// Number of operations in flight
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::SeqCst)
    }

    /// Whether any operation is in flight
    pub fn is_busy(&self) -> bool {
        self.depth() > 0
    }

    /// Subscribe to busy flag changes
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.busy.subscribe()
    }

    fn publish(&self) {
        // read the counter under the channel lock so publishes cannot reorder
        let mut busy = false;
        let changed = self.busy.send_if_modified(|current| {
            busy = self.is_busy();
            if *current == busy {
                return false;
            }
            *current = busy;
            true
        });
        if changed {
            debug!("Busy: {busy}");
        }
    }
}

/// Scoped membership in an [`OperationDepth`]
#[derive(Debug)]
pub struct DepthGuard<'a> {
    owner: &'a OperationDepth,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.owner.depth.fetch_sub(1, Ordering::SeqCst);
        self.owner.publish();
    }
}
