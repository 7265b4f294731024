//! Per-registry event callback storage.

use std::sync::{Arc, Mutex};

use crate::RegistryEvent;

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `RegistryEvent` every time a cell or registry
/// is interacted with. It must be thread-safe because registries are shared across threads.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// Holds an optional tracing callback and forwards events to it and to `tracing`.
pub(crate) struct Tracer {
    callback: Mutex<Option<Arc<TraceCallback>>>,
}

impl Tracer {
    pub(crate) const fn new() -> Self {
        Self {
            callback: Mutex::new(None),
        }
    }

    // Poisoning is recovered everywhere: the guarded value is replaced wholesale,
    // so a panic elsewhere cannot leave it half-written.
    pub(crate) fn set(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = self.callback.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    pub(crate) fn clear(&self) {
        let mut guard = self.callback.lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Logs the event and invokes the current callback, if any.
    ///
    /// The callback runs after the lock is released, so it may replace or clear itself.
    pub(crate) fn emit(&self, event: &RegistryEvent) {
        tracing::debug!(%event, "registry event");

        let callback = self
            .callback
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();
        if let Some(callback) = callback {
            callback(event);
        }
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new()
    }
}
