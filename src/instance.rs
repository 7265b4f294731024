//! Lazily initialized single-instance cell.
//!
//! An [`InstanceCell`] holds at most one instance of `T`. The first caller of
//! [`InstanceCell::get_or_try_init`] runs the constructor; every caller, concurrent or
//! later, receives an `Arc` to that same instance.
//!
//! # Examples
//!
//! ```
//! use pattern_registry::InstanceCell;
//! use std::sync::Arc;
//!
//! struct Pool {
//!     size: usize,
//! }
//!
//! static POOL: InstanceCell<Pool> = InstanceCell::new();
//!
//! let a = POOL.get_or_init(|| Pool { size: 8 });
//! let b = POOL.get_or_init(|| Pool { size: 99 });
//!
//! assert_eq!(b.size, 8);
//! assert!(Arc::ptr_eq(&a, &b));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use crate::registry_error::BoxError;
use crate::trace::Tracer;
use crate::{ConstructionError, RegistryEvent};

/// A thread-safe cell constructing its value at most once.
///
/// Reads after publication never lock. The first construction is serialized by an
/// internal mutex that is held only across the check-and-construct step, and the value
/// is published through a [`OnceLock`] so no reader ever sees a partially built instance.
///
/// A failing (or panicking) constructor publishes nothing; the next call tries again.
///
/// # Deadlocks
///
/// The constructor must not access the same cell: it runs while the init mutex is held.
pub struct InstanceCell<T> {
    value: OnceLock<Arc<T>>,
    init: Mutex<()>,
    tracer: Tracer,
}

impl<T: Send + Sync + 'static> InstanceCell<T> {
    /// Creates an empty cell. Usable in `static` items.
    pub const fn new() -> Self {
        Self {
            value: OnceLock::new(),
            init: Mutex::new(()),
            tracer: Tracer::new(),
        }
    }

    /// Creates a cell that already holds `value`.
    ///
    /// Nothing is left to construct, so no caller ever takes the init mutex.
    pub fn eager(value: T) -> Self {
        Self {
            value: OnceLock::from(Arc::new(value)),
            init: Mutex::new(()),
            tracer: Tracer::new(),
        }
    }

    /// Returns the instance if it has been constructed.
    pub fn get(&self) -> Option<Arc<T>> {
        let found = self.get_quiet();
        self.tracer.emit(&RegistryEvent::Get {
            type_name: std::any::type_name::<T>(),
            found: found.is_some(),
        });
        found
    }

    pub(crate) fn get_quiet(&self) -> Option<Arc<T>> {
        self.value.get().cloned()
    }

    /// Whether the instance has been constructed.
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns the instance, constructing it with `init` on first access.
    pub fn get_or_init<F>(&self, init: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, Infallible>(init())) {
            Ok(value) => value,
            // Infallible constructors cannot produce an error.
            Err(err) => unreachable!("{err}"),
        }
    }

    /// Returns the instance, constructing it with `init` on first access.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] wrapping the constructor's error when this call ran
    /// the constructor and it failed. The cell stays empty and a later call retries.
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<Arc<T>, ConstructionError>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        self.get_or_try_init_traced(init, &self.tracer)
    }

    /// Initialization path shared with [`crate::InstanceRegistry`], which reports to its
    /// own tracer instead of the cell's.
    pub(crate) fn get_or_try_init_traced<F, E>(
        &self,
        init: F,
        tracer: &Tracer,
    ) -> Result<Arc<T>, ConstructionError>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        if let Some(value) = self.value.get() {
            return Ok(value.clone());
        }

        let type_name = std::any::type_name::<T>();

        // The guarded data is `()`, so a constructor panic leaves nothing to repair.
        let guard = self.init.lock().unwrap_or_else(|p| p.into_inner());

        // Another caller may have finished construction while we waited.
        if let Some(value) = self.value.get() {
            return Ok(value.clone());
        }

        tracer.emit(&RegistryEvent::Construct { type_name });

        let outcome = match init() {
            Ok(value) => {
                let value = Arc::new(value);
                // Cannot fail: every writer holds `init` and re-checked above.
                let _ = self.value.set(value.clone());
                Ok(value)
            }
            Err(err) => Err(ConstructionError::new::<T>(err)),
        };

        drop(guard);

        match &outcome {
            Ok(_) => tracer.emit(&RegistryEvent::Constructed { type_name }),
            Err(err) => {
                tracing::warn!(type_name, error = %err, "instance construction failed");
                tracer.emit(&RegistryEvent::ConstructionFailed {
                    type_name,
                    reason: err.to_string(),
                });
            }
        }

        outcome
    }

    /// Removes and returns the instance, leaving the cell empty.
    ///
    /// Requires exclusive access, so no construction can be in flight. Handles
    /// already given out stay valid; the next access constructs a new instance.
    pub fn take(&mut self) -> Option<Arc<T>> {
        let taken = self.value.take();
        if taken.is_some() {
            self.tracer.emit(&RegistryEvent::Reset {});
        }
        taken
    }

    /// Set a tracing callback for this cell.
    ///
    /// # Safety Restrictions
    ///
    /// The callback must not initialize this cell: `Construct` is emitted while the
    /// init mutex is held.
    pub fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        self.tracer.set(callback);
    }

    /// Clear the tracing callback.
    pub fn clear_trace_callback(&self) {
        self.tracer.clear();
    }
}

impl<T: Send + Sync + 'static> Default for InstanceCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for InstanceCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceCell")
            .field("value", &self.value.get())
            .finish_non_exhaustive()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
