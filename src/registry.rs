//! A type-keyed registry holding one lazily constructed instance per type.
//!
//! Currently designed for the construct-once, read-many pattern: each type gets its own
//! [`InstanceCell`], so constructing one type never waits on another type's constructor.
//! The type map sits behind an `RwLock`; only the first access of a type takes it for
//! writing, every later access shares the read lock.
//!
//! # Examples
//!
//! ```
//! use pattern_registry::InstanceRegistry;
//! use std::sync::Arc;
//!
//! let registry = InstanceRegistry::new();
//!
//! let greeting: Arc<String> = registry.get_or_init(|| "Hello, World!".to_string());
//! assert_eq!(&*greeting, "Hello, World!");
//!
//! // Later accesses return the same instance; the constructor is ignored.
//! let again: Arc<String> = registry.get_or_init(|| "ignored".to_string());
//! assert!(Arc::ptr_eq(&greeting, &again));
//! ```

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    sync::{Arc, RwLock},
};

use crate::registry_error::BoxError;
use crate::trace::Tracer;
use crate::{ConstructionError, InstanceCell, RegistryEvent};

type CellMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

/// Owned registry mapping each type to its single instance.
///
/// Pass it to the components that need it, or declare a process-wide one with
/// [`define_registry!`](crate::define_registry).
pub struct InstanceRegistry {
    /// `TypeId::of::<T>()` → `InstanceCell<T>`
    cells: RwLock<CellMap>,
    tracer: Tracer,
}

impl InstanceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            cells: RwLock::new(HashMap::new()),
            tracer: Tracer::new(),
        }
    }

    /// Fetches the cell for `T`, inserting an empty one on first use.
    ///
    /// The map lock is released before the cell is used, so constructors of
    /// different types run concurrently.
    fn cell<T: Send + Sync + 'static>(&self) -> Arc<InstanceCell<T>> {
        if let Some(cell) = self.existing_cell::<T>() {
            return cell;
        }

        let slot = self
            .cells
            // Entries are only ever inserted whole, so a poisoned map is still consistent.
            .write()
            .unwrap_or_else(|p| p.into_inner())
            // Another caller may have inserted the cell between the two locks.
            .entry(TypeId::of::<T>())
            .or_insert_with(|| {
                let cell: Arc<dyn Any + Send + Sync> = Arc::new(InstanceCell::<T>::new());
                cell
            })
            .clone();

        match slot.downcast::<InstanceCell<T>>() {
            Ok(cell) => cell,
            Err(_) => unreachable!(
                "slot for {} holds a different cell type",
                std::any::type_name::<T>()
            ),
        }
    }

    fn existing_cell<T: Send + Sync + 'static>(&self) -> Option<Arc<InstanceCell<T>>> {
        let slot = self
            .cells
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .get(&TypeId::of::<T>())
            .cloned()?;
        slot.downcast::<InstanceCell<T>>().ok()
    }

    /// Returns the instance of `T`, constructing it with `init` on first access.
    pub fn get_or_init<T, F>(&self, init: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, std::convert::Infallible>(init())) {
            Ok(value) => value,
            Err(err) => unreachable!("{err}"),
        }
    }

    /// Returns the instance of `T`, constructing it with `init` on first access.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if this call ran `init` and it failed. Nothing is
    /// stored, so a later call retries.
    pub fn get_or_try_init<T, F, E>(&self, init: F) -> Result<Arc<T>, ConstructionError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        self.cell::<T>().get_or_try_init_traced(init, &self.tracer)
    }

    /// Returns the instance of `T` if it has already been constructed.
    ///
    /// Never runs a constructor.
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        let found = self
            .existing_cell::<T>()
            .and_then(|cell| cell.get_quiet());

        self.tracer.emit(&RegistryEvent::Get {
            type_name: std::any::type_name::<T>(),
            found: found.is_some(),
        });

        found
    }

    /// Check if an instance of `T` has been constructed.
    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        let found = self
            .existing_cell::<T>()
            .is_some_and(|cell| cell.is_initialized());

        self.tracer.emit(&RegistryEvent::Contains {
            type_name: std::any::type_name::<T>(),
            found,
        });

        found
    }

    /// Drops every stored instance.
    ///
    /// Requires exclusive access, so no construction can be in flight. Already retrieved
    /// `Arc<T>` handles remain valid; the tracing callback is kept.
    pub fn reset(&mut self) {
        self.tracer.emit(&RegistryEvent::Reset {});

        self.cells
            .get_mut()
            .unwrap_or_else(|p| p.into_inner())
            .clear();
    }

    /// Set a tracing callback for registry operations.
    ///
    /// # Safety Restrictions
    ///
    /// The callback must NOT construct instances in the same registry: `Construct`
    /// is emitted while that type's init mutex is held.
    pub fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        self.tracer.set(callback);
    }

    /// Clear the tracing callback.
    ///
    /// Note: This does not affect stored instances, only the tracing callback.
    pub fn clear_trace_callback(&self) {
        self.tracer.clear();
    }
}

impl Default for InstanceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InstanceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types = self.cells.read().map(|m| m.len()).unwrap_or_default();
        f.debug_struct("InstanceRegistry")
            .field("types", &types)
            .finish_non_exhaustive()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
