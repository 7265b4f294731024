//! Macros declaring process-wide singletons and registries.
//!
//! Each invocation confines its global state to one private `static` inside a generated
//! module; the module's free functions are the only way to reach it.

/// Declares a lazily constructed process-wide instance.
///
/// The macro generates a module containing:
/// - a private `static` [`InstanceCell`](crate::InstanceCell)
/// - `get_instance()`, which constructs on first access with the given constructor
/// - `get()`, `is_initialized()` and the tracing callback functions
///
/// The constructor is any expression usable as `FnOnce() -> Result<T, E>`. Names from
/// the enclosing module are in scope inside the generated module, so invoke the macro at
/// module level rather than inside a function body.
///
/// # Examples
///
/// ```rust
/// use pattern_registry::define_instance;
/// use std::sync::Arc;
///
/// pub struct Config {
///     pub workers: usize,
/// }
///
/// fn load_config() -> Result<Config, std::io::Error> {
///     Ok(Config { workers: 4 })
/// }
///
/// define_instance!(config, Config, load_config);
///
/// fn main() {
///     let a: Arc<Config> = config::get_instance().unwrap();
///     let b: Arc<Config> = config::get_instance().unwrap();
///     assert_eq!(a.workers, 4);
///     assert!(Arc::ptr_eq(&a, &b));
/// }
/// ```
#[macro_export]
macro_rules! define_instance {
    ($name:ident, $ty:ty, $ctor:expr) => {
        pub mod $name {
            #[allow(unused_imports)]
            use super::*;
            use std::sync::Arc;

            // The single instance (module-private)
            static CELL: $crate::InstanceCell<$ty> = $crate::InstanceCell::new();

            /// Returns the instance, constructing it on first access.
            pub fn get_instance() -> Result<Arc<$ty>, $crate::ConstructionError> {
                CELL.get_or_try_init($ctor)
            }

            /// Returns the instance if it has already been constructed.
            pub fn get() -> Option<Arc<$ty>> {
                CELL.get()
            }

            /// Whether the instance has been constructed.
            pub fn is_initialized() -> bool {
                CELL.is_initialized()
            }

            /// Set a tracing callback for this instance.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                CELL.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                CELL.clear_trace_callback()
            }
        }
    };
}

/// Creates a complete process-wide instance registry with a single macro invocation.
///
/// The macro generates a module containing a private static
/// [`InstanceRegistry`](crate::InstanceRegistry) and free functions delegating to it.
/// Each invocation is isolated from every other.
///
/// # Examples
///
/// ```rust
/// use pattern_registry::define_registry;
/// use std::sync::Arc;
///
/// define_registry!(services);
///
/// let port: Arc<u16> = services::get_or_init(|| 8080);
/// assert_eq!(*port, 8080);
///
/// let again: Arc<u16> = services::get_or_init(|| 9090);
/// assert!(Arc::ptr_eq(&port, &again));
/// assert!(services::contains::<u16>());
/// ```
///
/// # Multiple Registries
///
/// ```rust
/// use pattern_registry::define_registry;
///
/// define_registry!(database);
/// define_registry!(cache);
///
/// database::get_or_init(|| "db_connection".to_string());
///
/// assert!(database::contains::<String>());
/// assert!(!cache::contains::<String>());
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        pub mod $name {
            use std::sync::{Arc, LazyLock};

            // Storage for constructed instances (module-private)
            static REGISTRY: LazyLock<$crate::InstanceRegistry> =
                LazyLock::new($crate::InstanceRegistry::new);

            /// Returns the instance of `T`, constructing it on first access.
            pub fn get_or_init<T: Send + Sync + 'static>(init: impl FnOnce() -> T) -> Arc<T> {
                REGISTRY.get_or_init(init)
            }

            /// Returns the instance of `T`, constructing it on first access.
            pub fn get_or_try_init<T, E>(
                init: impl FnOnce() -> Result<T, E>,
            ) -> Result<Arc<T>, $crate::ConstructionError>
            where
                T: Send + Sync + 'static,
                E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
            {
                REGISTRY.get_or_try_init(init)
            }

            /// Returns the instance of `T` if it has already been constructed.
            pub fn get<T: Send + Sync + 'static>() -> Option<Arc<T>> {
                REGISTRY.get()
            }

            /// Check if an instance of `T` has been constructed.
            pub fn contains<T: Send + Sync + 'static>() -> bool {
                REGISTRY.contains::<T>()
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                REGISTRY.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                REGISTRY.clear_trace_callback()
            }
        }
    };
}
