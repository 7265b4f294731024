//! Core trait defining singleton behavior.
//!
//! This module provides the `Singleton` trait with default implementations for lazy,
//! thread-safe access to a type's single process-wide instance.

use std::sync::Arc;

use crate::registry_error::BoxError;
use crate::{ConstructionError, InstanceCell};

/// A type with one process-wide instance.
///
/// Implementors provide two things: the static cell the instance lives in (`cell`) and
/// how to build it (`construct`). Access methods have default implementations.
///
/// # Examples
///
/// ```
/// use pattern_registry::{InstanceCell, Singleton};
/// use std::convert::Infallible;
/// use std::sync::Arc;
///
/// struct Settings {
///     retries: u32,
/// }
///
/// impl Singleton for Settings {
///     type Error = Infallible;
///
///     fn cell() -> &'static InstanceCell<Self> {
///         static CELL: InstanceCell<Settings> = InstanceCell::new();
///         &CELL
///     }
///
///     fn construct() -> Result<Self, Self::Error> {
///         Ok(Settings { retries: 3 })
///     }
/// }
///
/// let a = Settings::instance().unwrap();
/// let b = Settings::instance().unwrap();
/// assert_eq!(a.retries, 3);
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub trait Singleton: Sized + Send + Sync + 'static {
    /// Error returned by [`Singleton::construct`].
    type Error: Into<BoxError>;

    /// Access the cell holding the instance.
    ///
    /// This method must be implemented to return the same `static` on every call.
    fn cell() -> &'static InstanceCell<Self>;

    /// Builds the instance. Runs at most once per successful construction.
    fn construct() -> Result<Self, Self::Error>;

    /// Returns the instance, constructing it on first access.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if this call ran [`Singleton::construct`] and it
    /// failed. The next call retries.
    fn instance() -> Result<Arc<Self>, ConstructionError> {
        Self::cell().get_or_try_init(Self::construct)
    }

    /// Returns the instance only if it has already been constructed.
    fn existing() -> Option<Arc<Self>> {
        Self::cell().get()
    }

    fn is_initialized() -> bool {
        Self::cell().is_initialized()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug)]
    struct Clock {
        started: bool,
    }

    impl Singleton for Clock {
        type Error = std::convert::Infallible;

        fn cell() -> &'static InstanceCell<Self> {
            static CELL: InstanceCell<Clock> = InstanceCell::new();
            &CELL
        }

        fn construct() -> Result<Self, Self::Error> {
            CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
            Ok(Clock { started: true })
        }
    }

    #[test]
    fn test_instance_is_shared_across_threads() {
        let barrier = Arc::new(Barrier::new(8));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    Clock::instance().unwrap()
                })
            })
            .collect();

        let clocks: Vec<Arc<Clock>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(clocks.iter().all(|c| Arc::ptr_eq(c, &clocks[0]) && c.started));
        assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);
        assert!(Clock::is_initialized());
        assert!(Arc::ptr_eq(&Clock::existing().unwrap(), &clocks[0]));
    }

    static LINK_UP: AtomicBool = AtomicBool::new(false);

    #[derive(Debug)]
    struct Link;

    impl Singleton for Link {
        type Error = String;

        fn cell() -> &'static InstanceCell<Self> {
            static CELL: InstanceCell<Link> = InstanceCell::new();
            &CELL
        }

        fn construct() -> Result<Self, Self::Error> {
            if LINK_UP.load(Ordering::SeqCst) {
                Ok(Link)
            } else {
                Err("link down".to_string())
            }
        }
    }

    #[test]
    #[serial]
    fn test_failed_construction_retries() {
        LINK_UP.store(false, Ordering::SeqCst);

        let err = Link::instance().unwrap_err();
        assert!(err.to_string().ends_with("link down"));
        assert!(!Link::is_initialized());
        assert!(Link::existing().is_none());

        LINK_UP.store(true, Ordering::SeqCst);
        assert!(Link::instance().is_ok());
        assert!(Link::is_initialized());
    }
}
