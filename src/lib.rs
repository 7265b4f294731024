//! # Pattern Registry
//!
//! Thread-safe lazy singletons and theme-keyed abstract factories.
//!
//! The crate provides two mechanisms:
//!
//! - **Instance registry**: at most one instance of a guarded resource, constructed on
//!   first access. Concurrent first callers trigger exactly one construction, a failed
//!   construction publishes nothing and is retried on the next call.
//! - **Family factory registry**: a theme selector resolves to a factory producing one
//!   product per role, all from that theme. Unknown themes are an error, never a default.
//!
//! ## Quick Start
//!
//! ```rust
//! use pattern_registry::{get_factory, InstanceCell, Product};
//! use std::sync::Arc;
//!
//! static GREETING: InstanceCell<String> = InstanceCell::new();
//!
//! let a = GREETING.get_or_init(|| "Hello, World!".to_string());
//! let b = GREETING.get_or_init(|| unreachable!());
//! assert!(Arc::ptr_eq(&a, &b));
//!
//! let factory = get_factory("italian").unwrap();
//! assert_eq!(factory.create_primary().name(), "ItalianBurger");
//! ```
//!
//! ## Features
//!
//! - **Owned or global**: [`InstanceCell`], [`InstanceRegistry`] and [`FactoryRegistry`]
//!   are plain values to pass around; [`define_instance!`], [`define_registry!`] and
//!   [`Singleton`] confine process-wide state to one private static each
//! - **Cheap reads**: an [`InstanceCell`] only takes its init mutex until the instance is
//!   published; [`InstanceRegistry`] readers share a read lock on the type map
//! - **Tracing support**: optional per-registry callback plus `tracing` debug events
//!
//! ## Main Types
//!
//! - [`InstanceCell`] - a single lazily constructed instance
//! - [`InstanceRegistry`] - one lazily constructed instance per type
//! - [`Singleton`] - trait giving a type its own process-wide instance
//! - [`FamilyFactory`] - builds a consistent product family for one theme
//! - [`FactoryRegistry`] - resolves a [`ThemeId`] to its factory

mod factory_registry;
mod family;
mod instance;
mod macros;
mod registry;
mod registry_error;
mod registry_event;
mod singleton_trait;
mod trace;
pub mod themes;

pub use factory_registry::{get_factory, global_factories, FactoryRegistry};
pub use family::{Beverage, Family, FamilyFactory, PrimaryItem, Product, SideItem, ThemeId};
pub use instance::InstanceCell;
pub use registry::InstanceRegistry;
pub use registry_error::{BoxError, ConstructionError, LookupError, RegistrationError};
pub use registry_event::RegistryEvent;
pub use singleton_trait::Singleton;
pub use trace::TraceCallback;
