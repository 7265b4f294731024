//! Theme-keyed registry of family factories.
//!
//! The registry is populated at startup and then only read. Lookups of an unknown theme
//! fail with [`LookupError`]; there is no fallback theme.
//!
//! # Examples
//!
//! ```
//! use pattern_registry::FactoryRegistry;
//!
//! let registry = FactoryRegistry::with_builtin_themes();
//!
//! let factory = registry.get_factory("italian").unwrap();
//! let family = factory.create_family();
//! assert!(family.is_consistent());
//!
//! assert!(registry.get_factory("martian").is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::themes::{AmericanFactory, ItalianFactory};
use crate::trace::Tracer;
use crate::{FamilyFactory, LookupError, RegistrationError, RegistryEvent, ThemeId};

/// Maps each theme to the factory producing its family.
pub struct FactoryRegistry {
    factories: HashMap<ThemeId, Arc<dyn FamilyFactory>>,
    tracer: Tracer,
}

impl FactoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            tracer: Tracer::new(),
        }
    }

    /// Creates a registry holding the built-in american and italian factories.
    pub fn with_builtin_themes() -> Self {
        let mut registry = Self::new();
        registry.factories.insert(ThemeId::AMERICAN, Arc::new(AmericanFactory));
        registry.factories.insert(ThemeId::ITALIAN, Arc::new(ItalianFactory));
        registry
    }

    /// Register a factory under its own theme.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::DuplicateTheme`] if the theme is already taken; the
    /// existing factory is kept. Returns [`RegistrationError::InconsistentFamily`] if a
    /// family built by `factory` mixes in products of another theme.
    pub fn register<F: FamilyFactory + 'static>(
        &mut self,
        factory: F,
    ) -> Result<(), RegistrationError> {
        self.register_arc(Arc::new(factory))
    }

    /// Register an Arc-wrapped factory under its own theme.
    ///
    /// Useful when the same factory instance is shared with other registries.
    ///
    /// The factory builds one sample family here; its products must all carry
    /// `factory.theme()`.
    pub fn register_arc(
        &mut self,
        factory: Arc<dyn FamilyFactory>,
    ) -> Result<(), RegistrationError> {
        let theme = factory.theme();
        if self.factories.contains_key(&theme) {
            return Err(RegistrationError::DuplicateTheme(theme));
        }

        let sample = factory.create_family();
        if *sample.theme() != theme || !sample.is_consistent() {
            tracing::warn!(%theme, products = ?sample.names(), "factory rejected: mixed family");
            return Err(RegistrationError::InconsistentFamily(theme));
        }

        self.tracer.emit(&RegistryEvent::Register {
            theme: theme.clone(),
        });
        self.factories.insert(theme, factory);
        Ok(())
    }

    /// Returns the factory registered for `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if no factory is registered for `theme`.
    pub fn get_factory(&self, theme: &str) -> Result<Arc<dyn FamilyFactory>, LookupError> {
        let factory = self.factories.get(theme).cloned();

        self.tracer.emit(&RegistryEvent::Lookup {
            theme: theme.to_owned(),
            found: factory.is_some(),
        });

        factory.ok_or_else(|| LookupError::new(theme))
    }

    /// Whether a factory is registered for `theme`.
    pub fn contains(&self, theme: &str) -> bool {
        self.factories.contains_key(theme)
    }

    /// Registered themes, sorted.
    pub fn themes(&self) -> Vec<ThemeId> {
        let mut themes: Vec<ThemeId> = self.factories.keys().cloned().collect();
        themes.sort();
        themes
    }

    /// Number of registered themes.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no theme is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Set a tracing callback for registration and lookup.
    pub fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        self.tracer.set(callback);
    }

    /// Clear the tracing callback.
    pub fn clear_trace_callback(&self) {
        self.tracer.clear();
    }
}

impl Default for FactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("themes", &self.themes())
            .finish_non_exhaustive()
    }
}

// -------------------------------------------------------------------------------------------------
// Process-wide registry
// -------------------------------------------------------------------------------------------------

/// Process-wide registry with the built-in themes, populated on first access.
static GLOBAL_FACTORIES: LazyLock<FactoryRegistry> =
    LazyLock::new(FactoryRegistry::with_builtin_themes);

/// The process-wide factory registry.
///
/// It only holds the built-in themes. Applications adding their own themes build a
/// [`FactoryRegistry`] at startup and pass it around instead.
pub fn global_factories() -> &'static FactoryRegistry {
    &GLOBAL_FACTORIES
}

/// Looks up `theme` in the process-wide registry.
///
/// # Examples
///
/// ```
/// use pattern_registry::{get_factory, Product};
///
/// let factory = get_factory("american").expect("built-in theme");
/// assert_eq!(factory.create_beverage().name(), "AmericanDrink");
/// ```
pub fn get_factory(theme: &str) -> Result<Arc<dyn FamilyFactory>, LookupError> {
    GLOBAL_FACTORIES.get_factory(theme)
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
