use std::error::Error as StdError;

use thiserror::Error;

use crate::ThemeId;

/// Boxed error produced by a failing constructor.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A guarded resource's one-time construction failed.
///
/// Nothing was published to the cell, so the next access retries construction.
#[derive(Debug, Error)]
#[error("failed to construct instance of {type_name}: {source}")]
pub struct ConstructionError {
    type_name: &'static str,
    source: BoxError,
}

impl ConstructionError {
    pub(crate) fn new<T>(source: impl Into<BoxError>) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            source: source.into(),
        }
    }

    /// Type name of the resource whose construction failed.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Consumes the error, returning the constructor's own error.
    pub fn into_source(self) -> BoxError {
        self.source
    }
}

/// No factory is registered for the requested theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no factory registered for theme `{theme}`")]
pub struct LookupError {
    theme: String,
}

impl LookupError {
    pub(crate) fn new(theme: &str) -> Self {
        Self {
            theme: theme.to_owned(),
        }
    }

    /// The theme that was requested.
    pub fn theme(&self) -> &str {
        &self.theme
    }
}

/// A factory could not be added to a [`FactoryRegistry`](crate::FactoryRegistry).
///
/// The registry is unchanged when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A factory for this theme is already registered; it is left untouched.
    #[error("a factory for theme `{0}` is already registered")]
    DuplicateTheme(ThemeId),

    /// The factory builds products that do not carry its own theme.
    #[error("factory for theme `{0}` builds products of another theme")]
    InconsistentFamily(ThemeId),
}
