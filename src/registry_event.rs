use crate::ThemeId;

/// Events emitted by instance cells and registries during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`
/// and are also logged through `tracing` at debug level.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use pattern_registry::RegistryEvent;
///
/// let event = RegistryEvent::Construct { type_name: "i32" };
/// assert_eq!(event.to_string(), "construct { type_name: i32 }");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEvent {
    /// First access: the constructor is about to run.
    Construct {
        /// The type name of the guarded resource (e.g., "i32", "alloc::string::String")
        type_name: &'static str,
    },

    /// The constructor succeeded and the instance was published.
    Constructed { type_name: &'static str },

    /// The constructor failed; nothing was published.
    ConstructionFailed {
        type_name: &'static str,
        /// Display form of the constructor's error
        reason: String,
    },

    /// An existing instance was requested without constructing it.
    Get {
        type_name: &'static str,
        /// Whether an instance was already published
        found: bool,
    },

    /// A type existence check was performed.
    Contains { type_name: &'static str, found: bool },

    /// Published instances were dropped from an owned cell or registry.
    Reset {},

    /// A family factory was registered.
    Register { theme: ThemeId },

    /// A family factory was looked up by theme.
    Lookup {
        /// The requested theme, as passed by the caller
        theme: String,
        found: bool,
    },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Construct { type_name } => {
                write!(f, "construct {{ type_name: {} }}", type_name)
            }
            RegistryEvent::Constructed { type_name } => {
                write!(f, "constructed {{ type_name: {} }}", type_name)
            }
            RegistryEvent::ConstructionFailed { type_name, reason } => {
                write!(
                    f,
                    "construction failed {{ type_name: {}, reason: {} }}",
                    type_name, reason
                )
            }
            RegistryEvent::Get { type_name, found } => {
                write!(f, "get {{ type_name: {}, found: {} }}", type_name, found)
            }
            RegistryEvent::Contains { type_name, found } => {
                write!(
                    f,
                    "contains {{ type_name: {}, found: {} }}",
                    type_name, found
                )
            }
            RegistryEvent::Reset {} => write!(f, "reset {{}}"),
            RegistryEvent::Register { theme } => write!(f, "register {{ theme: {} }}", theme),
            RegistryEvent::Lookup { theme, found } => {
                write!(f, "lookup {{ theme: {}, found: {} }}", theme, found)
            }
        }
    }
}
