//! Setup-time configuration errors.
//!
//! The fact universe is closed before any search starts, so every error here
//! is raised while a catalog, goal or state is being built. Nothing in the
//! search loop can produce one.

/// Typed failure for building facts and registries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A fact identifier is outside `0..FACT_CAPACITY`.
    FactOutOfRange { index: usize, capacity: usize },
    /// A registry already holds `capacity` distinct names.
    CapacityExceeded { name: String, capacity: usize },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FactOutOfRange { index, capacity } => {
                write!(f, "fact index {index} exceeds capacity {capacity}")
            }
            Self::CapacityExceeded { name, capacity } => {
                write!(
                    f,
                    "cannot register fact {name:?}: registry is full ({capacity} facts)"
                )
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
