//! Harness-level errors.
//!
//! Everything that can fail outside the planner: reading scenario files and
//! compiling them into kernel types.

use goap_kernel::error::ConfigurationError;

/// Error loading or compiling a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// Scenario JSON is malformed or violates the fact universe.
    Config { detail: String },
    /// Filesystem failure.
    Io { detail: String },
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config { detail } => write!(f, "scenario configuration error: {detail}"),
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
        }
    }
}

impl std::error::Error for HarnessError {}

impl From<ConfigurationError> for HarnessError {
    fn from(e: ConfigurationError) -> Self {
        Self::Config {
            detail: e.to_string(),
        }
    }
}
