//! Typed planning errors.
//!
//! `PlanError` is only produced when a caller asks for a plan as a
//! `Result` (see [`crate::search::PlanResult::into_plan`]). The search itself
//! always returns a [`crate::search::PlanResult`] whose outcome tag
//! distinguishes "nothing to do" from "nothing can be done".

/// Recoverable planning failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The frontier emptied before any goal-satisfying state was popped.
    ///
    /// `expansions` is the number of distinct states expanded, which is
    /// the size of the reachable state set.
    NoPlanFound { expansions: u64 },
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPlanFound { expansions } => {
                write!(
                    f,
                    "no plan found: goal unreachable after expanding {expansions} states"
                )
            }
        }
    }
}

impl std::error::Error for PlanError {}
