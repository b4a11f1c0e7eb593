//! Optimality guarantee attached to every plan result.

use goap_kernel::goal::Goal;
use goap_kernel::operators::catalog::ActionCatalog;

/// What the caller may assume about a returned plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptimalityGuarantee {
    /// Every action costs at least the number of goal facts it writes, so the
    /// goal-distance heuristic is consistent and the plan has minimum cost.
    Optimal,
    /// Some action can retire more goal distance than it costs. The search is
    /// still complete but the plan may cost more than the minimum.
    CompleteOnly,
}

impl OptimalityGuarantee {
    /// Classify a `(goal, catalog)` pair.
    #[must_use]
    pub fn assess(goal: &Goal, catalog: &ActionCatalog) -> Self {
        if goal.is_admissible_for(catalog) {
            Self::Optimal
        } else {
            Self::CompleteOnly
        }
    }

    /// Stable lowercase tag for log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::CompleteOnly => "complete_only",
        }
    }
}
