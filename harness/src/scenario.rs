//! `Scenario`: everything one planning call needs, plus the fact names.

use goap_kernel::carrier::registry::FactRegistry;
use goap_kernel::carrier::world_state::WorldState;
use goap_kernel::goal::Goal;
use goap_kernel::operators::catalog::ActionCatalog;

/// A compiled planning problem.
///
/// The registry is carried for rendering only; the planner never sees names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub registry: FactRegistry,
    pub initial: WorldState,
    pub goal: Goal,
    pub catalog: ActionCatalog,
}

impl Scenario {
    #[must_use]
    pub fn new(
        registry: FactRegistry,
        initial: WorldState,
        goal: Goal,
        catalog: ActionCatalog,
    ) -> Self {
        Self {
            registry,
            initial,
            goal,
            catalog,
        }
    }

    /// Names of the facts true in `state`.
    #[must_use]
    pub fn describe(&self, state: WorldState) -> Vec<String> {
        self.registry.describe(state)
    }
}
