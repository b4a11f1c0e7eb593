//! `Action`: an immutable operator with preconditions, effects and a cost.
//!
//! # Semantics
//!
//! - Preconditions: every constrained fact must equal its required value;
//!   facts never written read as false. An empty set is always met.
//! - Effects: unconditional overwrite of every constrained fact. Declaring
//!   the same fact twice keeps the last value.
//!
//! Actions are built once at configuration time and only read afterwards.
//! The planner borrows them from the owning
//! [`ActionCatalog`](super::catalog::ActionCatalog).

use crate::carrier::fact::Fact;
use crate::carrier::fact_set::FactSet;
use crate::carrier::world_state::WorldState;

/// Action cost. Non-negative by construction, so A* stays sound.
pub type Cost = u32;

/// An operator the planner may choose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: String,
    cost: Cost,
    preconditions: FactSet,
    effects: FactSet,
}

impl Action {
    /// Create an action with no preconditions and no effects.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: Cost) -> Self {
        Self {
            name: name.into(),
            cost,
            preconditions: FactSet::new(),
            effects: FactSet::new(),
        }
    }

    /// Require `fact == value` before this action applies.
    #[must_use]
    pub fn with_precondition(mut self, fact: Fact, value: bool) -> Self {
        self.preconditions.insert(fact, value);
        self
    }

    /// Write `fact = value` when this action is applied.
    #[must_use]
    pub fn with_effect(mut self, fact: Fact, value: bool) -> Self {
        self.effects.insert(fact, value);
        self
    }

    /// Copy of this action with a different cost.
    #[must_use]
    pub fn with_cost(&self, cost: Cost) -> Self {
        Self {
            cost,
            ..self.clone()
        }
    }

    /// Diagnostic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cost of applying this action once.
    #[must_use]
    pub const fn cost(&self) -> Cost {
        self.cost
    }

    /// Required facts.
    #[must_use]
    pub const fn preconditions(&self) -> &FactSet {
        &self.preconditions
    }

    /// Written facts.
    #[must_use]
    pub const fn effects(&self) -> &FactSet {
        &self.effects
    }

    /// Whether `state` meets every precondition.
    #[must_use]
    pub const fn meets_preconditions(&self, state: WorldState) -> bool {
        state.satisfies(&self.preconditions)
    }

    /// The state reached by applying this action's effects to `state`.
    ///
    /// Does not check preconditions.
    #[must_use]
    pub const fn apply_effects(&self, state: WorldState) -> WorldState {
        state.apply(&self.effects)
    }
}
