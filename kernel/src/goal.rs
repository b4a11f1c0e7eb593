//! `Goal`: a desired partial valuation and its distance heuristic.
//!
//! `distance(state)` counts constrained facts whose value in `state` differs
//! from the required one; unconstrained facts contribute nothing. The goal
//! is satisfied exactly when the distance is zero.
//!
//! The distance is an admissible A* heuristic only if no action can retire
//! more than one unit of distance per unit of cost. See
//! [`Goal::is_admissible_for`].

use crate::carrier::fact::Fact;
use crate::carrier::fact_set::FactSet;
use crate::carrier::world_state::WorldState;
use crate::operators::action::Action;

/// What should become true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    name: String,
    conditions: FactSet,
}

impl Goal {
    /// Create a goal with no conditions (satisfied by every state).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            conditions: FactSet::new(),
        }
    }

    /// Require `fact == value`.
    #[must_use]
    pub fn with_condition(mut self, fact: Fact, value: bool) -> Self {
        self.conditions.insert(fact, value);
        self
    }

    /// Diagnostic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required facts.
    #[must_use]
    pub const fn conditions(&self) -> &FactSet {
        &self.conditions
    }

    /// Number of required facts whose value in `state` is wrong.
    #[must_use]
    pub const fn distance(&self, state: WorldState) -> u32 {
        state.mismatches(&self.conditions)
    }

    /// Whether `state` meets every condition.
    #[must_use]
    pub const fn satisfied(&self, state: WorldState) -> bool {
        self.distance(state) == 0
    }

    /// Whether `distance` never overestimates the remaining cost for plans
    /// built from `actions`.
    ///
    /// One application of an action changes at most as many goal facts as
    /// it writes, so the heuristic is admissible (and consistent) when every
    /// action costs at least the number of goal-constrained facts it writes.
    pub fn is_admissible_for<'a>(&self, actions: impl IntoIterator<Item = &'a Action>) -> bool {
        actions
            .into_iter()
            .all(|a| a.effects().overlap(&self.conditions) <= a.cost())
    }
}
