//! Plan a scenario, then execute the plan against its initial state.
//!
//! # Pipeline
//!
//! ```text
//! plan(goal, initial, catalog) → execute_plan(initial, plan) → goal check
//! ```
//!
//! Execution only applies effects in order. Preconditions are not rechecked:
//! a plan from the planner meets them by construction.

use goap_kernel::carrier::world_state::WorldState;
use goap_search::search::{plan, Plan, PlanResult};
use tracing::info;

use crate::scenario::Scenario;

/// Outcome of running one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioRun<'a> {
    pub result: PlanResult<'a>,
    /// State after applying every planned action to the initial state.
    pub final_state: WorldState,
    /// Whether `final_state` meets the goal.
    pub goal_satisfied: bool,
}

/// Apply each action's effects in order.
#[must_use]
pub fn execute_plan(state: WorldState, plan: &Plan<'_>) -> WorldState {
    plan.iter()
        .fold(state, |current, action| action.apply_effects(current))
}

/// Plan and execute `scenario`.
///
/// An unreachable goal leaves the final state equal to the initial one.
#[must_use]
pub fn run_scenario(scenario: &Scenario) -> ScenarioRun<'_> {
    let result = plan(&scenario.goal, scenario.initial, &scenario.catalog);

    let final_state = match result.plan() {
        Some(found) => execute_plan(scenario.initial, found),
        None => scenario.initial,
    };
    let goal_satisfied = scenario.goal.satisfied(final_state);

    info!(
        goal = scenario.goal.name(),
        outcome = result.outcome.tag(),
        guarantee = result.guarantee.as_str(),
        steps = result.plan().map_or(0, Plan::len),
        expansions = result.stats.expansions,
        goal_satisfied,
        "scenario run"
    );

    ScenarioRun {
        result,
        final_state,
        goal_satisfied,
    }
}
