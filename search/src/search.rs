//! Planner entry point and expansion loop.
//!
//! Forward A* over world states:
//!
//! 1. Push the root with `g = 0`, `h = distance(initial)`.
//! 2. Pop the minimum-`f` node. If its state satisfies the goal, stop.
//!    States already expanded are skipped (lazy deletion); otherwise the
//!    state is marked visited and every applicable action, in catalog
//!    order, pushes a child with `g + cost` and the child's distance.
//! 3. An empty frontier means the goal is unreachable.
//!
//! The goal test happens on pop, never on push, so a cheaper path that is
//! still queued is not cut off by a more expensive one found first.

use std::collections::HashSet;

use goap_kernel::carrier::world_state::WorldState;
use goap_kernel::goal::Goal;
use goap_kernel::operators::action::Action;
use goap_kernel::operators::catalog::ActionCatalog;
use tracing::{debug, trace};

use crate::error::PlanError;
use crate::frontier::BinaryFrontier;
use crate::guarantee::OptimalityGuarantee;
use crate::node::{PathArena, SearchNode};

/// Initial frontier reservation.
const FRONTIER_RESERVE: usize = 150;

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// A goal-satisfying state was popped.
    GoalReached,
    /// The frontier ran dry.
    FrontierExhausted,
}

impl Termination {
    /// Stable lowercase tag for log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Distinct states whose successors were generated.
    pub expansions: u64,
    /// Nodes pushed onto the frontier, root included.
    pub nodes_generated: u64,
    /// Pops discarded because their state was already expanded.
    pub duplicates_skipped: u64,
    /// Largest frontier size reached.
    pub frontier_high_water: u64,
    /// Why the loop stopped.
    pub termination: Termination,
}

/// An ordered action sequence borrowed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<'a> {
    actions: Vec<&'a Action>,
    total_cost: u64,
}

impl<'a> Plan<'a> {
    /// The plan for a goal that already holds.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            actions: Vec::new(),
            total_cost: 0,
        }
    }

    fn from_actions(actions: Vec<&'a Action>) -> Self {
        let total_cost = actions.iter().map(|a| u64::from(a.cost())).sum();
        Self {
            actions,
            total_cost,
        }
    }

    /// Actions in execution order.
    #[must_use]
    pub fn actions(&self) -> &[&'a Action] {
        &self.actions
    }

    /// Iterate actions in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Action> + '_ {
        self.actions.iter().copied()
    }

    /// Action names in execution order.
    #[must_use]
    pub fn names(&self) -> Vec<&'a str> {
        self.actions.iter().map(|a| a.name()).collect()
    }

    /// Sum of action costs.
    #[must_use]
    pub const fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Tagged planning outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome<'a> {
    /// A non-empty action sequence reaches the goal.
    Found(Plan<'a>),
    /// The initial state already satisfies the goal.
    AlreadySatisfied,
    /// No reachable state satisfies the goal.
    Unreachable,
}

impl PlanOutcome<'_> {
    /// Stable lowercase tag for log fields.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::AlreadySatisfied => "already_satisfied",
            Self::Unreachable => "unreachable",
        }
    }
}

/// Result of one [`plan`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanResult<'a> {
    pub outcome: PlanOutcome<'a>,
    pub stats: SearchStats,
    pub guarantee: OptimalityGuarantee,
}

impl<'a> PlanResult<'a> {
    /// Returns `true` for both `Found` and `AlreadySatisfied`.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        !matches!(self.outcome, PlanOutcome::Unreachable)
    }

    /// The found plan, if any. `None` for an already-satisfied goal too.
    #[must_use]
    pub fn plan(&self) -> Option<&Plan<'a>> {
        match &self.outcome {
            PlanOutcome::Found(plan) => Some(plan),
            PlanOutcome::AlreadySatisfied | PlanOutcome::Unreachable => None,
        }
    }

    /// Convert to a plain `Result`. An already-satisfied goal yields an
    /// empty plan.
    ///
    /// # Errors
    ///
    /// [`PlanError::NoPlanFound`] when the goal is unreachable.
    pub fn into_plan(self) -> Result<Plan<'a>, PlanError> {
        match self.outcome {
            PlanOutcome::Found(plan) => Ok(plan),
            PlanOutcome::AlreadySatisfied => Ok(Plan::empty()),
            PlanOutcome::Unreachable => Err(PlanError::NoPlanFound {
                expansions: self.stats.expansions,
            }),
        }
    }
}

/// Find a minimum-cost action sequence from `initial_state` to `goal`.
///
/// Cost-optimal whenever the returned `guarantee` is
/// [`OptimalityGuarantee::Optimal`]; always complete over the finite state
/// space. Pure: no I/O, no shared state.
#[must_use]
pub fn plan<'a>(goal: &Goal, initial_state: WorldState, catalog: &'a ActionCatalog) -> PlanResult<'a> {
    let guarantee = OptimalityGuarantee::assess(goal, catalog);

    let mut frontier = BinaryFrontier::with_capacity(FRONTIER_RESERVE);
    let mut visited: HashSet<WorldState> = HashSet::new();
    let mut arena = PathArena::new();

    let root_id = arena.push_root();
    frontier.insert(SearchNode {
        node_id: root_id,
        state: initial_state,
        depth: 0,
        g_cost: 0,
        h_cost: u64::from(goal.distance(initial_state)),
    });

    let mut expansions = 0u64;
    let mut duplicates_skipped = 0u64;
    let mut goal_node = None;

    while let Some(node) = frontier.pop() {
        if goal.satisfied(node.state) {
            goal_node = Some(node);
            break;
        }

        if !visited.insert(node.state) {
            duplicates_skipped += 1;
            continue;
        }

        expansions += 1;
        trace!(
            state = %node.state,
            g = node.g_cost,
            h = node.h_cost,
            depth = node.depth,
            "expanding"
        );

        for action in catalog {
            if !action.meets_preconditions(node.state) {
                continue;
            }
            let child_state = action.apply_effects(node.state);
            let child_id = arena.push_child(node.node_id, action);
            frontier.insert(SearchNode {
                node_id: child_id,
                state: child_state,
                depth: node.depth + 1,
                g_cost: node.g_cost + u64::from(action.cost()),
                h_cost: u64::from(goal.distance(child_state)),
            });
        }
    }

    let termination = if goal_node.is_some() {
        Termination::GoalReached
    } else {
        Termination::FrontierExhausted
    };

    let stats = SearchStats {
        expansions,
        nodes_generated: arena.len() as u64,
        duplicates_skipped,
        frontier_high_water: frontier.high_water() as u64,
        termination,
    };

    let outcome = match goal_node {
        Some(node) if node.node_id == root_id => PlanOutcome::AlreadySatisfied,
        Some(node) => PlanOutcome::Found(Plan::from_actions(arena.actions_to(node.node_id))),
        None => PlanOutcome::Unreachable,
    };

    debug!(
        goal = goal.name(),
        outcome = outcome.tag(),
        expansions = stats.expansions,
        nodes_generated = stats.nodes_generated,
        duplicates_skipped = stats.duplicates_skipped,
        termination = stats.termination.as_str(),
        guarantee = guarantee.as_str(),
        "search finished"
    );

    PlanResult {
        outcome,
        stats,
        guarantee,
    }
}
