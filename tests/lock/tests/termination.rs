//! The planner terminates on every finite world, and an unreachable goal
//! costs exactly one expansion per reachable state.

use goap_kernel::carrier::fact::Fact;
use goap_kernel::carrier::world_state::WorldState;
use goap_kernel::goal::Goal;
use goap_kernel::operators::action::Action;
use goap_kernel::operators::catalog::ActionCatalog;
use goap_search::search::{plan, PlanOutcome, Termination};
use lock_tests::oracle::{random_catalog, random_state, reachable_states};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn unreachable_goal_expands_every_reachable_state_once() {
    let mut rng = StdRng::seed_from_u64(9);
    // Fact 7 is never written by any generated action.
    let untouched = Fact::new(7).unwrap();
    let goal = Goal::new("never").with_condition(untouched, true);

    for round in 0..200 {
        let fact_count = rng.gen_range(1..=6);
        let action_count = rng.gen_range(0..=8);
        let catalog = random_catalog(&mut rng, fact_count, action_count);
        let initial = random_state(&mut rng, fact_count);

        let result = plan(&goal, initial, &catalog);
        assert_eq!(result.outcome, PlanOutcome::Unreachable, "round {round}");
        assert_eq!(result.stats.termination, Termination::FrontierExhausted);

        let reachable = reachable_states(initial, &catalog).len() as u64;
        assert_eq!(result.stats.expansions, reachable, "round {round}");
    }
}

#[test]
fn zero_cost_cycles_terminate() {
    let a = Fact::new(0).unwrap();
    let b = Fact::new(1).unwrap();
    let goal = Goal::new("never").with_condition(Fact::new(2).unwrap(), true);
    let catalog = ActionCatalog::new()
        .with(Action::new("SetA", 0).with_effect(a, true))
        .with(Action::new("ClearA", 0).with_effect(a, false))
        .with(Action::new("FlipB", 0).with_precondition(b, false).with_effect(b, true))
        .with(Action::new("FlopB", 0).with_precondition(b, true).with_effect(b, false))
        .with(Action::new("Noop", 0));

    let result = plan(&goal, WorldState::empty(), &catalog);
    assert_eq!(result.outcome, PlanOutcome::Unreachable);
    assert_eq!(result.stats.expansions, 4);
    assert!(result.stats.duplicates_skipped > 0);
}

#[test]
fn generated_nodes_cover_root_and_every_push() {
    let a = Fact::new(0).unwrap();
    let goal = Goal::new("never").with_condition(Fact::new(1).unwrap(), true);
    let catalog = ActionCatalog::new().with(Action::new("SetA", 1).with_effect(a, true));

    let result = plan(&goal, WorldState::empty(), &catalog);
    // root, {} -> {A}, {A} -> {A}
    assert_eq!(result.stats.nodes_generated, 3);
    assert_eq!(result.stats.expansions, 2);
    assert_eq!(result.stats.duplicates_skipped, 1);
}
