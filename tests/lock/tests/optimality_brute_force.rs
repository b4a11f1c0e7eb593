//! Planner cost matches an exhaustive Bellman–Ford search on small random
//! worlds where the goal distance never overestimates.

use goap_search::guarantee::OptimalityGuarantee;
use goap_search::search::{plan, PlanOutcome};
use lock_tests::oracle::{brute_force_cost, random_catalog, random_goal, random_state};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn plan_cost_matches_exhaustive_minimum() {
    let mut rng = StdRng::seed_from_u64(0x60A9);

    for round in 0..300 {
        let fact_count = rng.gen_range(2..=6);
        let action_count = rng.gen_range(1..=8);
        let catalog = random_catalog(&mut rng, fact_count, action_count);
        let goal = random_goal(&mut rng, fact_count);
        let initial = random_state(&mut rng, fact_count);

        let result = plan(&goal, initial, &catalog);
        assert_eq!(
            result.guarantee,
            OptimalityGuarantee::Optimal,
            "round {round}: generated catalog should be admissible"
        );

        let expected = brute_force_cost(&goal, initial, &catalog, fact_count);
        let actual = match &result.outcome {
            PlanOutcome::Found(p) => Some(p.total_cost()),
            PlanOutcome::AlreadySatisfied => Some(0),
            PlanOutcome::Unreachable => None,
        };
        assert_eq!(actual, expected, "round {round}: cost mismatch");
    }
}

#[test]
fn found_plans_are_executable_and_reach_the_goal() {
    let mut rng = StdRng::seed_from_u64(42);

    for round in 0..300 {
        let fact_count = rng.gen_range(2..=6);
        let action_count = rng.gen_range(1..=8);
        let catalog = random_catalog(&mut rng, fact_count, action_count);
        let goal = random_goal(&mut rng, fact_count);
        let initial = random_state(&mut rng, fact_count);

        let result = plan(&goal, initial, &catalog);
        let Some(found) = result.plan() else { continue };

        let mut state = initial;
        for action in found.iter() {
            assert!(
                action.meets_preconditions(state),
                "round {round}: {} not applicable",
                action.name()
            );
            state = action.apply_effects(state);
        }
        assert!(goal.satisfied(state), "round {round}: goal not reached");
        assert!(!goal.satisfied(initial));
        let summed: u64 = found.iter().map(|a| u64::from(a.cost())).sum();
        assert_eq!(summed, found.total_cost());
    }
}
