//! Reference scenarios: a straightforward plan, an already-satisfied goal,
//! and an unreachable goal.

use goap_kernel::carrier::fact::Fact;
use goap_kernel::carrier::world_state::WorldState;
use goap_kernel::goal::Goal;
use goap_kernel::operators::action::Action;
use goap_kernel::operators::catalog::ActionCatalog;
use goap_search::error::PlanError;
use goap_search::search::{plan, PlanOutcome, Termination};

const TARGET_DEAD: usize = 0;
const ARMED: usize = 1;
const LOADED: usize = 2;

fn fact(i: usize) -> Fact {
    Fact::new(i).unwrap()
}

fn kill_enemy() -> Goal {
    Goal::new("KillEnemy").with_condition(fact(TARGET_DEAD), true)
}

fn armory() -> ActionCatalog {
    ActionCatalog::new()
        .with(Action::new("Equip", 1).with_effect(fact(ARMED), true))
        .with(
            Action::new("Load", 1)
                .with_precondition(fact(ARMED), true)
                .with_effect(fact(LOADED), true),
        )
        .with(
            Action::new("Shoot", 4)
                .with_precondition(fact(ARMED), true)
                .with_precondition(fact(LOADED), true)
                .with_effect(fact(TARGET_DEAD), true),
        )
}

#[test]
fn armory_finds_equip_load_shoot() {
    let catalog = armory();
    let result = plan(&kill_enemy(), WorldState::empty(), &catalog);
    let found = result.into_plan().unwrap();
    assert_eq!(found.names(), vec!["Equip", "Load", "Shoot"]);
    assert_eq!(found.total_cost(), 6);
}

#[test]
fn already_dead_target_needs_no_plan() {
    let catalog = armory();
    let start = WorldState::empty().with(fact(TARGET_DEAD), true);
    let result = plan(&kill_enemy(), start, &catalog);

    assert_eq!(result.outcome, PlanOutcome::AlreadySatisfied);
    assert_eq!(result.stats.termination, Termination::GoalReached);
    assert!(result.is_goal_reached());
    assert!(result.into_plan().unwrap().is_empty());
}

#[test]
fn missing_shoot_action_is_unreachable() {
    let catalog = ActionCatalog::new().with(Action::new("Equip", 1).with_effect(fact(ARMED), true));
    let result = plan(&kill_enemy(), WorldState::empty(), &catalog);

    assert_eq!(result.outcome, PlanOutcome::Unreachable);
    assert_eq!(result.stats.termination, Termination::FrontierExhausted);
    assert!(!result.is_goal_reached());
    assert!(matches!(
        result.into_plan(),
        Err(PlanError::NoPlanFound { expansions: 2 })
    ));
}

#[test]
fn already_satisfied_and_unreachable_are_distinct() {
    let catalog = ActionCatalog::new();
    let satisfied = plan(
        &kill_enemy(),
        WorldState::empty().with(fact(TARGET_DEAD), true),
        &catalog,
    );
    let unreachable = plan(&kill_enemy(), WorldState::empty(), &catalog);
    assert_ne!(satisfied.outcome, unreachable.outcome);
    assert_ne!(satisfied.outcome.tag(), unreachable.outcome.tag());
}

#[test]
fn high_fact_ids_plan_like_low_ones() {
    let (dead, armed) = (fact(63), fact(62));
    let goal = Goal::new("KillEnemy").with_condition(dead, true);
    let catalog = ActionCatalog::new()
        .with(Action::new("Equip", 1).with_effect(armed, true))
        .with(
            Action::new("Stab", 2)
                .with_precondition(armed, true)
                .with_effect(dead, true),
        );
    let found = plan(&goal, WorldState::empty(), &catalog).into_plan().unwrap();
    assert_eq!(found.names(), vec!["Equip", "Stab"]);
}
