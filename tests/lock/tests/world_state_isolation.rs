//! Writing one fact never disturbs any other fact, and effect application is
//! a pure function of (state, action).

use goap_kernel::carrier::fact::{Fact, FACT_CAPACITY};
use goap_kernel::carrier::world_state::WorldState;
use goap_kernel::operators::action::Action;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn every_fact_write_is_isolated() {
    let mut rng = StdRng::seed_from_u64(64);

    for _ in 0..64 {
        let state = WorldState::from_bits(rng.gen());
        for fact in Fact::all() {
            for value in [false, true] {
                let written = state.with(fact, value);
                assert_eq!(written.read(fact), value);
                for other in Fact::all().filter(|&o| o != fact) {
                    assert_eq!(written.read(other), state.read(other));
                }
            }
        }
    }
    assert_eq!(Fact::all().count(), FACT_CAPACITY);
}

#[test]
fn fact_beyond_capacity_is_rejected() {
    assert!(Fact::new(FACT_CAPACITY - 1).is_ok());
    assert!(Fact::new(FACT_CAPACITY).is_err());
}

#[test]
fn apply_effects_is_deterministic_and_pure() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..200 {
        let mut action = Action::new("random", 1);
        for fact in Fact::all() {
            if rng.gen_bool(0.1) {
                action = action.with_effect(fact, rng.gen_bool(0.5));
            }
        }
        let state = WorldState::from_bits(rng.gen());
        let snapshot = state;

        let a = action.apply_effects(state);
        let b = action.apply_effects(state);
        assert_eq!(a, b);
        assert_eq!(state, snapshot);

        for fact in Fact::all() {
            match action.effects().get(fact) {
                Some(value) => assert_eq!(a.read(fact), value),
                None => assert_eq!(a.read(fact), state.read(fact)),
            }
        }
    }
}
