//! `Shooter`: the 27-fact, 33-action combat world.
//!
//! Starts with stamina, a radio and pistol ammo; the goal is a dead target.
//! Several weapon, vehicle and support chains compete. The cheapest plans
//! cost 5 (arm, reload, quick shot).
//!
//! The data lives in `shooter.json` and goes through the same loader as
//! user scenario files.

use crate::config::ScenarioConfig;
use crate::error::HarnessError;
use crate::scenario::Scenario;
use crate::worlds::ScenarioWorld;

const SHOOTER_JSON: &str = include_str!("shooter.json");

/// Combat world with competing weapon, vehicle and support chains.
pub struct Shooter;

impl ScenarioWorld for Shooter {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "shooter"
    }

    fn build(&self) -> Result<Scenario, HarnessError> {
        ScenarioConfig::from_json(SHOOTER_JSON)?.compile()
    }
}
