//! `Armory`: three facts, three actions, one obvious plan.
//!
//! Equip (1) → Load (1) → Shoot (4), total cost 6, from the empty state.

use goap_kernel::carrier::registry::FactRegistry;
use goap_kernel::carrier::world_state::WorldState;
use goap_kernel::goal::Goal;
use goap_kernel::operators::action::Action;
use goap_kernel::operators::catalog::ActionCatalog;

use crate::error::HarnessError;
use crate::scenario::Scenario;
use crate::worlds::ScenarioWorld;

/// Minimal kill-the-target world.
pub struct Armory;

impl ScenarioWorld for Armory {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "armory"
    }

    fn build(&self) -> Result<Scenario, HarnessError> {
        let mut registry = FactRegistry::new();
        let dead = registry.intern("TargetDead")?;
        let armed = registry.intern("Armed")?;
        let loaded = registry.intern("Loaded")?;

        let goal = Goal::new("KillEnemy").with_condition(dead, true);
        let catalog = ActionCatalog::new()
            .with(Action::new("Equip", 1).with_effect(armed, true))
            .with(
                Action::new("Load", 1)
                    .with_precondition(armed, true)
                    .with_effect(loaded, true),
            )
            .with(
                Action::new("Shoot", 4)
                    .with_precondition(armed, true)
                    .with_precondition(loaded, true)
                    .with_effect(dead, true),
            );

        Ok(Scenario::new(registry, WorldState::empty(), goal, catalog))
    }
}
