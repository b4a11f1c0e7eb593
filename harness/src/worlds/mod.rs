//! Built-in scenarios.
//!
//! Worlds provide domain data only; planning and execution belong to the
//! runner.

use crate::error::HarnessError;
use crate::scenario::Scenario;

pub mod armory;
pub mod shooter;

/// A named, reproducible scenario source.
pub trait ScenarioWorld {
    /// Stable identifier used by the binary and in logs.
    fn world_id(&self) -> &str;

    /// Build a fresh scenario.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Config`] if the world's data violates the fact
    /// universe.
    fn build(&self) -> Result<Scenario, HarnessError>;
}

/// Look up a built-in world by id.
#[must_use]
pub fn by_id(world_id: &str) -> Option<Box<dyn ScenarioWorld>> {
    match world_id {
        "armory" => Some(Box::new(armory::Armory)),
        "shooter" => Some(Box::new(shooter::Shooter)),
        _ => None,
    }
}
