//! Scenario files: JSON → [`Scenario`].
//!
//! # Format
//!
//! ```json
//! {
//!   "facts": ["TargetDead", "Armed", "Loaded"],
//!   "initial": { "Armed": false },
//!   "goal": { "name": "KillEnemy", "conditions": { "TargetDead": true } },
//!   "actions": [
//!     { "name": "Equip", "cost": 1, "preconditions": {}, "effects": { "Armed": true } }
//!   ]
//! }
//! ```
//!
//! `facts` fixes the id order up front. Any other name is interned on first
//! use, walking `initial`, then `goal`, then `actions` in file order; names
//! inside one object are visited in sorted order. Unknown fields are rejected.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use goap_kernel::carrier::fact_set::FactSet;
use goap_kernel::carrier::registry::FactRegistry;
use goap_kernel::carrier::world_state::WorldState;
use goap_kernel::goal::Goal;
use goap_kernel::operators::action::{Action, Cost};
use goap_kernel::operators::catalog::ActionCatalog;
use tracing::info;

use crate::error::HarnessError;
use crate::scenario::Scenario;

/// Fact name → required or assigned value.
pub type Valuation = BTreeMap<String, bool>;

/// Top-level scenario document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub facts: Vec<String>,
    #[serde(default)]
    pub initial: Valuation,
    pub goal: GoalConfig,
    #[serde(default)]
    pub actions: Vec<ActionConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoalConfig {
    pub name: String,
    #[serde(default)]
    pub conditions: Valuation,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionConfig {
    pub name: String,
    pub cost: Cost,
    #[serde(default)]
    pub preconditions: Valuation,
    #[serde(default)]
    pub effects: Valuation,
}

impl ScenarioConfig {
    /// Parse a scenario document.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Config`] on malformed JSON, a wrong value type, or an
    /// unknown field.
    pub fn from_json(text: &str) -> Result<Self, HarnessError> {
        serde_json::from_str(text).map_err(|e| HarnessError::Config {
            detail: format!("parse: {e}"),
        })
    }

    /// Read and parse a scenario file.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Io`] if the file cannot be read, otherwise as
    /// [`ScenarioConfig::from_json`].
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let text = std::fs::read_to_string(path).map_err(|e| HarnessError::Io {
            detail: format!("read {}: {e}", path.display()),
        })?;
        Self::from_json(&text)
    }

    /// Intern every name and build the kernel types.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Config`] when more than 64 distinct fact names appear.
    pub fn compile(&self) -> Result<Scenario, HarnessError> {
        let mut registry = FactRegistry::from_names(&self.facts)?;

        let initial_facts = intern_all(&mut registry, &self.initial)?;
        let initial = WorldState::from_facts(initial_facts.iter());

        let mut goal = Goal::new(self.goal.name.clone());
        for (fact, value) in intern_all(&mut registry, &self.goal.conditions)?.iter() {
            goal = goal.with_condition(fact, value);
        }

        let mut catalog = ActionCatalog::new();
        for entry in &self.actions {
            let mut action = Action::new(entry.name.clone(), entry.cost);
            for (fact, value) in intern_all(&mut registry, &entry.preconditions)?.iter() {
                action = action.with_precondition(fact, value);
            }
            for (fact, value) in intern_all(&mut registry, &entry.effects)?.iter() {
                action = action.with_effect(fact, value);
            }
            catalog.push(action);
        }

        info!(
            goal = goal.name(),
            facts = registry.len(),
            actions = catalog.len(),
            "scenario compiled"
        );

        Ok(Scenario::new(registry, initial, goal, catalog))
    }
}

/// Read, parse and compile a scenario file.
///
/// # Errors
///
/// See [`ScenarioConfig::load`] and [`ScenarioConfig::compile`].
pub fn load_scenario(path: &Path) -> Result<Scenario, HarnessError> {
    ScenarioConfig::load(path)?.compile()
}

fn intern_all(registry: &mut FactRegistry, valuation: &Valuation) -> Result<FactSet, HarnessError> {
    let mut set = FactSet::new();
    for (name, value) in valuation {
        set.insert(registry.intern(name)?, *value);
    }
    Ok(set)
}
