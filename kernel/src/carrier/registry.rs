//! `FactRegistry`: name ↔ [`Fact`] interning for the closed universe.
//!
//! Configuration code refers to facts by name ("WeaponArmed"); the planner
//! only ever sees [`Fact`] ids. Ids are allocated densely in first-seen order
//! and never reused. The 65th distinct name is a configuration error.

use std::collections::BTreeMap;

use crate::carrier::fact::{Fact, FACT_CAPACITY};
use crate::carrier::world_state::WorldState;
use crate::error::ConfigurationError;

/// Bijection between fact names and fact ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactRegistry {
    /// `names[i]` is the name of `Fact(i)`.
    names: Vec<String>,
    by_name: BTreeMap<String, Fact>,
}

impl FactRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from names in id order.
    ///
    /// Duplicate names keep their first id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::CapacityExceeded`] if more than
    /// [`FACT_CAPACITY`] distinct names are supplied.
    pub fn from_names<I, S>(names: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.intern(name.as_ref())?;
        }
        Ok(registry)
    }

    /// Return the fact for `name`, allocating the next id if it is new.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::CapacityExceeded`] when `name` is new and
    /// the registry is full.
    pub fn intern(&mut self, name: &str) -> Result<Fact, ConfigurationError> {
        if let Some(fact) = self.by_name.get(name) {
            return Ok(*fact);
        }
        if self.names.len() >= FACT_CAPACITY {
            return Err(ConfigurationError::CapacityExceeded {
                name: name.to_string(),
                capacity: FACT_CAPACITY,
            });
        }
        let fact = Fact::new(self.names.len())?;
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), fact);
        Ok(fact)
    }

    /// Look up a registered name.
    #[must_use]
    pub fn fact(&self, name: &str) -> Option<Fact> {
        self.by_name.get(name).copied()
    }

    /// Name of a registered fact.
    #[must_use]
    pub fn name(&self, fact: Fact) -> Option<&str> {
        self.names.get(fact.index()).map(String::as_str)
    }

    /// Registered names in id order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of registered facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no fact is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names of the facts that are true in `state`, ascending by id.
    ///
    /// True facts with no registered name render as `#<id>`.
    #[must_use]
    pub fn describe(&self, state: WorldState) -> Vec<String> {
        state
            .true_facts()
            .map(|fact| {
                self.name(fact)
                    .map_or_else(|| fact.to_string(), str::to_string)
            })
            .collect()
    }
}
