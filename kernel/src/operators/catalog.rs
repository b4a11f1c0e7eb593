//! `ActionCatalog`: the caller-owned set of actions available to a plan call.
//!
//! The catalog owns every [`Action`] for at least as long as any plan that
//! borrows from it. Callers that need to vary costs between plan calls
//! (for example to explore alternative plans) derive an independent copy
//! with [`ActionCatalog::map_costs`]; a catalog is never mutated while a
//! plan borrows it.

use crate::operators::action::{Action, Cost};

/// Ordered collection of actions. Expansion visits actions in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionCatalog {
    actions: Vec<Action>,
}

impl ActionCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action.
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Builder-style append.
    #[must_use]
    pub fn with(mut self, action: Action) -> Self {
        self.push(action);
        self
    }

    /// All actions in catalog order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Iterate actions in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    /// First action with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name() == name)
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Independent copy with every cost replaced by `f(action)`.
    #[must_use]
    pub fn map_costs(&self, mut f: impl FnMut(&Action) -> Cost) -> Self {
        Self {
            actions: self.actions.iter().map(|a| a.with_cost(f(a))).collect(),
        }
    }
}

impl From<Vec<Action>> for ActionCatalog {
    fn from(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}

impl FromIterator<Action> for ActionCatalog {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ActionCatalog {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
