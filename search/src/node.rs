//! Search node and path arena.
//!
//! A [`SearchNode`] is what sits in the frontier: a state plus its costs.
//! The action sequence leading to it is not copied into every node; each
//! node instead owns a slot in the [`PathArena`] recording its parent slot
//! and the action that produced it. The ordered plan for a node is rebuilt
//! by walking that chain back to the root.

use goap_kernel::carrier::world_state::WorldState;
use goap_kernel::operators::action::Action;

use crate::frontier::Prioritized;

/// A frontier entry.
///
/// Many nodes may hold the same `state` via different paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    /// Slot in the [`PathArena`].
    pub node_id: u64,
    /// State reached by this node's path.
    pub state: WorldState,
    /// Number of actions on the path (root = 0).
    pub depth: u32,
    /// Accumulated action cost.
    pub g_cost: u64,
    /// Goal distance of `state`.
    pub h_cost: u64,
}

impl SearchNode {
    /// `f = g + h`, the frontier ordering key.
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

impl Prioritized for SearchNode {
    fn priority(&self) -> u64 {
        self.f_cost()
    }
}

#[derive(Debug, Clone, Copy)]
struct PathLink<'a> {
    parent: Option<u64>,
    action: Option<&'a Action>,
}

/// Append-only store of `(parent, producing action)` links.
///
/// Borrows actions from the catalog for `'a`; never clones them.
#[derive(Debug, Default)]
pub struct PathArena<'a> {
    links: Vec<PathLink<'a>>,
}

impl<'a> PathArena<'a> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Record the root slot.
    pub fn push_root(&mut self) -> u64 {
        self.push(None, None)
    }

    /// Record a child of `parent` produced by `action`.
    pub fn push_child(&mut self, parent: u64, action: &'a Action) -> u64 {
        self.push(Some(parent), Some(action))
    }

    fn push(&mut self, parent: Option<u64>, action: Option<&'a Action>) -> u64 {
        let id = self.links.len() as u64;
        self.links.push(PathLink { parent, action });
        id
    }

    /// Number of recorded slots (nodes ever generated, root included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The actions from the root to `node_id`, in execution order.
    ///
    /// Unknown ids yield an empty path.
    #[must_use]
    pub fn actions_to(&self, node_id: u64) -> Vec<&'a Action> {
        let mut path = Vec::new();
        let mut current = Some(node_id);

        while let Some(id) = current {
            let Some(link) = usize::try_from(id).ok().and_then(|i| self.links.get(i)) else {
                break;
            };
            if let Some(action) = link.action {
                path.push(action);
            }
            current = link.parent;
        }

        path.reverse();
        path
    }
}
