//! `FactSet`: a partial valuation over the fact universe.
//!
//! Used for action preconditions, action effects and goal conditions. A fact
//! is constrained iff its bit is set in `mask`; its required (or written)
//! value is the matching bit of `values`. Bits of `values` outside `mask`
//! are always zero.

use crate::carrier::fact::Fact;

/// Partial valuation: a subset of facts, each with one boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FactSet {
    mask: u64,
    values: u64,
}

impl FactSet {
    /// The empty set (constrains nothing).
    #[must_use]
    pub const fn new() -> Self {
        Self { mask: 0, values: 0 }
    }

    /// Return a copy constraining `fact` to `value`.
    ///
    /// A fact that is already constrained is overwritten.
    #[must_use]
    pub const fn with(self, fact: Fact, value: bool) -> Self {
        let mask = self.mask | fact.mask();
        let values = if value {
            self.values | fact.mask()
        } else {
            self.values & !fact.mask()
        };
        Self { mask, values }
    }

    /// Constrain `fact` to `value` in place.
    pub fn insert(&mut self, fact: Fact, value: bool) {
        *self = self.with(fact, value);
    }

    /// Bits of every constrained fact.
    #[must_use]
    pub const fn mask(&self) -> u64 {
        self.mask
    }

    /// Required values (zero outside `mask`).
    #[must_use]
    pub const fn values(&self) -> u64 {
        self.values
    }

    /// The constrained value of `fact`, if any.
    #[must_use]
    pub const fn get(&self, fact: Fact) -> Option<bool> {
        if self.mask & fact.mask() == 0 {
            None
        } else {
            Some(self.values & fact.mask() != 0)
        }
    }

    /// Number of constrained facts.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Whether nothing is constrained.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Number of facts constrained by both sets.
    #[must_use]
    pub const fn overlap(&self, other: &Self) -> u32 {
        (self.mask & other.mask).count_ones()
    }

    /// Constrained `(fact, value)` pairs in ascending fact order.
    pub fn iter(&self) -> impl Iterator<Item = (Fact, bool)> + '_ {
        Fact::all().filter_map(move |fact| self.get(fact).map(|value| (fact, value)))
    }
}

impl FromIterator<(Fact, bool)> for FactSet {
    fn from_iter<I: IntoIterator<Item = (Fact, bool)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, (fact, value)| set.with(fact, value))
    }
}
