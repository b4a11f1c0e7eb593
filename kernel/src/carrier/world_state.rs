//! `WorldState`: dense boolean valuation over the closed fact universe.
//!
//! # Layout
//!
//! One `u64`. Bit `i` holds the value of `Fact(i)`; facts never written are
//! false. The all-false word is the empty state.
//!
//! # Equality semantics
//!
//! Equality and hashing are exact valuation equality (the whole word). The
//! type is `Copy`, so "modifying" a state always produces a new value and
//! no holder can observe another holder's writes.

use std::fmt;

use crate::carrier::fact::Fact;
use crate::carrier::fact_set::FactSet;

/// Full valuation of every fact at one point in time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WorldState {
    bits: u64,
}

impl WorldState {
    /// The state in which every fact is false.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Construct from a raw bit word.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// The raw bit word.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Build a state from `(fact, value)` pairs, later pairs overwriting earlier ones.
    #[must_use]
    pub fn from_facts(facts: impl IntoIterator<Item = (Fact, bool)>) -> Self {
        facts
            .into_iter()
            .fold(Self::empty(), |state, (fact, value)| state.with(fact, value))
    }

    /// Read one fact.
    #[must_use]
    pub const fn read(self, fact: Fact) -> bool {
        self.bits & fact.mask() != 0
    }

    /// Return a copy with `fact` set to `value`; every other fact is unchanged.
    #[must_use]
    pub const fn with(self, fact: Fact, value: bool) -> Self {
        let bits = if value {
            self.bits | fact.mask()
        } else {
            self.bits & !fact.mask()
        };
        Self { bits }
    }

    /// Return a copy with every fact constrained by `set` overwritten.
    #[must_use]
    pub const fn apply(self, set: &FactSet) -> Self {
        Self {
            bits: (self.bits & !set.mask()) | set.values(),
        }
    }

    /// Whether every fact constrained by `set` has the required value.
    #[must_use]
    pub const fn satisfies(self, set: &FactSet) -> bool {
        self.bits & set.mask() == set.values()
    }

    /// Number of facts constrained by `set` whose value differs here.
    #[must_use]
    pub const fn mismatches(self, set: &FactSet) -> u32 {
        ((self.bits ^ set.values()) & set.mask()).count_ones()
    }

    /// Facts that are true, ascending.
    pub fn true_facts(self) -> impl Iterator<Item = Fact> {
        Fact::all().filter(move |fact| self.read(*fact))
    }
}

impl fmt::Debug for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WorldState({:#018x})", self.bits)
    }
}

/// Diagnostic bit pattern, fact 63 first, grouped in bytes.
impl fmt::Display for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..64).rev() {
            let bit = (self.bits >> i) & 1;
            write!(f, "{bit}")?;
            if i % 8 == 0 && i > 0 {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}
