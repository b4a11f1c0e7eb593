//! `Fact`: identifier of one boolean proposition.
//!
//! The universe is closed and holds at most [`FACT_CAPACITY`] facts, one per
//! bit of a [`WorldState`](super::world_state::WorldState). The only fallible
//! step is construction; a `Fact` value is always in range.

use std::fmt;

use crate::error::ConfigurationError;

/// Maximum number of distinct facts (bits in a `u64`).
pub const FACT_CAPACITY: usize = 64;

/// A fact identifier in `0..FACT_CAPACITY`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fact(u8);

impl Fact {
    /// Construct from a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::FactOutOfRange`] if `index >= FACT_CAPACITY`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(index: usize) -> Result<Self, ConfigurationError> {
        if index >= FACT_CAPACITY {
            return Err(ConfigurationError::FactOutOfRange {
                index,
                capacity: FACT_CAPACITY,
            });
        }
        // In range, so the cast cannot truncate.
        Ok(Self(index as u8))
    }

    /// The raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Single-bit mask selecting this fact in a state word.
    #[must_use]
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }

    /// Every fact in ascending index order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn all() -> impl Iterator<Item = Self> {
        // 0..64 always fits in u8.
        (0..FACT_CAPACITY).map(|i| Self(i as u8))
    }
}

impl fmt::Debug for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fact({})", self.0)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl TryFrom<usize> for Fact {
    type Error = ConfigurationError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}
