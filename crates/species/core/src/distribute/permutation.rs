//! Stat-slot permutations for the shuffle mode.
//!
//! A permutation is a plain value. The permutation last applied to each
//! creature is kept by the caller in a [`PermutationTable`], so families can
//! be brought onto one shared order in ancestor-first traversal.

use std::collections::HashMap;

use crate::entity::{BaseStats, SpeciesId};
use crate::rng::StatRng;

/// `order[i]` is the slot whose value moves into slot `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatPermutation([u8; 6]);

impl StatPermutation {
    pub const IDENTITY: Self = Self([0, 1, 2, 3, 4, 5]);

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns `None` unless `order` holds each slot in `0..6` exactly once.
    pub fn from_order(order: [u8; 6]) -> Option<Self> {
        let mut seen = [false; 6];
        for &slot in &order {
            let slot = usize::from(slot);
            if slot >= 6 || seen[slot] {
                return None;
            }
            seen[slot] = true;
        }
        Some(Self(order))
    }

    pub const fn order(&self) -> [u8; 6] {
        self.0
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Fisher-Yates over this order, from the last slot down.
    ///
    /// Five draws: `next_below(6)`, `next_below(5)`, ..., `next_below(2)`.
    #[must_use]
    pub fn shuffled(mut self, rng: &mut impl StatRng) -> Self {
        for i in (1..self.0.len()).rev() {
            let j = rng.next_below(i as u32 + 1) as usize;
            self.0.swap(i, j);
        }
        self
    }

    /// `new[i] = old[order[i]]`.
    pub fn apply(&self, stats: &BaseStats) -> BaseStats {
        let old = stats.to_slots();
        BaseStats::from_slots(self.0.map(|slot| old[usize::from(slot)]))
    }

    /// The permutation that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut inverse = [0u8; 6];
        for (position, &slot) in self.0.iter().enumerate() {
            inverse[usize::from(slot)] = position as u8;
        }
        Self(inverse)
    }

    /// Same relative order for Attack..Speed with HP left in place.
    ///
    /// The HP source is dropped from `order` and the remaining sources fill
    /// slots 1..6 in the order they appear. Already HP-fixed permutations are
    /// returned unchanged.
    #[must_use]
    pub fn with_hp_fixed(&self) -> Self {
        let mut order = [0u8; 6];
        let sources = self.0.iter().copied().filter(|&slot| slot != 0);
        for (target, source) in order[1..].iter_mut().zip(sources) {
            *target = source;
        }
        Self(order)
    }

    /// Applying the result equals applying `self`, then `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        Self(next.0.map(|slot| self.0[usize::from(slot)]))
    }
}

impl Default for StatPermutation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Last applied permutation per creature; identity when never shuffled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermutationTable {
    applied: HashMap<SpeciesId, StatPermutation>,
}

impl PermutationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: SpeciesId) -> StatPermutation {
        self.applied.get(&id).copied().unwrap_or_default()
    }

    pub fn set(&mut self, id: SpeciesId, permutation: StatPermutation) {
        if permutation.is_identity() {
            self.applied.remove(&id);
        } else {
            self.applied.insert(id, permutation);
        }
    }

    pub fn len(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}
