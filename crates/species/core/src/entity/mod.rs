//! Creature records and their evolutionary relationships.
//!
//! Pure data plus derived queries. Anything that needs to follow a link to
//! another creature lives on [`Dex`](crate::Dex).

mod creature;
mod evolution;
pub mod species;
mod stats;

use std::fmt;

pub use creature::{Creature, ExpCurve, HeldItems, Type};
pub use evolution::{Evolution, EvolutionMethod, MegaEvolution};
pub(crate) use stats::clamp_u8;
pub use stats::{BaseStats, Stat, round_half_up};

/// Unique identifier of a species or alternate form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpeciesId(pub u16);

impl SpeciesId {
    /// The creature whose HP is pinned to 1.
    pub const SHEDINJA: Self = species::SHEDINJA;
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
