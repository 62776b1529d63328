//! Base-stat randomization for creature families.
//!
//! `species-core` assigns the six base stats of a creature under
//! randomization while respecting its evolutionary family: evolved forms stay
//! no weaker than their pre-evolutions, mega and alternate forms derive from
//! their base, and totals follow an empirical log-shaped curve.
//!
//! All records live in a [`Dex`]; the entry points in [`randomize`] mutate a
//! single creature's stats per call. Randomness is always an explicit
//! [`StatRng`] argument, so a fixed seed and call order give a fixed result.
pub mod bst;
pub mod config;
pub mod dex;
pub mod distribute;
pub mod entity;
pub mod error;
pub mod family;
pub mod randomize;
pub mod rng;
pub mod weights;

pub use bst::{LogNormParams, MidChainBounds, TotalSource, generate_log_norm_bst};
pub use config::StatsConfig;
pub use dex::Dex;
pub use distribute::{PermutationTable, StatDiff, StatPermutation, distribute};
pub use entity::{
    BaseStats, Creature, Evolution, EvolutionMethod, ExpCurve, HeldItems, MegaEvolution,
    SpeciesId, Stat, Type,
};
pub use error::{DexError, DexResult, ErrorSeverity};
pub use family::{Direction, FamilyDepths};
pub use rng::{JavaRandom, Pcg32, SeedableRng, StatRng, compute_seed};
pub use weights::{RoleWeights, StatWeights, stat_ratio};
