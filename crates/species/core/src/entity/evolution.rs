//! Evolution and mega-evolution edges.
//!
//! Edges are built by the catalog loader before any randomization runs and
//! refer to creatures by id only.

use super::SpeciesId;

/// How an evolution is triggered.
///
/// Carried as data; stat randomization only looks at the edge endpoints.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EvolutionMethod {
    #[default]
    Level,
    Stone,
    Trade,
    TradeItem,
    Happiness,
    HappinessDay,
    HappinessNight,
    LevelWithMove,
    LevelWithItemDay,
    LevelWithItemNight,
    LevelWithOther,
    LevelAttackHigher,
    LevelDefenseHigher,
    LevelAtkDefSame,
    LevelMale,
    LevelFemale,
    Location,
    Other,
}

/// `to` evolves from `from`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evolution {
    pub from: SpeciesId,
    pub to: SpeciesId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub method: EvolutionMethod,
    /// Level, item or move id depending on `method`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra_info: u16,
}

impl Evolution {
    pub const fn new(from: SpeciesId, to: SpeciesId) -> Self {
        Self {
            from,
            to,
            method: EvolutionMethod::Level,
            extra_info: 0,
        }
    }

    #[must_use]
    pub const fn with_method(mut self, method: EvolutionMethod, extra_info: u16) -> Self {
        self.method = method;
        self.extra_info = extra_info;
        self
    }
}

/// `to` is the battle-only mega form of `from`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MegaEvolution {
    pub from: SpeciesId,
    pub to: SpeciesId,
    /// Trigger kind as stored by the game data (mega stone, move, ...).
    #[cfg_attr(feature = "serde", serde(default))]
    pub method: u16,
    /// Item or move id for `method`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub argument: u16,
}

impl MegaEvolution {
    pub const fn new(from: SpeciesId, to: SpeciesId) -> Self {
        Self {
            from,
            to,
            method: 1,
            argument: 0,
        }
    }
}
