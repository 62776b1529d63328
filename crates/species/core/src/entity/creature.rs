//! Creature records.

use std::hash::{Hash, Hasher};

use super::species::{SHEDINJA, ULTRA_BEASTS};
use super::{BaseStats, Evolution, MegaEvolution, SpeciesId};

/// Elemental type.
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
pub enum Type {
    #[default]
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

/// Experience growth curve.
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
pub enum ExpCurve {
    Slow,
    #[default]
    MediumFast,
    MediumSlow,
    Fast,
    Erratic,
    Fluctuating,
}

/// Held-item slots as stored by the game data (item ids, 0 = none).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeldItems {
    pub guaranteed: u16,
    pub common: u16,
    pub rare: u16,
    pub dark_grass: u16,
}

/// A single species or alternate form.
///
/// Links to other creatures (`base_forme`, evolution edges) are ids resolved
/// through the owning [`Dex`](crate::Dex); a creature never owns another.
///
/// Equality and hashing go by `id` only.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Creature {
    pub id: SpeciesId,
    pub name: String,

    // ----- forme bookkeeping -----
    pub forme_suffix: String,
    /// Base form this record is an alternate form of.
    pub base_forme: Option<SpeciesId>,
    /// 0 for base forms.
    pub forme_number: u16,
    pub cosmetic_forms: u16,
    pub forme_sprite_index: u16,
    pub actually_cosmetic: bool,
    pub real_cosmetic_form_numbers: Vec<u16>,

    // ----- flat species data -----
    pub primary_type: Type,
    pub secondary_type: Option<Type>,
    pub abilities: [u16; 3],
    pub catch_rate: u8,
    pub exp_yield: u16,
    pub held_items: HeldItems,
    pub gender_ratio: u8,
    pub call_rate: u8,
    pub growth_curve: ExpCurve,

    pub stats: BaseStats,

    // ----- graph edges, filled by the dex -----
    /// Evolutions out of this creature (`self` is `from`).
    #[cfg_attr(feature = "serde", serde(skip))]
    pub evolutions_from: Vec<Evolution>,
    /// Evolutions into this creature (`self` is `to`).
    #[cfg_attr(feature = "serde", serde(skip))]
    pub evolutions_to: Vec<Evolution>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub mega_evolutions_from: Vec<MegaEvolution>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub mega_evolutions_to: Vec<MegaEvolution>,
}

impl Creature {
    pub fn new(id: SpeciesId, name: impl Into<String>, stats: BaseStats) -> Self {
        Self {
            id,
            name: name.into(),
            stats,
            ..Self::default()
        }
    }

    /// Builder helper for alternate forms.
    #[must_use]
    pub fn with_base_forme(mut self, base: SpeciesId, forme_number: u16, suffix: &str) -> Self {
        self.base_forme = Some(base);
        self.forme_number = forme_number;
        self.forme_suffix = suffix.to_owned();
        self
    }

    pub fn full_name(&self) -> String {
        format!("{}{}", self.name, self.forme_suffix)
    }

    pub fn sprite_index(&self) -> u16 {
        if self.forme_number == 0 {
            self.id.0
        } else {
            self.forme_sprite_index.saturating_add(self.forme_number - 1)
        }
    }

    /// Maps a cosmetic form slot to the form number the game actually uses.
    pub fn cosmetic_form_number(&self, slot: u16) -> u16 {
        self.real_cosmetic_form_numbers
            .get(usize::from(slot))
            .copied()
            .unwrap_or(slot)
    }

    pub fn bst(&self) -> i32 {
        self.stats.total()
    }

    /// BST adjusted for the HP-locked creature, for comparing strength.
    pub fn bst_for_power_levels(&self) -> i32 {
        self.stats.power_total(self.is_hp_locked())
    }

    /// True for the one creature whose HP is always 1.
    pub fn is_hp_locked(&self) -> bool {
        self.id == SHEDINJA
    }

    /// Only meaningful where alternate forms are not involved; an alternate
    /// form's own id can collide with an ultra beast's number.
    pub fn is_ultra_beast(&self) -> bool {
        ULTRA_BEASTS.contains(&self.id)
    }

    pub fn is_alternate_forme(&self) -> bool {
        self.base_forme.is_some()
    }

    pub fn is_fully_evolved(&self) -> bool {
        self.evolutions_from.is_empty()
    }
}

impl PartialEq for Creature {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Creature {}

impl Hash for Creature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
