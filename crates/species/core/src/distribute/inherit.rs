//! Deriving an evolution's stats from its ancestor's.

use super::LOCKED_HP;
use crate::entity::{BaseStats, Stat, round_half_up};
use crate::rng::StatRng;
use crate::weights::StatWeights;

const MIN_STAT: i32 = 1;

/// Rescale the ancestor's stats to `own_total`, keeping their shape.
///
/// Each stat is `clamp(round(ancestor · own_total / ancestor_total), 1, 255)`,
/// so equal totals reproduce the ancestor exactly.
///
/// For an HP-locked creature HP is pinned to [`LOCKED_HP`] and the other five
/// stats are rescaled from the ancestor's five to `own_total - 1`.
pub fn scaled_from(ancestor: &BaseStats, own_total: i32, hp_locked: bool) -> BaseStats {
    let (own, theirs) = if hp_locked {
        (
            own_total - i32::from(LOCKED_HP),
            ancestor.total() - i32::from(ancestor.hp),
        )
    } else {
        (own_total, ancestor.total())
    };
    let ratio = f64::from(own) / f64::from(theirs);

    let base = ancestor.to_slots();
    let slots = Stat::ALL.map(|stat| {
        if hp_locked && stat == Stat::Hp {
            i32::from(LOCKED_HP)
        } else {
            round_half_up(f64::from(base[stat.index()]) * ratio).clamp(MIN_STAT, BaseStats::MAX)
        }
    });
    BaseStats::from_slots(slots)
}

/// Signed per-slot change applied on top of an ancestor's stats, before
/// clamping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatDiff(pub [i32; 6]);

impl StatDiff {
    pub const fn get(&self, stat: Stat) -> i32 {
        self.0[stat as usize]
    }

    pub fn total(&self) -> i32 {
        self.0.iter().sum()
    }
}

/// Split the total difference between creature and ancestor by fresh
/// uniform weights and add each share to the ancestor's stat.
///
/// Six draws in slot order. Results are clamped to `[1, 255]`; the returned
/// [`StatDiff`] holds the unclamped, rounded shares.
///
/// For an HP-locked creature only five draws are made (Attack..Speed), HP is
/// pinned to [`LOCKED_HP`], and the HP slot of the diff records the change to
/// it, so the diff still accounts for the whole total difference.
pub fn diffed_from(
    ancestor: &BaseStats,
    own_total: i32,
    rng: &mut impl StatRng,
    hp_locked: bool,
) -> (BaseStats, StatDiff) {
    let base = ancestor.to_slots();
    let hp_change = if hp_locked {
        i32::from(LOCKED_HP) - base[Stat::Hp.index()]
    } else {
        0
    };
    let total_diff = f64::from(own_total - ancestor.total() - hp_change);
    let weights = if hp_locked {
        StatWeights::uniform_without_hp(rng)
    } else {
        StatWeights::uniform(rng)
    };
    let total_weight = weights.sum();

    let diff = StatDiff(Stat::ALL.map(|stat| {
        if hp_locked && stat == Stat::Hp {
            hp_change
        } else {
            round_half_up(weights.get(stat) / total_weight * total_diff)
        }
    }));

    let slots = Stat::ALL.map(|stat| {
        (base[stat.index()] + diff.get(stat)).clamp(MIN_STAT, BaseStats::MAX)
    });

    (BaseStats::from_slots(slots), diff)
}
