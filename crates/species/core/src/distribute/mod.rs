//! Distribution/Propagation Engine - turning totals and weights into stats.
//!
//! - [`distribute`]: split a target total by weights, with a bounded
//!   correction loop for the share lost to clamping.
//! - [`within_total`]: re-split a creature's current total with plain
//!   uniform weights, rerolling anything that does not fit in a byte.
//! - [`StatPermutation`]: the shuffle mode.
//! - [`scaled_from`] / [`diffed_from`]: derive an evolution's stats from its
//!   ancestor's.

mod inherit;
mod permutation;

pub use inherit::{StatDiff, diffed_from, scaled_from};
pub use permutation::{PermutationTable, StatPermutation};

use tracing::{trace, warn};

use crate::entity::{BaseStats, Stat, round_half_up};
use crate::rng::StatRng;
use crate::weights::StatWeights;

/// Largest shortfall the correction loop accepts without another pass.
pub const CORRECTION_TOLERANCE: i32 = 10;

/// Correction passes before the residual is accepted as is.
pub const MAX_CORRECTION_PASSES: u32 = 5;

/// Whole-draw retries in [`within_total`] before clamping.
pub const MAX_REROLLS: u32 = 1_000;

/// HP of the HP-locked creature.
pub const LOCKED_HP: u8 = 1;

const CAP: i32 = BaseStats::MAX;

/// Split `total` across the six slots in proportion to `weights`.
///
/// Each stat is `max(floor, min(255, round(total·w/Σw)))`, with floor 20 for
/// HP and 10 elsewhere. For the HP-locked creature, HP is 1, the total is
/// first cut to `trunc(total·5/6)`, and only the other five slots share it.
///
/// While the realized sum falls more than [`CORRECTION_TOLERANCE`] short of
/// the target, the shortfall is spread again over the slots below 255 with
/// their original weights, at most [`MAX_CORRECTION_PASSES`] times. Any
/// residual left after that is accepted.
pub fn distribute(total: i32, weights: &StatWeights, hp_locked: bool) -> BaseStats {
    let (target, weights) = if hp_locked {
        ((f64::from(total) * (5.0 / 6.0)) as i32, weights.without_hp())
    } else {
        (total, *weights)
    };
    let shares = |stat: Stat| !(hp_locked && stat == Stat::Hp);

    let total_weight = weights.sum();
    let mut slots = [0i32; 6];
    for stat in Stat::ALL {
        slots[stat.index()] = if shares(stat) {
            let share = round_half_up(f64::from(target) * weights.get(stat) / total_weight);
            share.min(CAP).max(stat.distribution_floor())
        } else {
            i32::from(LOCKED_HP)
        };
    }

    let mut passes = 0;
    while target - slots.iter().sum::<i32>() > CORRECTION_TOLERANCE && passes < MAX_CORRECTION_PASSES
    {
        let diff = target - slots.iter().sum::<i32>();
        let open_weight = weights.sum_where(|stat| shares(stat) && slots[stat.index()] < CAP);
        if open_weight <= 0.0 {
            break;
        }

        for stat in Stat::ALL {
            let slot = &mut slots[stat.index()];
            if shares(stat) && *slot < CAP {
                let raised = f64::from(*slot) + weights.get(stat) / open_weight * f64::from(diff);
                *slot = round_half_up(raised).min(CAP);
            }
        }

        passes += 1;
        trace!(pass = passes, diff, "redistributed stat shortfall");
    }

    BaseStats::from_slots(slots)
}

/// Re-split `current_total` with fresh uniform weights.
///
/// Floors are taken off the total first (20 for HP and 10 for each other
/// stat; for the HP-locked creature HP is 1 and 51 comes off). Each slot gets
/// `max(1, round(w/Σw · rest)) + floor`. A draw that pushes any stat past 255
/// is discarded and the whole weight vector is redrawn against the same
/// total. After [`MAX_REROLLS`] the last draw is clamped.
///
/// Draws per attempt: six doubles in slot order, or five (Attack..Speed)
/// for the HP-locked creature.
pub fn within_total(current_total: i32, rng: &mut impl StatRng, hp_locked: bool) -> BaseStats {
    let floors: i32 = if hp_locked {
        i32::from(LOCKED_HP) + 5 * 10
    } else {
        Stat::ALL.iter().map(|stat| stat.distribution_floor()).sum()
    };
    let rest = f64::from(current_total - floors);

    let mut attempts = 0;
    loop {
        let weights = if hp_locked {
            StatWeights::uniform_without_hp(rng)
        } else {
            StatWeights::uniform(rng)
        };
        let total_weight = weights.sum();

        let mut slots = [0i32; 6];
        for stat in Stat::ALL {
            slots[stat.index()] = if hp_locked && stat == Stat::Hp {
                i32::from(LOCKED_HP)
            } else {
                round_half_up(weights.get(stat) / total_weight * rest).max(1)
                    + stat.distribution_floor()
            };
        }

        attempts += 1;
        if slots.iter().all(|&slot| slot <= CAP) {
            return BaseStats::from_slots(slots);
        }
        if attempts >= MAX_REROLLS {
            warn!(current_total, attempts, "stats still exceed 255 after rerolls, clamping");
            return BaseStats::from_slots(slots);
        }
        trace!(attempt = attempts, "stat over 255, rerolling");
    }
}
