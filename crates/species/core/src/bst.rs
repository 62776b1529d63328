//! Total (BST) Generator - target stat totals for one creature.
//!
//! A total either comes from a global distribution or is derived from a
//! related creature. [`TotalSource`] names which, and is decided from the
//! evolution graph by [`Dex::total_source`](crate::Dex::total_source);
//! [`pick_total`] turns it into a number.
//!
//! # Draws
//!
//! | source | draws |
//! |---|---|
//! | `Unconstrained`, `FullyEvolved` | one gaussian |
//! | `Mega` | one `next_below(151)` |
//! | `AlternateForm` | none |
//! | `MidChain` | one `next_below` |
//!
//! [`boss_total`] draws one `next_below`.

use tracing::warn;

use crate::config::StatsConfig;
use crate::entity::round_half_up;
use crate::rng::StatRng;

/// Largest bonus a mega form gets on top of its base form's total.
pub const MEGA_BONUS_MAX: u32 = 150;

/// Calibration of the log-shaped total distribution.
///
/// A quantile transform anchored at `minimum` (never returned below), the
/// `median`, and a `high_value` that a standard normal draw reaches at
/// `z_score`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogNormParams {
    pub minimum: i32,
    pub median: i32,
    pub high_value: i32,
    pub z_score: f64,
}

impl LogNormParams {
    /// Fitted to the vanilla total distribution. 2.1701 is the 1.5% tail.
    pub const FOLLOW_EVOLUTIONS: Self = Self {
        minimum: 300,
        median: 500,
        high_value: 700,
        z_score: 2.1701,
    };

    /// Wider curve for totals with no evolution ordering. 2.5758 is the 0.5% tail.
    pub const INDEPENDENT: Self = Self {
        minimum: 150,
        median: 450,
        high_value: 700,
        z_score: 2.5758,
    };

    pub const fn for_follow_evolutions(follow_evolutions: bool) -> Self {
        if follow_evolutions {
            Self::FOLLOW_EVOLUTIONS
        } else {
            Self::INDEPENDENT
        }
    }

    /// Total at standard-normal quantile `norm`.
    ///
    /// `round(min + (median−min)·((high−min)/(median−min))^(norm/z))`
    pub fn quantile(&self, norm: f64) -> i32 {
        let min = f64::from(self.minimum);
        let span = f64::from(self.median) - min;
        let base = (f64::from(self.high_value) - min) / span;
        round_half_up(min + span * base.powf(norm / self.z_score))
    }
}

/// Draw an unconstrained total.
pub fn generate_log_norm_bst(rng: &mut impl StatRng, follow_evolutions: bool) -> i32 {
    let norm = rng.next_gaussian();
    LogNormParams::for_follow_evolutions(follow_evolutions).quantile(norm)
}

/// Where a creature's new total comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TotalSource {
    /// Totals do not follow evolutions; sample freely.
    Unconstrained,
    /// Mega form: base form's total plus a bonus.
    Mega { base_total: i32 },
    /// Alternate form: exactly the base form's total.
    AlternateForm { base_total: i32 },
    /// No further evolutions; sample freely.
    FullyEvolved,
    /// Has evolutions; stay below the weakest of them.
    MidChain {
        /// Smallest total among direct evolutions.
        next_stage_min: i32,
        /// Depth toward the terminal evolution.
        depth: u32,
    },
}

/// Sampling window for a creature that still evolves.
///
/// The gap between 180 and the capped next-stage total is cut into `steps`
/// (remaining chain length + 2). The midpoint sits `steps - 1` steps up, and
/// the window spans 5/6 of the remaining gap on either side of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MidChainBounds {
    pub steps: i32,
    pub max_possible: i32,
    pub min_possible: i32,
    pub step_size: i32,
    pub midpoint: i32,
    pub range: i32,
}

impl MidChainBounds {
    pub const MIN_POSSIBLE: i32 = 180;
    pub const MAX_POSSIBLE: i32 = 600;

    /// Integer arithmetic truncates toward zero at every step.
    pub fn new(next_stage_min: i32, depth: u32) -> Self {
        let steps = depth as i32 + 2;
        let max_possible = next_stage_min.min(Self::MAX_POSSIBLE);
        let min_possible = Self::MIN_POSSIBLE;
        let step_size = (max_possible - min_possible) / steps;
        let midpoint = min_possible + (steps - 1) * step_size;
        let range = ((max_possible - midpoint) * 5) / 6;

        Self {
            steps,
            max_possible,
            min_possible,
            step_size,
            midpoint,
            range,
        }
    }

    pub const fn lower_bound(&self) -> i32 {
        self.midpoint - self.range
    }

    pub const fn upper_bound(&self) -> i32 {
        self.midpoint + self.range
    }

    /// `lower + uniform[0, max(upper−lower, 1))`.
    pub fn sample(&self, rng: &mut impl StatRng) -> i32 {
        let width = (self.upper_bound() - self.lower_bound()).max(1);
        self.lower_bound() + rng.next_below(width as u32) as i32
    }
}

/// Lowest mid-chain total that passes without a warning.
const LOW_TOTAL_WARNING: i32 = 120;

/// Turn a [`TotalSource`] into a target total.
pub fn pick_total(rng: &mut impl StatRng, source: TotalSource, config: &StatsConfig) -> i32 {
    match source {
        TotalSource::Unconstrained | TotalSource::FullyEvolved => {
            generate_log_norm_bst(rng, config.follow_evolutions)
        }
        TotalSource::Mega { base_total } => {
            base_total + rng.next_below(MEGA_BONUS_MAX + 1) as i32
        }
        TotalSource::AlternateForm { base_total } => base_total,
        TotalSource::MidChain {
            next_stage_min,
            depth,
        } => {
            let bounds = MidChainBounds::new(next_stage_min, depth);
            let total = bounds.sample(rng);
            if total < LOW_TOTAL_WARNING {
                warn!(total, ?bounds, "mid-chain total unusually low");
            }
            total
        }
    }
}

/// Uniform total in `[boss_min_total, boss_max_total]`.
pub fn boss_total(rng: &mut impl StatRng, config: &StatsConfig) -> i32 {
    let min = u32::from(config.boss_min_total);
    let max = u32::from(config.boss_max_total).max(min);
    (min + rng.next_below(max - min + 1)) as i32
}
