//! Weighting Engine - splits of a stat total across the six slots.
//!
//! Weights are relative shares. They are strictly positive (or exactly zero
//! for a slot that is excluded) but not individually bounded; consumers divide
//! by [`StatWeights::sum`] before use.
//!
//! Draw order is part of each constructor's contract:
//! - [`StatWeights::uniform`]: HP, Attack, Defense, SpAtk, SpDef, Speed
//! - [`StatWeights::uniform_without_hp`]: Attack, Defense, SpAtk, SpDef, Speed
//! - [`RoleWeights::draw`]: role modifier, then Attack, Defense, SpAtk, SpDef,
//!   Speed, HP

use std::f64::consts::PI;

use crate::entity::Stat;
use crate::rng::StatRng;

/// Ratio between the largest and smallest possible single weight.
pub const MAX_RATIO: f64 = 15.0;

/// One role-skewed weight.
///
/// `x + 1/(MAX_RATIO-1) + (1/2π)(2·role−1)·sin(2πx)` for a fresh uniform `x`.
/// With `role_modifier` near 0 the curve flattens low draws and exaggerates
/// high ones (specialists); near 1 it pulls draws toward the middle
/// (generalists). The sine term never outweighs the linear one, so the result
/// is always positive.
pub fn stat_ratio(rng: &mut impl StatRng, role_modifier: f64) -> f64 {
    let x = rng.next_f64();
    let offset = 1.0 / (MAX_RATIO - 1.0);
    (1.0 / (2.0 * PI)) * (2.0 * role_modifier - 1.0) * (2.0 * PI * x).sin() + x + offset
}

/// Relative shares in slot order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatWeights([f64; 6]);

impl StatWeights {
    pub const fn from_slots(slots: [f64; 6]) -> Self {
        Self(slots)
    }

    /// All six slots weighted equally.
    pub const fn even() -> Self {
        Self([1.0; 6])
    }

    /// Six independent uniform draws.
    pub fn uniform(rng: &mut impl StatRng) -> Self {
        let mut slots = [0.0; 6];
        for slot in &mut slots {
            *slot = rng.next_f64();
        }
        Self(slots)
    }

    /// Five uniform draws; HP gets weight 0.
    pub fn uniform_without_hp(rng: &mut impl StatRng) -> Self {
        let mut slots = [0.0; 6];
        for slot in &mut slots[Stat::Attack.index()..] {
            *slot = rng.next_f64();
        }
        Self(slots)
    }

    pub const fn as_slots(&self) -> &[f64; 6] {
        &self.0
    }

    pub const fn get(&self, stat: Stat) -> f64 {
        self.0[stat as usize]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Sum over the slots for which `include` holds.
    pub fn sum_where(&self, mut include: impl FnMut(Stat) -> bool) -> f64 {
        Stat::ALL
            .iter()
            .filter(|&&stat| include(stat))
            .map(|&stat| self.get(stat))
            .sum()
    }

    /// Shares that add up to 1.
    pub fn normalized(&self) -> Self {
        let total = self.sum();
        Self(self.0.map(|w| w / total))
    }

    /// Same weights with the HP slot zeroed.
    pub fn without_hp(mut self) -> Self {
        self.0[Stat::Hp.index()] = 0.0;
        self
    }
}

/// A correlated weight vector for one creature plus the role that shaped it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoleWeights {
    /// Specialist (0) to generalist (1) scalar shared by all six draws.
    pub role_modifier: f64,
    pub weights: StatWeights,
}

impl RoleWeights {
    /// Seven draws: the role modifier, then one [`stat_ratio`] per slot in the
    /// order Attack, Defense, SpAtk, SpDef, Speed, HP.
    pub fn draw(rng: &mut impl StatRng) -> Self {
        let role_modifier = rng.next_f64();
        let attack = stat_ratio(rng, role_modifier);
        let defense = stat_ratio(rng, role_modifier);
        let sp_atk = stat_ratio(rng, role_modifier);
        let sp_def = stat_ratio(rng, role_modifier);
        let speed = stat_ratio(rng, role_modifier);
        let hp = stat_ratio(rng, role_modifier);

        Self {
            role_modifier,
            weights: StatWeights([hp, attack, defense, sp_atk, sp_def, speed]),
        }
    }
}
