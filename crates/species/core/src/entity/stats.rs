//! The six base stats and their slot order.

/// One of the six base-stat slots.
///
/// Discriminants are the slot indices used by weight vectors and
/// [`StatPermutation`](crate::distribute::StatPermutation).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stat {
    Hp = 0,
    Attack = 1,
    Defense = 2,
    SpAtk = 3,
    SpDef = 4,
    Speed = 5,
}

impl Stat {
    /// All slots in slot order.
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Speed,
    ];

    /// Slot index in `0..6`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowest value a freshly distributed stat may take.
    #[inline]
    pub const fn distribution_floor(self) -> i32 {
        match self {
            Stat::Hp => 20,
            _ => 10,
        }
    }
}

/// A creature's six base stats.
///
/// Each stat is stored as `u8`, so a finalized record is always in
/// `[0, 255]`. Randomization further keeps every stat at or above 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_atk: u8,
    pub sp_def: u8,
    pub speed: u8,
}

impl BaseStats {
    /// Largest value any stat can hold.
    pub const MAX: i32 = u8::MAX as i32;

    pub const fn new(hp: u8, attack: u8, defense: u8, sp_atk: u8, sp_def: u8, speed: u8) -> Self {
        Self {
            hp,
            attack,
            defense,
            sp_atk,
            sp_def,
            speed,
        }
    }

    /// Build from slot-ordered values, clamping each into `[0, 255]`.
    pub fn from_slots(values: [i32; 6]) -> Self {
        let [hp, attack, defense, sp_atk, sp_def, speed] = values.map(clamp_u8);
        Self::new(hp, attack, defense, sp_atk, sp_def, speed)
    }

    /// Values in slot order (HP, Attack, Defense, SpAtk, SpDef, Speed).
    pub const fn to_slots(&self) -> [i32; 6] {
        [
            self.hp as i32,
            self.attack as i32,
            self.defense as i32,
            self.sp_atk as i32,
            self.sp_def as i32,
            self.speed as i32,
        ]
    }

    pub const fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpAtk => self.sp_atk,
            Stat::SpDef => self.sp_def,
            Stat::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u8) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpAtk => self.sp_atk = value,
            Stat::SpDef => self.sp_def = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Base stat total (BST).
    pub const fn total(&self) -> i32 {
        self.hp as i32
            + self.attack as i32
            + self.defense as i32
            + self.sp_atk as i32
            + self.sp_def as i32
            + self.speed as i32
    }

    /// Total used for power-level comparisons.
    ///
    /// For an HP-locked creature, HP is excluded and the remaining five stats
    /// are inflated by 6/5.
    pub const fn power_total(&self, hp_locked: bool) -> i32 {
        if hp_locked {
            (self.total() - self.hp as i32) * 6 / 5
        } else {
            self.total()
        }
    }

    /// Share of Attack among the two offensive stats.
    pub fn attack_special_ratio(&self) -> f64 {
        let attack = f64::from(self.attack);
        attack / (attack + f64::from(self.sp_atk))
    }

    /// True if every stat lies in `[1, 255]`.
    pub fn all_positive(&self) -> bool {
        Stat::ALL.iter().all(|&stat| self.get(stat) >= 1)
    }
}

#[inline]
pub(crate) fn clamp_u8(value: i32) -> u8 {
    value.clamp(0, BaseStats::MAX) as u8
}

/// Round half up (`floor(x + 0.5)`), saturating at the `i32` range.
///
/// Differs from [`f64::round`] on negative halves: `-2.5` rounds to `-2`.
#[inline]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_all_six() {
        let stats = BaseStats::new(45, 49, 49, 65, 65, 45);
        assert_eq!(stats.total(), 318);
        assert_eq!(stats.power_total(false), 318);
    }

    #[test]
    fn hp_locked_power_total_excludes_hp() {
        // Shedinja: 1/90/45/30/30/40
        let stats = BaseStats::new(1, 90, 45, 30, 30, 40);
        assert_eq!(stats.total(), 236);
        assert_eq!(stats.power_total(true), 282);
    }

    #[test]
    fn slots_follow_stat_order() {
        let mut stats = BaseStats::from_slots([1, 2, 3, 4, 5, 6]);
        for stat in Stat::ALL {
            assert_eq!(stats.get(stat) as usize, stat.index() + 1);
        }
        stats.set(Stat::Speed, 99);
        assert_eq!(stats.to_slots()[5], 99);
    }

    #[test]
    fn from_slots_clamps() {
        let stats = BaseStats::from_slots([-5, 300, 10, 10, 10, 10]);
        assert_eq!(stats.hp, 0);
        assert_eq!(stats.attack, 255);
    }

    #[test]
    fn round_half_up_on_negative_halves() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(0.49), 0);
    }

    #[test]
    fn stat_names_parse() {
        assert_eq!("sp_atk".parse::<Stat>().unwrap(), Stat::SpAtk);
        assert_eq!(Stat::SpDef.to_string(), "sp_def");
    }
}
