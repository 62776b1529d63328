/// Settings consumed by stat randomization.
///
/// Which generation mode runs for which creature is decided by the caller;
/// this only carries the knobs the algorithms themselves read.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatsConfig {
    /// Totals must respect evolution order (evolved forms no weaker than
    /// their pre-evolutions). Also selects the log-normal parameter set.
    pub follow_evolutions: bool,
    /// Inclusive lower bound of a boss total.
    pub boss_min_total: u16,
    /// Inclusive upper bound of a boss total.
    pub boss_max_total: u16,
}

impl StatsConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOSS_MIN_TOTAL: u16 = 800;
    pub const DEFAULT_BOSS_MAX_TOTAL: u16 = 900;

    pub fn new() -> Self {
        Self {
            follow_evolutions: true,
            boss_min_total: Self::DEFAULT_BOSS_MIN_TOTAL,
            boss_max_total: Self::DEFAULT_BOSS_MAX_TOTAL,
        }
    }

    #[must_use]
    pub fn with_follow_evolutions(mut self, follow_evolutions: bool) -> Self {
        self.follow_evolutions = follow_evolutions;
        self
    }

    /// Bounds are reordered if given backwards.
    #[must_use]
    pub fn with_boss_totals(mut self, min: u16, max: u16) -> Self {
        self.boss_min_total = min.min(max);
        self.boss_max_total = min.max(max);
        self
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self::new()
    }
}
