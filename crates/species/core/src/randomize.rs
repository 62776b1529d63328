//! Stat randomization entry points.
//!
//! The caller picks a mode per creature and, for family-aware modes, walks
//! each family ancestors-first; every method here is a single one-creature
//! (or one parent→child) step. All randomness comes from the `rng` argument,
//! drawn in the order documented on each method.

use tracing::debug;

use crate::bst::{TotalSource, boss_total, pick_total};
use crate::config::StatsConfig;
use crate::dex::Dex;
use crate::distribute::{
    PermutationTable, StatDiff, StatPermutation, diffed_from, distribute, scaled_from,
    within_total,
};
use crate::entity::{BaseStats, SpeciesId};
use crate::error::DexResult;
use crate::family::FamilyDepths;
use crate::rng::StatRng;
use crate::weights::RoleWeights;

impl Dex {
    /// Decide where a creature's next total comes from.
    ///
    /// Checked in order: totals not following evolutions, mega form (first
    /// incoming mega edge), alternate form, fully evolved, mid-chain.
    pub fn total_source(&self, id: SpeciesId, config: &StatsConfig) -> DexResult<TotalSource> {
        self.total_source_with(id, config, &mut FamilyDepths::new())
    }

    /// [`total_source`](Self::total_source) reusing a depth memo across calls.
    pub fn total_source_with(
        &self,
        id: SpeciesId,
        config: &StatsConfig,
        depths: &mut FamilyDepths,
    ) -> DexResult<TotalSource> {
        let creature = self.creature(id)?;

        if !config.follow_evolutions {
            return Ok(TotalSource::Unconstrained);
        }
        if let Some(mega) = creature.mega_evolutions_to.first() {
            return Ok(TotalSource::Mega {
                base_total: self.creature(mega.from)?.bst(),
            });
        }
        if let Some(base) = creature.base_forme {
            return Ok(TotalSource::AlternateForm {
                base_total: self.creature(base)?.bst(),
            });
        }

        let mut next_stage_min: Option<i32> = None;
        for evo in &creature.evolutions_from {
            let total = self.creature(evo.to)?.bst();
            next_stage_min = Some(next_stage_min.map_or(total, |min| min.min(total)));
        }
        Ok(match next_stage_min {
            None => TotalSource::FullyEvolved,
            Some(next_stage_min) => TotalSource::MidChain {
                next_stage_min,
                depth: depths.toward_terminal(self, id),
            },
        })
    }

    /// Re-split the creature's current total with uniform weights.
    ///
    /// Draws six doubles per attempt (five for the HP-locked creature),
    /// retrying until every stat fits in a byte.
    pub fn generate_independent_stats(
        &mut self,
        id: SpeciesId,
        rng: &mut impl StatRng,
    ) -> DexResult<BaseStats> {
        let creature = self.creature_mut(id)?;
        let total = creature.bst();
        creature.stats = within_total(total, rng, creature.is_hp_locked());
        debug!(species = %id, total, stats = ?creature.stats, "independent stats");
        Ok(creature.stats)
    }

    /// New total from [`total_source`](Self::total_source), split by
    /// role-skewed weights.
    ///
    /// Draws: the total (see [`crate::bst`]), then seven doubles for
    /// [`RoleWeights::draw`].
    pub fn generate_following_evolution_stats(
        &mut self,
        id: SpeciesId,
        rng: &mut impl StatRng,
        config: &StatsConfig,
    ) -> DexResult<BaseStats> {
        let source = self.total_source(id, config)?;
        let total = pick_total(rng, source, config);
        let stats = self.distribute_role_weighted(id, total, rng)?;
        debug!(species = %id, ?source, total, ?stats, "log-normal stats");
        Ok(stats)
    }

    /// Boss-level total split by role-skewed weights.
    ///
    /// Draws: one bounded int for the total, then seven doubles.
    pub fn generate_boss_stats(
        &mut self,
        id: SpeciesId,
        rng: &mut impl StatRng,
        config: &StatsConfig,
    ) -> DexResult<BaseStats> {
        self.creature(id)?;
        let total = boss_total(rng, config);
        let stats = self.distribute_role_weighted(id, total, rng)?;
        debug!(species = %id, total, ?stats, "boss stats");
        Ok(stats)
    }

    fn distribute_role_weighted(
        &mut self,
        id: SpeciesId,
        total: i32,
        rng: &mut impl StatRng,
    ) -> DexResult<BaseStats> {
        let creature = self.creature_mut(id)?;
        let drawn = RoleWeights::draw(rng);
        creature.stats = distribute(total, &drawn.weights, creature.is_hp_locked());
        Ok(creature.stats)
    }

    /// Shuffle the creature's recorded permutation (five draws) and apply it
    /// to its unshuffled stats. The new permutation is recorded in `table`
    /// and returned, so it always maps the unshuffled record to the current
    /// one. The HP-locked creature keeps its HP slot in place.
    pub fn shuffle_stats(
        &mut self,
        id: SpeciesId,
        rng: &mut impl StatRng,
        table: &mut PermutationTable,
    ) -> DexResult<StatPermutation> {
        let creature = self.creature_mut(id)?;
        let previous = table.get(id);
        let mut permutation = previous.shuffled(rng);
        if creature.is_hp_locked() {
            permutation = permutation.with_hp_fixed();
        }
        let unshuffled = previous.inverse().apply(&creature.stats);
        creature.stats = permutation.apply(&unshuffled);
        table.set(id, permutation);
        debug!(species = %id, order = ?permutation.order(), "shuffled stats");
        Ok(permutation)
    }

    /// Bring an evolution onto its ancestor's permutation.
    ///
    /// Undoes whatever permutation `table` records for `id`, then applies the
    /// ancestor's, and records that for `id`. For the HP-locked creature the
    /// ancestor's order is applied with HP held in place. No draws.
    pub fn propagate_shuffle_to_evolution(
        &mut self,
        id: SpeciesId,
        ancestor: SpeciesId,
        table: &mut PermutationTable,
    ) -> DexResult<()> {
        self.creature(ancestor)?;
        let creature = self.creature_mut(id)?;
        let mut inherited = table.get(ancestor);
        if creature.is_hp_locked() {
            inherited = inherited.with_hp_fixed();
        }
        let unshuffled = table.get(id).inverse().apply(&creature.stats);
        creature.stats = inherited.apply(&unshuffled);
        table.set(id, inherited);
        Ok(())
    }

    /// Rescale the ancestor's stats to this creature's current total.
    /// HP stays at 1 for the HP-locked creature. No draws.
    pub fn scale_stats_from_ancestor(
        &mut self,
        id: SpeciesId,
        ancestor: SpeciesId,
    ) -> DexResult<BaseStats> {
        let ancestor_stats = self.creature(ancestor)?.stats;
        let creature = self.creature_mut(id)?;
        let hp_locked = creature.is_hp_locked();
        creature.stats = scaled_from(&ancestor_stats, creature.bst(), hp_locked);
        Ok(creature.stats)
    }

    /// Ancestor's stats plus this creature's extra total, split by six
    /// uniform draws (five for the HP-locked creature, whose HP stays at 1).
    /// Returns the unclamped shares.
    pub fn diff_stats_from_ancestor(
        &mut self,
        id: SpeciesId,
        ancestor: SpeciesId,
        rng: &mut impl StatRng,
    ) -> DexResult<StatDiff> {
        let ancestor_stats = self.creature(ancestor)?.stats;
        let creature = self.creature_mut(id)?;
        let (stats, diff) =
            diffed_from(&ancestor_stats, creature.bst(), rng, creature.is_hp_locked());
        creature.stats = stats;
        Ok(diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Creature, Evolution, MegaEvolution, Stat};
    use crate::error::DexError;
    use crate::rng::{Pcg32, SeedableRng};
    use crate::rng::tests::ScriptedRng;

    fn dex() -> Dex {
        let mut dex = Dex::new();
        let records = [
            (1, "Bulbasaur", BaseStats::new(45, 49, 49, 65, 65, 45)),
            (2, "Ivysaur", BaseStats::new(60, 62, 63, 80, 80, 60)),
            (3, "Venusaur", BaseStats::new(80, 82, 83, 100, 100, 80)),
            (10033, "Venusaur", BaseStats::new(80, 100, 123, 122, 120, 80)),
        ];
        for (id, name, stats) in records {
            dex.insert(Creature::new(SpeciesId(id), name, stats)).unwrap();
        }
        dex.add_evolution(Evolution::new(SpeciesId(1), SpeciesId(2))).unwrap();
        dex.add_evolution(Evolution::new(SpeciesId(2), SpeciesId(3))).unwrap();
        dex.add_mega_evolution(MegaEvolution::new(SpeciesId(3), SpeciesId(10033)))
            .unwrap();
        dex
    }

    #[test]
    fn total_source_priorities() {
        let dex = dex();
        let config = StatsConfig::default();

        assert_eq!(
            dex.total_source(SpeciesId(10033), &config).unwrap(),
            TotalSource::Mega { base_total: 525 }
        );
        assert_eq!(
            dex.total_source(SpeciesId(3), &config).unwrap(),
            TotalSource::FullyEvolved
        );
        assert_eq!(
            dex.total_source(SpeciesId(2), &config).unwrap(),
            TotalSource::MidChain {
                next_stage_min: 525,
                depth: 1
            }
        );
        assert_eq!(
            dex.total_source(SpeciesId(1), &config).unwrap(),
            TotalSource::MidChain {
                next_stage_min: 405,
                depth: 2
            }
        );

        let free = config.with_follow_evolutions(false);
        assert_eq!(
            dex.total_source(SpeciesId(10033), &free).unwrap(),
            TotalSource::Unconstrained
        );
    }

    #[test]
    fn alternate_form_mirrors_base_total() {
        let mut dex = dex();
        dex.insert(
            Creature::new(SpeciesId(900), "Venusaur", BaseStats::default()).with_base_forme(
                SpeciesId(3),
                1,
                "-Gmax",
            ),
        )
        .unwrap();
        let config = StatsConfig::default();
        assert_eq!(
            dex.total_source(SpeciesId(900), &config).unwrap(),
            TotalSource::AlternateForm { base_total: 525 }
        );

        let mut rng = Pcg32::seed_from_u64(12);
        let stats = dex
            .generate_following_evolution_stats(SpeciesId(900), &mut rng, &config)
            .unwrap();
        // short by at most the tolerance, over by at most the floors' lift
        assert!((515..=545).contains(&stats.total()), "total {}", stats.total());
    }

    #[test]
    fn following_evolution_stats_stay_below_next_stage() {
        let mut dex = dex();
        let config = StatsConfig::default();
        let mut rng = Pcg32::seed_from_u64(2024);
        for _ in 0..200 {
            let stats = dex
                .generate_following_evolution_stats(SpeciesId(2), &mut rng, &config)
                .unwrap();
            assert!(stats.all_positive());
            // window tops out at the next stage's total
            assert!(stats.total() < 525, "total {}", stats.total());
        }
    }

    #[test]
    fn boss_stats_in_range() {
        let mut dex = dex();
        let config = StatsConfig::default();
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..100 {
            let stats = dex.generate_boss_stats(SpeciesId(3), &mut rng, &config).unwrap();
            assert!((790..=920).contains(&stats.total()), "total {}", stats.total());
        }
    }

    #[test]
    fn independent_stats_keep_total_close() {
        let mut dex = dex();
        let mut rng = Pcg32::seed_from_u64(6);
        let before = dex.get(SpeciesId(3)).unwrap().bst();
        let stats = dex.generate_independent_stats(SpeciesId(3), &mut rng).unwrap();
        assert!((stats.total() - before).abs() <= 6);
        assert!(stats.hp >= 21 && stats.attack >= 11);
    }

    #[test]
    fn shuffle_then_propagate_shares_order() {
        let mut dex = dex();
        let mut table = PermutationTable::new();
        // swap(5,0), swap(4,0), swap(3,0), swap(2,0), swap(1,0)
        let mut rng = ScriptedRng::ints(&[0, 0, 0, 0, 0]);

        let p = dex.shuffle_stats(SpeciesId(1), &mut rng, &mut table).unwrap();
        assert_eq!(p.order(), [1, 2, 3, 4, 5, 0]);
        assert_eq!(dex.get(SpeciesId(1)).unwrap().stats, BaseStats::new(49, 49, 65, 65, 45, 45));

        dex.propagate_shuffle_to_evolution(SpeciesId(2), SpeciesId(1), &mut table)
            .unwrap();
        assert_eq!(dex.get(SpeciesId(2)).unwrap().stats, BaseStats::new(62, 63, 80, 80, 60, 60));
        assert_eq!(table.get(SpeciesId(2)), p);

        // Propagating again is a no-op: the old order is undone first.
        dex.propagate_shuffle_to_evolution(SpeciesId(2), SpeciesId(1), &mut table)
            .unwrap();
        assert_eq!(dex.get(SpeciesId(2)).unwrap().stats, BaseStats::new(62, 63, 80, 80, 60, 60));
    }

    #[test]
    fn reshuffle_is_relative_to_unshuffled_stats() {
        let mut dex = dex();
        let original = dex.get(SpeciesId(1)).unwrap().stats;
        let mut table = PermutationTable::new();
        let mut rng = Pcg32::seed_from_u64(31);

        dex.shuffle_stats(SpeciesId(1), &mut rng, &mut table).unwrap();
        let second = dex.shuffle_stats(SpeciesId(1), &mut rng, &mut table).unwrap();

        let stats = dex.get(SpeciesId(1)).unwrap().stats;
        assert_eq!(stats, second.apply(&original));
        assert_eq!(second.inverse().apply(&stats), original);
    }

    fn nincada_line() -> Dex {
        let mut dex = Dex::new();
        let nincada = BaseStats::new(31, 45, 90, 30, 30, 40);
        let shedinja = BaseStats::new(1, 90, 45, 30, 30, 40);
        dex.insert(Creature::new(SpeciesId(290), "Nincada", nincada)).unwrap();
        dex.insert(Creature::new(SpeciesId::SHEDINJA, "Shedinja", shedinja))
            .unwrap();
        dex.add_evolution(Evolution::new(SpeciesId(290), SpeciesId::SHEDINJA))
            .unwrap();
        dex
    }

    #[test]
    fn hp_locked_evolution_keeps_hp_when_scaled_or_diffed() {
        let mut dex = nincada_line();
        let scaled = dex
            .scale_stats_from_ancestor(SpeciesId::SHEDINJA, SpeciesId(290))
            .unwrap();
        assert_eq!(scaled, BaseStats::new(1, 45, 90, 30, 30, 40));

        let mut dex = nincada_line();
        let mut rng = Pcg32::seed_from_u64(1);
        let diff = dex
            .diff_stats_from_ancestor(SpeciesId::SHEDINJA, SpeciesId(290), &mut rng)
            .unwrap();
        let stats = dex.get(SpeciesId::SHEDINJA).unwrap().stats;
        assert_eq!(stats.hp, 1);
        assert_eq!(diff.get(Stat::Hp), -30);
    }

    #[test]
    fn hp_locked_evolution_keeps_hp_through_shuffles() {
        let mut dex = nincada_line();
        let mut table = PermutationTable::new();
        let reversed = StatPermutation::from_order([5, 4, 3, 0, 1, 2]).unwrap();
        table.set(SpeciesId(290), reversed);

        dex.propagate_shuffle_to_evolution(SpeciesId::SHEDINJA, SpeciesId(290), &mut table)
            .unwrap();
        let stats = dex.get(SpeciesId::SHEDINJA).unwrap().stats;
        assert_eq!(stats, BaseStats::new(1, 40, 30, 30, 90, 45));
        assert_eq!(table.get(SpeciesId::SHEDINJA), reversed.with_hp_fixed());

        let mut rng = Pcg32::seed_from_u64(4);
        for _ in 0..20 {
            let p = dex
                .shuffle_stats(SpeciesId::SHEDINJA, &mut rng, &mut table)
                .unwrap();
            assert_eq!(p.order()[0], 0);
            assert_eq!(dex.get(SpeciesId::SHEDINJA).unwrap().stats.hp, 1);
        }
    }

    #[test]
    fn scale_and_diff_from_ancestor() {
        let mut dex = dex();
        let unchanged = dex.get(SpeciesId(3)).unwrap().stats;
        let total = unchanged.total();

        dex.get_mut(SpeciesId(3)).unwrap().stats = BaseStats::new(88, 88, 88, 87, 87, 87);
        let scaled = dex.scale_stats_from_ancestor(SpeciesId(3), SpeciesId(2)).unwrap();
        assert!((scaled.total() - total).abs() <= 3);

        let mut rng = ScriptedRng::doubles(&[0.5; 6]);
        let diff = dex
            .diff_stats_from_ancestor(SpeciesId(3), SpeciesId(2), &mut rng)
            .unwrap();
        // scaled total is 526; 526 - 405 = 121, 20 per slot after rounding
        assert_eq!(diff.0, [20; 6]);
    }

    #[test]
    fn unknown_species_is_reported() {
        let mut dex = dex();
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(
            dex.generate_independent_stats(SpeciesId(999), &mut rng),
            Err(DexError::UnknownSpecies(SpeciesId(999)))
        );
        assert_eq!(
            dex.scale_stats_from_ancestor(SpeciesId(2), SpeciesId(999)),
            Err(DexError::UnknownSpecies(SpeciesId(999)))
        );
    }
}
