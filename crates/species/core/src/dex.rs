//! Central creature registry.
//!
//! The [`Dex`] owns every [`Creature`] in an arena and resolves the id links
//! between them (base forms, evolution edges). Randomization entry points are
//! implemented on it in [`crate::randomize`].

use std::collections::HashMap;

use crate::entity::species::{LEGENDARIES, STRONG_LEGENDARIES};
use crate::entity::{Creature, Evolution, MegaEvolution, SpeciesId};
use crate::error::{DexError, DexResult};
use crate::family::FamilyDepths;

/// Arena of creatures keyed by [`SpeciesId`].
#[derive(Clone, Debug, Default)]
pub struct Dex {
    creatures: Vec<Creature>,
    index: HashMap<SpeciesId, usize>,
}

impl Dex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a creature. Edge lists it already carries are kept as is.
    pub fn insert(&mut self, creature: Creature) -> DexResult<()> {
        if self.index.contains_key(&creature.id) {
            return Err(DexError::DuplicateSpecies(creature.id));
        }
        self.index.insert(creature.id, self.creatures.len());
        self.creatures.push(creature);
        Ok(())
    }

    pub fn get(&self, id: SpeciesId) -> Option<&Creature> {
        self.index.get(&id).map(|&slot| &self.creatures[slot])
    }

    pub fn get_mut(&mut self, id: SpeciesId) -> Option<&mut Creature> {
        self.index.get(&id).map(|&slot| &mut self.creatures[slot])
    }

    /// Like [`get`](Self::get), failing with [`DexError::UnknownSpecies`].
    pub fn creature(&self, id: SpeciesId) -> DexResult<&Creature> {
        self.get(id).ok_or(DexError::UnknownSpecies(id))
    }

    pub fn creature_mut(&mut self, id: SpeciesId) -> DexResult<&mut Creature> {
        self.get_mut(id).ok_or(DexError::UnknownSpecies(id))
    }

    pub fn contains(&self, id: SpeciesId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Creatures in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = SpeciesId> + '_ {
        self.creatures.iter().map(|creature| creature.id)
    }

    /// Record `evolution` on both endpoints.
    ///
    /// Rejects unknown endpoints, self-loops, and edges that would make the
    /// graph cyclic.
    pub fn add_evolution(&mut self, evolution: Evolution) -> DexResult<()> {
        let Evolution { from, to, .. } = evolution;
        self.creature(from)?;
        self.creature(to)?;
        if from == to {
            return Err(DexError::SelfEvolution(from));
        }
        if self.evolves_into(to, from) {
            return Err(DexError::EvolutionCycle { from, to });
        }

        self.creature_mut(from)?.evolutions_from.push(evolution);
        self.creature_mut(to)?.evolutions_to.push(evolution);
        Ok(())
    }

    pub fn add_mega_evolution(&mut self, mega: MegaEvolution) -> DexResult<()> {
        self.creature(mega.from)?;
        self.creature(mega.to)?;
        self.creature_mut(mega.from)?.mega_evolutions_from.push(mega);
        self.creature_mut(mega.to)?.mega_evolutions_to.push(mega);
        Ok(())
    }

    /// True if `target` is reachable from `start` along outgoing evolutions.
    pub fn evolves_into(&self, start: SpeciesId, target: SpeciesId) -> bool {
        let mut stack = vec![start];
        let mut seen = Vec::new();
        while let Some(node) = stack.pop() {
            if node == target {
                return true;
            }
            if seen.contains(&node) {
                continue;
            }
            seen.push(node);
            if let Some(creature) = self.get(node) {
                stack.extend(creature.evolutions_from.iter().map(|evo| evo.to));
            }
        }
        false
    }

    /// Number of the base form at the end of the `base_forme` chain.
    pub fn base_number(&self, id: SpeciesId) -> DexResult<SpeciesId> {
        let mut current = self.creature(id)?;
        // A well-formed chain is at most one link long; the bound stops loops.
        for _ in 0..self.creatures.len() {
            match current.base_forme {
                Some(base) => current = self.creature(base)?,
                None => break,
            }
        }
        Ok(current.id)
    }

    /// Id used for species-level classification: the base form's for
    /// alternate forms.
    fn classification_id(&self, id: SpeciesId) -> DexResult<SpeciesId> {
        let creature = self.creature(id)?;
        Ok(match (creature.forme_number, creature.base_forme) {
            (0, _) | (_, None) => creature.id,
            (_, Some(base)) => base,
        })
    }

    pub fn is_legendary(&self, id: SpeciesId) -> DexResult<bool> {
        Ok(LEGENDARIES.contains(&self.classification_id(id)?))
    }

    pub fn is_strong_legendary(&self, id: SpeciesId) -> DexResult<bool> {
        Ok(STRONG_LEGENDARIES.contains(&self.classification_id(id)?))
    }

    fn base_forme_of(&self, id: SpeciesId) -> DexResult<Option<&Creature>> {
        match self.creature(id)?.base_forme {
            Some(base) => self.creature(base).map(Some),
            None => Ok(None),
        }
    }

    /// Overwrite an alternate form's stats with its base form's.
    /// No-op for base forms.
    pub fn copy_base_forme_base_stats(&mut self, id: SpeciesId) -> DexResult<()> {
        if let Some(stats) = self.base_forme_of(id)?.map(|base| base.stats) {
            self.creature_mut(id)?.stats = stats;
        }
        Ok(())
    }

    pub fn copy_base_forme_abilities(&mut self, id: SpeciesId) -> DexResult<()> {
        if let Some(abilities) = self.base_forme_of(id)?.map(|base| base.abilities) {
            self.creature_mut(id)?.abilities = abilities;
        }
        Ok(())
    }

    /// Give an alternate form its base form's outgoing evolutions.
    pub fn copy_base_forme_evolutions(&mut self, id: SpeciesId) -> DexResult<()> {
        if let Some(evolutions) = self
            .base_forme_of(id)?
            .map(|base| base.evolutions_from.clone())
        {
            self.creature_mut(id)?.evolutions_from = evolutions;
        }
        Ok(())
    }

    pub fn depth_toward_terminal(&self, id: SpeciesId) -> u32 {
        FamilyDepths::new().toward_terminal(self, id)
    }

    pub fn depth_from_root(&self, id: SpeciesId) -> u32 {
        FamilyDepths::new().from_root(self, id)
    }
}
