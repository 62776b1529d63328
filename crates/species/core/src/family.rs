//! Family Traversal Helpers - depth queries over the evolution graph.
//!
//! Families branch (one creature may have several evolutions, and in
//! principle several pre-evolutions), so every depth is a maximum over all
//! edges rather than a chain walk. Results are memoized per [`SpeciesId`];
//! a [`FamilyDepths`] stays valid as long as the dex's edges do not change.

use std::collections::{HashMap, HashSet};

use crate::dex::Dex;
use crate::entity::SpeciesId;

/// Which edge list a depth query follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Outgoing evolutions, toward fully evolved forms.
    TowardTerminal,
    /// Incoming evolutions, toward the family's base.
    FromRoot,
}

/// Memoized depth table.
#[derive(Clone, Debug, Default)]
pub struct FamilyDepths {
    toward_terminal: HashMap<SpeciesId, u32>,
    from_root: HashMap<SpeciesId, u32>,
}

impl FamilyDepths {
    pub fn new() -> Self {
        Self::default()
    }

    /// 0 without outgoing evolutions, else 1 + the deepest evolution.
    pub fn toward_terminal(&mut self, dex: &Dex, id: SpeciesId) -> u32 {
        self.depth(dex, id, Direction::TowardTerminal)
    }

    /// 0 without incoming evolutions, else 1 + the deepest pre-evolution.
    pub fn from_root(&mut self, dex: &Dex, id: SpeciesId) -> u32 {
        self.depth(dex, id, Direction::FromRoot)
    }

    /// Post-order traversal on an explicit stack.
    ///
    /// An edge back onto the current path counts as a leaf, so a malformed
    /// graph still terminates.
    pub fn depth(&mut self, dex: &Dex, id: SpeciesId, direction: Direction) -> u32 {
        let memo = match direction {
            Direction::TowardTerminal => &mut self.toward_terminal,
            Direction::FromRoot => &mut self.from_root,
        };
        if let Some(&depth) = memo.get(&id) {
            return depth;
        }

        let mut on_path = HashSet::new();
        let mut stack = vec![(id, false)];
        while let Some((node, expanded)) = stack.pop() {
            if memo.contains_key(&node) {
                continue;
            }
            if expanded {
                let depth = neighbors(dex, node, direction)
                    .filter(|next| !on_path.contains(next) || memo.contains_key(next))
                    .map(|next| 1 + memo.get(&next).copied().unwrap_or(0))
                    .max()
                    .unwrap_or(0);
                memo.insert(node, depth);
                on_path.remove(&node);
            } else {
                on_path.insert(node);
                stack.push((node, true));
                for next in neighbors(dex, node, direction) {
                    if !memo.contains_key(&next) && !on_path.contains(&next) {
                        stack.push((next, false));
                    }
                }
            }
        }

        memo.get(&id).copied().unwrap_or(0)
    }
}

fn neighbors(dex: &Dex, id: SpeciesId, direction: Direction) -> impl Iterator<Item = SpeciesId> + '_ {
    dex.get(id).into_iter().flat_map(move |creature| {
        let edges = match direction {
            Direction::TowardTerminal => &creature.evolutions_from,
            Direction::FromRoot => &creature.evolutions_to,
        };
        edges.iter().map(move |evo| match direction {
            Direction::TowardTerminal => evo.to,
            Direction::FromRoot => evo.from,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{BaseStats, Creature, Evolution};

    fn dex_with(ids: &[u16], edges: &[(u16, u16)]) -> Dex {
        let mut dex = Dex::new();
        for &id in ids {
            dex.insert(Creature::new(SpeciesId(id), format!("#{id}"), BaseStats::default()))
                .unwrap();
        }
        for &(from, to) in edges {
            dex.add_evolution(Evolution::new(SpeciesId(from), SpeciesId(to)))
                .unwrap();
        }
        dex
    }

    #[test]
    fn chain_depths() {
        // Bulbasaur line
        let dex = dex_with(&[1, 2, 3], &[(1, 2), (2, 3)]);
        let mut depths = FamilyDepths::new();
        assert_eq!(depths.toward_terminal(&dex, SpeciesId(1)), 2);
        assert_eq!(depths.toward_terminal(&dex, SpeciesId(2)), 1);
        assert_eq!(depths.toward_terminal(&dex, SpeciesId(3)), 0);
        assert_eq!(depths.from_root(&dex, SpeciesId(1)), 0);
        assert_eq!(depths.from_root(&dex, SpeciesId(3)), 2);
    }

    #[test]
    fn branching_takes_maximum() {
        // Eevee -> Vaporeon, Eevee -> Espeon; Wurmple -> Silcoon -> Beautifly,
        // Wurmple -> Cascoon
        let dex = dex_with(
            &[133, 134, 196, 265, 266, 267, 268],
            &[(133, 134), (133, 196), (265, 266), (266, 267), (265, 268)],
        );
        let mut depths = FamilyDepths::new();
        assert_eq!(depths.toward_terminal(&dex, SpeciesId(133)), 1);
        assert_eq!(depths.toward_terminal(&dex, SpeciesId(265)), 2);
        assert_eq!(depths.from_root(&dex, SpeciesId(268)), 1);
    }

    #[test]
    fn diamond_is_memoized_once() {
        // 1 -> 2 -> 4, 1 -> 3 -> 4 -> 5
        let dex = dex_with(&[1, 2, 3, 4, 5], &[(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]);
        let mut depths = FamilyDepths::new();
        assert_eq!(depths.toward_terminal(&dex, SpeciesId(1)), 3);
        assert_eq!(depths.from_root(&dex, SpeciesId(5)), 3);
        assert_eq!(depths.toward_terminal.len(), 5);
    }

    #[test]
    fn unknown_species_has_depth_zero() {
        let dex = Dex::new();
        assert_eq!(FamilyDepths::new().toward_terminal(&dex, SpeciesId(42)), 0);
    }

    #[test]
    fn hand_edited_cycle_terminates() {
        let mut dex = dex_with(&[1, 2], &[(1, 2)]);
        // Bypass add_evolution's cycle check.
        dex.get_mut(SpeciesId(2))
            .unwrap()
            .evolutions_from
            .push(Evolution::new(SpeciesId(2), SpeciesId(1)));
        let depth = FamilyDepths::new().toward_terminal(&dex, SpeciesId(1));
        assert!(depth <= 2);
    }
}
