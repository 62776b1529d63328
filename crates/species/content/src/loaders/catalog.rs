//! Species catalog loader.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use species_core::{Creature, Dex, Evolution, MegaEvolution};
use tracing::info;

use crate::loaders::{LoadResult, read_file};

/// Species catalog structure for RON files.
///
/// Creatures are listed without edges; the edge lists are applied through
/// the dex so both endpoints stay in sync.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeciesCatalog {
    pub species: Vec<Creature>,
    #[serde(default)]
    pub evolutions: Vec<Evolution>,
    #[serde(default)]
    pub mega_evolutions: Vec<MegaEvolution>,
}

impl SpeciesCatalog {
    /// Register every creature, then every edge.
    pub fn into_dex(self) -> LoadResult<Dex> {
        let mut dex = Dex::new();
        for creature in self.species {
            let id = creature.id;
            dex.insert(creature)
                .with_context(|| format!("Failed to register species {}", id))?;
        }
        for evolution in self.evolutions {
            dex.add_evolution(evolution).with_context(|| {
                format!(
                    "Failed to add evolution {} -> {}",
                    evolution.from, evolution.to
                )
            })?;
        }
        for mega in self.mega_evolutions {
            dex.add_mega_evolution(mega).with_context(|| {
                format!("Failed to add mega evolution {} -> {}", mega.from, mega.to)
            })?;
        }
        Ok(dex)
    }
}

/// Loader for species catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog file and build its [`Dex`].
    pub fn load(path: &Path) -> LoadResult<Dex> {
        let content = read_file(path)?;
        let dex = Self::parse(&content)?;
        info!(path = %path.display(), species = dex.len(), "loaded species catalog");
        Ok(dex)
    }

    pub fn parse(content: &str) -> LoadResult<Dex> {
        let catalog: SpeciesCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse species catalog RON: {}", e))?;
        catalog.into_dex()
    }
}
