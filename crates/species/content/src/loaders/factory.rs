//! Content factory for building a dex and settings from data files.

use std::path::{Path, PathBuf};

use species_core::{Dex, StatsConfig};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};

/// Content factory that loads all species content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── species.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load randomizer settings from `config.toml`.
    pub fn load_config(&self) -> LoadResult<StatsConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the species catalog from `species.ron`.
    pub fn load_catalog(&self) -> LoadResult<Dex> {
        let path = self.data_dir.join("species.ron");
        CatalogLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_data_loads() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
        let config = factory.load_config().unwrap();
        assert!(config.follow_evolutions);

        let dex = factory.load_catalog().unwrap();
        assert!(dex.contains(species_core::SpeciesId::SHEDINJA));
        assert!(dex.iter().all(|creature| creature.stats.all_positive()));
    }
}
