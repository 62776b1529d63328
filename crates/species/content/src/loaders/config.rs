//! Randomizer settings loader.

use std::path::Path;

use species_core::StatsConfig;
use tracing::warn;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`StatsConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<StatsConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<StatsConfig> {
        let config: StatsConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.boss_min_total > config.boss_max_total {
            warn!(
                min = config.boss_min_total,
                max = config.boss_max_total,
                "boss totals given backwards; swapping"
            );
            let (min, max) = (config.boss_min_total, config.boss_max_total);
            return Ok(config.with_boss_totals(min, max));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), StatsConfig::default());
    }

    #[test]
    fn partial_overrides() {
        let config = ConfigLoader::parse(
            "follow_evolutions = false\nboss_max_total = 950\n",
        )
        .unwrap();
        assert!(!config.follow_evolutions);
        assert_eq!(config.boss_min_total, StatsConfig::DEFAULT_BOSS_MIN_TOTAL);
        assert_eq!(config.boss_max_total, 950);
    }

    #[test]
    fn backwards_boss_totals_are_swapped() {
        let config =
            ConfigLoader::parse("boss_min_total = 880\nboss_max_total = 820\n").unwrap();
        assert_eq!(config.boss_min_total, 820);
        assert_eq!(config.boss_max_total, 880);
    }

    #[test]
    fn load_reports_missing_file_and_bad_toml() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("config.toml");
        let err = ConfigLoader::load(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));

        std::fs::write(&missing, "follow_evolutions = \"sometimes\"").unwrap();
        let err = ConfigLoader::load(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
