//! Data-driven species content and loaders.
//!
//! This crate reads the inputs stat randomization works on:
//! - Species catalogs with evolution and mega-evolution edges (RON)
//! - Randomizer settings (TOML)
//!
//! Loaders build a ready-to-use [`species_core::Dex`]; everything after that
//! happens in `species-core`.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, LoadResult, SpeciesCatalog};
