//! Data-driven content definitions and loaders.
//!
//! This crate turns RON/TOML data files into the core's grid types:
//! - Map layouts (data-driven via RON)
//! - Terrain catalog overrides (data-driven via TOML)
//! - Grid configuration (data-driven via TOML)
//!
//! Content is loaded once at startup and handed to the core; it never appears
//! in query results.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, MapLoader, MapSpec, TerrainLoader,
    TerrainOverride,
};
