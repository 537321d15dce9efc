//! Content loaders for reading grid data from files.
//!
//! Each loader parses one file format into core types and validates it against
//! the core's own rules, so a loaded map or catalog is always usable as is.

pub mod config;
pub mod factory;
pub mod map;
pub mod terrain;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use map::{MapLoader, MapSpec};
pub use terrain::{TerrainLoader, TerrainOverride};

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
