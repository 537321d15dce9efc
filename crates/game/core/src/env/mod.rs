//! Read-only world data consumed by the grid.
//!
//! The terrain catalog is configured once (built-in table or loaded content)
//! and every cell, map, and pathfinder query resolves terrain rules through it.
mod terrain;

pub use terrain::{TerrainCatalog, TerrainKind, TerrainProfile};
