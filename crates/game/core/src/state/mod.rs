//! Authoritative grid state.
//!
//! Maps own their cells; the registry owns the loaded maps. Read-only queries
//! such as pathfinding borrow a map and never mutate it.
mod error;
mod registry;
pub mod types;

pub use error::GridError;
pub use registry::MapRegistry;
pub use types::{
    Cell, CellEffects, EntityId, GridMap, MapDimensions, MapId, OccupancyRefusal, Position,
};
