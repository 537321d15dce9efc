//! Deterministic grid map and pathfinding core for turn-based tactics.
//!
//! `tactics-core` owns the terrain rules, the cell and map data model, the
//! registry of loaded maps and the read-only queries that run on top of them
//! (shortest path, movement range, line of sight, distance metrics). It does
//! no I/O: content loaders and tooling build maps and hand them in.
//!
//! Every query is a pure function of the map and its arguments, so the same
//! inputs always yield the same outputs on every platform.
pub mod config;
pub mod env;
pub mod error;
pub mod geometry;
pub mod pathfinding;
pub mod state;

pub use config::{DiagonalPolicy, GridConfig, MovementRules};
pub use env::{TerrainCatalog, TerrainKind, TerrainProfile};
pub use error::{CoreError, ErrorKind, ErrorSeverity};
pub use geometry::{DistanceMetric, LinePoints, line_points};
pub use pathfinding::{Direction, PathResult, Pathfinder, ReachableSet};
pub use state::{
    Cell, CellEffects, EntityId, GridError, GridMap, MapDimensions, MapId, MapRegistry,
    OccupancyRefusal, Position,
};
