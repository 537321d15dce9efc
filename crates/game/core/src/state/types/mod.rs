pub mod cell;
pub mod common;
pub mod map;

pub use cell::{Cell, CellEffects, OccupancyRefusal};
pub use common::{EntityId, MapId, Position};
pub use map::{GridMap, MapDimensions};
