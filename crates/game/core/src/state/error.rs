//! Grid errors.
//!
//! Errors raised by map accessors, cell mutations, the map registry and the
//! pathfinder's validated entry points.

use crate::env::TerrainKind;
use crate::error::{CoreError, ErrorKind, ErrorSeverity};
use crate::state::{EntityId, MapId, Position};

/// Errors that occur while reading or mutating the grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Position is outside the map bounds.
    #[error("position {position} is out of bounds (map size: {width}x{height})")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },

    /// Map dimensions must both be non-zero and within the supported maximum.
    #[error("invalid map dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A text layout used a character that names no terrain.
    #[error("unknown terrain glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },

    /// No map with this id is loaded.
    #[error("{id} is not loaded")]
    MapNotLoaded { id: MapId },

    /// The mover does not stand where the query says it does.
    #[error("mover {mover} is not at {position} (occupant: {occupant:?})")]
    MoverMismatch {
        mover: EntityId,
        position: Position,
        occupant: Option<EntityId>,
    },

    /// The cell already holds a different entity.
    #[error("position {position} is already occupied by entity {occupant}")]
    Occupied {
        position: Position,
        occupant: EntityId,
    },

    /// The cell's terrain cannot hold an entity.
    #[error("position {position} has impassable terrain {terrain}")]
    Impassable {
        position: Position,
        terrain: TerrainKind,
    },

    /// The process-wide terrain catalog was already pinned.
    #[error("terrain catalog already installed")]
    CatalogAlreadyInstalled,
}

impl CoreError for GridError {
    fn kind(&self) -> ErrorKind {
        use GridError::*;
        match self {
            OutOfBounds { .. } => ErrorKind::OutOfBounds,
            InvalidDimensions { .. }
            | UnknownGlyph { .. }
            | MapNotLoaded { .. }
            | MoverMismatch { .. }
            | CatalogAlreadyInstalled => ErrorKind::InvalidOperand,
            Occupied { .. } | Impassable { .. } => ErrorKind::Rejected,
        }
    }

    fn severity(&self) -> ErrorSeverity {
        use GridError::*;
        match self {
            // Caller bugs: coordinates or references never validated
            OutOfBounds { .. }
            | InvalidDimensions { .. }
            | UnknownGlyph { .. }
            | MapNotLoaded { .. } => ErrorSeverity::Validation,

            // Occupancy bookkeeping disagrees with the caller's view
            MoverMismatch { .. } => ErrorSeverity::Internal,

            Occupied { .. } | Impassable { .. } => ErrorSeverity::Recoverable,

            CatalogAlreadyInstalled => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use GridError::*;
        match self {
            OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
            InvalidDimensions { .. } => "GRID_INVALID_DIMENSIONS",
            UnknownGlyph { .. } => "GRID_UNKNOWN_GLYPH",
            MapNotLoaded { .. } => "GRID_MAP_NOT_LOADED",
            MoverMismatch { .. } => "GRID_MOVER_MISMATCH",
            Occupied { .. } => "GRID_OCCUPIED",
            Impassable { .. } => "GRID_IMPASSABLE",
            CatalogAlreadyInstalled => "GRID_CATALOG_ALREADY_INSTALLED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_a_validation_error() {
        let error = GridError::OutOfBounds {
            position: Position::new(9, -1),
            width: 5,
            height: 5,
        };

        assert_eq!(error.kind(), ErrorKind::OutOfBounds);
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(
            error.to_string(),
            "position (9, -1) is out of bounds (map size: 5x5)"
        );
    }

    #[test]
    fn refused_mutations_are_recoverable() {
        let error = GridError::Occupied {
            position: Position::new(1, 1),
            occupant: EntityId(4),
        };

        assert_eq!(error.kind(), ErrorKind::Rejected);
        assert!(error.severity().is_recoverable());
        assert_eq!(error.error_code(), "GRID_OCCUPIED");
    }
}
