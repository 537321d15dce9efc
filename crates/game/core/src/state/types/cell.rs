use bitflags::bitflags;

use crate::env::{TerrainKind, TerrainProfile};
use crate::state::{EntityId, GridError, Position};

bitflags! {
    /// Transient presentation tags attached to a cell.
    ///
    /// Pathfinding ignores these entirely; they only carry what the UI should
    /// draw on top of the terrain.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CellEffects: u16 {
        const MOVE_RANGE   = 1 << 0;
        const ATTACK_RANGE = 1 << 1;
        const PATH_PREVIEW = 1 << 2;
        const SELECTED     = 1 << 3;
        const HOVER        = 1 << 4;
        const FIRE         = 1 << 5;
        const SMOKE        = 1 << 6;
        const HEAL_AURA    = 1 << 7;
    }
}

/// Why a cell refused an occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OccupancyRefusal {
    Occupied(EntityId),
    Impassable(TerrainKind),
}

impl OccupancyRefusal {
    /// Attaches the cell position, producing the caller-facing error.
    pub fn at(self, position: Position) -> GridError {
        match self {
            OccupancyRefusal::Occupied(occupant) => GridError::Occupied { position, occupant },
            OccupancyRefusal::Impassable(terrain) => GridError::Impassable { position, terrain },
        }
    }
}

/// Mutable state of one grid position.
///
/// Owned by its [`GridMap`](super::GridMap) and addressed by index; the cell
/// itself does not know its coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    terrain: TerrainKind,
    occupant: Option<EntityId>,
    visible: bool,
    explored: bool,
    effects: CellEffects,
}

impl Cell {
    pub fn new(terrain: TerrainKind) -> Self {
        Self {
            terrain,
            ..Self::default()
        }
    }

    pub fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    pub fn profile(&self) -> TerrainProfile {
        self.terrain.profile()
    }

    /// Replaces the terrain. Occupancy is left untouched, even when the new
    /// terrain is impassable: the occupant is expected to be displaced by
    /// whichever rule changed the terrain.
    pub fn set_terrain(&mut self, terrain: TerrainKind) {
        self.terrain = terrain;
    }

    pub fn occupant(&self) -> Option<EntityId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Places `entity` on the cell.
    ///
    /// Refuses rather than overwriting when another entity is present, and
    /// refuses impassable terrain. Placing the current occupant again is a no-op.
    pub fn set_occupant(&mut self, entity: EntityId) -> Result<(), OccupancyRefusal> {
        match self.occupant {
            Some(current) if current == entity => return Ok(()),
            Some(current) => return Err(OccupancyRefusal::Occupied(current)),
            None => {}
        }

        if !self.terrain.is_passable() {
            return Err(OccupancyRefusal::Impassable(self.terrain));
        }

        self.occupant = Some(entity);
        Ok(())
    }

    /// Removes and returns the occupant, if any.
    pub fn clear_occupant(&mut self) -> Option<EntityId> {
        self.occupant.take()
    }

    pub fn effects(&self) -> CellEffects {
        self.effects
    }

    pub fn has_effect(&self, effect: CellEffects) -> bool {
        self.effects.contains(effect)
    }

    pub fn add_effect(&mut self, effect: CellEffects) {
        self.effects.insert(effect);
    }

    pub fn remove_effect(&mut self, effect: CellEffects) {
        self.effects.remove(effect);
    }

    pub fn clear_effects(&mut self) {
        self.effects = CellEffects::empty();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_explored(&self) -> bool {
        self.explored
    }

    /// Marks the cell explored. Exploration is never reset.
    pub fn mark_explored(&mut self) {
        self.explored = true;
    }

    /// Movement points needed to enter the cell; the impassable sentinel for
    /// terrain that cannot be entered.
    pub fn movement_cost(&self) -> u32 {
        self.profile().movement_cost
    }

    pub fn defense_bonus(&self) -> i32 {
        self.profile().defense_bonus
    }

    pub fn evasion_bonus(&self) -> i32 {
        self.profile().evasion_bonus
    }

    pub fn blocks_sight(&self) -> bool {
        self.profile().blocks_sight
    }

    /// Terrain passable and, unless `ignore_occupation`, nobody standing here.
    pub fn is_passable(&self, ignore_occupation: bool) -> bool {
        self.terrain.is_passable() && (ignore_occupation || self.occupant.is_none())
    }

    /// Terrain passable and either empty or already held by `entity`.
    pub fn can_be_entered_by(&self, entity: Option<EntityId>) -> bool {
        if !self.terrain.is_passable() {
            return false;
        }
        match self.occupant {
            None => true,
            Some(occupant) => Some(occupant) == entity,
        }
    }
}
