use std::collections::BTreeMap;

use crate::config::MovementRules;
use crate::pathfinding::Pathfinder;
use crate::state::{GridError, GridMap, MapId};

/// Owner of every loaded map, keyed by id.
///
/// Module lifecycle hooks load maps on activation and unload them on
/// shutdown; everything else borrows maps from here.
#[derive(Clone, Debug, Default)]
pub struct MapRegistry {
    maps: BTreeMap<MapId, GridMap>,
}

impl MapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `map` under its own id, returning the map it replaces.
    pub fn load(&mut self, map: GridMap) -> Option<GridMap> {
        let id = map.id();
        tracing::debug!(
            "loading {} '{}' ({}x{})",
            id,
            map.name(),
            map.width(),
            map.height()
        );
        self.maps.insert(id, map)
    }

    pub fn unload(&mut self, id: MapId) -> Result<GridMap, GridError> {
        let map = self.maps.remove(&id).ok_or(GridError::MapNotLoaded { id })?;
        tracing::debug!("unloaded {} '{}'", id, map.name());
        Ok(map)
    }

    pub fn get(&self, id: MapId) -> Result<&GridMap, GridError> {
        self.maps.get(&id).ok_or(GridError::MapNotLoaded { id })
    }

    pub fn get_mut(&mut self, id: MapId) -> Result<&mut GridMap, GridError> {
        self.maps.get_mut(&id).ok_or(GridError::MapNotLoaded { id })
    }

    pub fn contains(&self, id: MapId) -> bool {
        self.maps.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Loaded map ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = MapId> + '_ {
        self.maps.keys().copied()
    }

    /// Pathfinder borrowing the loaded map `id`.
    pub fn pathfinder(&self, id: MapId, rules: MovementRules) -> Result<Pathfinder<'_>, GridError> {
        Ok(Pathfinder::new(self.get(id)?, rules))
    }
}
