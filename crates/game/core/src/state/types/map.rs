use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::config::GridConfig;
use crate::env::TerrainKind;
use crate::geometry::DistanceMetric;
use crate::state::{Cell, CellEffects, EntityId, GridError, MapId, Position};

/// Width and height of a map, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `0 <= x < width` and `0 <= y < height`.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn validate(self) -> Result<Self, GridError> {
        let in_range = |side: u32| (1..=GridConfig::MAX_DIMENSION).contains(&side);
        if in_range(self.width) && in_range(self.height) {
            Ok(self)
        } else {
            Err(GridError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Rectangular grid of cells with identity and timestamps.
///
/// Dimensions are fixed at construction. Every coordinate passed to a public
/// accessor is validated against them; out-of-range coordinates produce
/// [`GridError::OutOfBounds`], never a clamped cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridMapRepr"))]
pub struct GridMap {
    id: MapId,
    name: String,
    dimensions: MapDimensions,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    /// Row-major.
    cells: Vec<Cell>,
}

/// Wire shape of [`GridMap`]; checked before it becomes a map.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "GridMap")]
struct GridMapRepr {
    id: MapId,
    name: String,
    dimensions: MapDimensions,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridMapRepr> for GridMap {
    type Error = GridError;

    fn try_from(repr: GridMapRepr) -> Result<Self, GridError> {
        let dimensions = repr.dimensions.validate()?;
        if repr.cells.len() != dimensions.area() {
            return Err(GridError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        Ok(Self {
            id: repr.id,
            name: repr.name,
            dimensions,
            created_at: repr.created_at,
            modified_at: repr.modified_at,
            cells: repr.cells,
        })
    }
}

impl GridMap {
    /// Creates a map filled with `fill` terrain.
    pub fn new(
        id: MapId,
        name: impl Into<String>,
        dimensions: MapDimensions,
        fill: TerrainKind,
    ) -> Result<Self, GridError> {
        let dimensions = dimensions.validate()?;
        let now = Utc::now();

        Ok(Self {
            id,
            name: name.into(),
            dimensions,
            created_at: now,
            modified_at: now,
            cells: vec![Cell::new(fill); dimensions.area()],
        })
    }

    /// Creates a map filled with `default` terrain, then applies `tiles`.
    pub fn from_tiles<I>(
        id: MapId,
        name: impl Into<String>,
        dimensions: MapDimensions,
        default: TerrainKind,
        tiles: I,
    ) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (Position, TerrainKind)>,
    {
        let mut map = Self::new(id, name, dimensions, default)?;
        for (position, terrain) in tiles {
            map.slot_mut(position)?.set_terrain(terrain);
        }
        Ok(map)
    }

    /// Builds a map from text rows of terrain glyphs (see [`TerrainKind::glyph`]).
    ///
    /// Row `y` of the layout is map row `y`; all rows must have the same length.
    pub fn from_glyph_rows<S>(id: MapId, name: impl Into<String>, rows: &[S]) -> Result<Self, GridError>
    where
        S: AsRef<str>,
    {
        let height = u32::try_from(rows.len()).unwrap_or(u32::MAX);
        let width = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .and_then(|count| u32::try_from(count).ok())
            .unwrap_or(0);
        let mut map = Self::new(id, name, MapDimensions::new(width, height), TerrainKind::Plain)?;

        // Both sides are within MAX_DIMENSION from here on.
        for (row, y) in rows.iter().zip(0..) {
            let row = row.as_ref();
            if row.chars().count() != width as usize {
                return Err(GridError::InvalidDimensions { width, height });
            }
            for (glyph, x) in row.chars().zip(0..) {
                let position = Position::new(x, y);
                let terrain = TerrainKind::from_glyph(glyph)
                    .ok_or(GridError::UnknownGlyph { glyph, position })?;
                map.slot_mut(position)?.set_terrain(terrain);
            }
        }
        Ok(map)
    }

    pub fn id(&self) -> MapId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// True when `position` lies inside the grid.
    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// Ok when `position` lies inside the grid, `OutOfBounds` otherwise.
    pub fn check_bounds(&self, position: Position) -> Result<(), GridError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(self.out_of_bounds(position))
        }
    }

    fn out_of_bounds(&self, position: Position) -> GridError {
        GridError::OutOfBounds {
            position,
            width: self.dimensions.width,
            height: self.dimensions.height,
        }
    }

    pub(crate) fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    pub(crate) fn position_of(&self, index: usize) -> Position {
        let width = self.dimensions.width as usize;
        Position::new((index % width) as i32, (index / width) as i32)
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    /// Cell at `position`, or `None` outside the grid.
    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.index(position).and_then(|index| self.cells.get(index))
    }

    pub fn cell(&self, position: Position) -> Result<&Cell, GridError> {
        self.get(position).ok_or_else(|| self.out_of_bounds(position))
    }

    /// Mutable cell access. Counts as a modification of the map.
    pub fn cell_mut(&mut self, position: Position) -> Result<&mut Cell, GridError> {
        self.check_bounds(position)?;
        self.touch();
        self.slot_mut(position)
    }

    /// Mutable cell access that leaves `modified_at` alone.
    fn slot_mut(&mut self, position: Position) -> Result<&mut Cell, GridError> {
        let out_of_bounds = self.out_of_bounds(position);
        self.index(position)
            .and_then(|index| self.cells.get_mut(index))
            .ok_or(out_of_bounds)
    }

    /// All cells with their positions, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.position_of(index), cell))
    }

    pub fn set_terrain(&mut self, position: Position, terrain: TerrainKind) -> Result<(), GridError> {
        self.cell_mut(position)?.set_terrain(terrain);
        Ok(())
    }

    /// Places `entity` at `position`; refuses occupied or impassable cells.
    pub fn place_occupant(&mut self, position: Position, entity: EntityId) -> Result<(), GridError> {
        self.slot_mut(position)?
            .set_occupant(entity)
            .map_err(|refusal| refusal.at(position))?;
        self.touch();
        Ok(())
    }

    pub fn clear_occupant(&mut self, position: Position) -> Result<Option<EntityId>, GridError> {
        Ok(self.cell_mut(position)?.clear_occupant())
    }

    /// Moves `entity` from `from` to `to` as one step.
    ///
    /// On refusal the entity stays at `from` and the map is unchanged.
    pub fn move_occupant(
        &mut self,
        entity: EntityId,
        from: Position,
        to: Position,
    ) -> Result<(), GridError> {
        self.check_bounds(to)?;
        let occupant = self.cell(from)?.occupant();
        if occupant != Some(entity) {
            return Err(GridError::MoverMismatch {
                mover: entity,
                position: from,
                occupant,
            });
        }
        if from == to {
            return Ok(());
        }

        self.slot_mut(to)?
            .set_occupant(entity)
            .map_err(|refusal| refusal.at(to))?;
        self.slot_mut(from)?.clear_occupant();
        self.touch();
        Ok(())
    }

    /// Position currently holding `entity`, if it stands on this map.
    pub fn occupant_position(&self, entity: EntityId) -> Option<Position> {
        self.occupants()
            .find(|(_, occupant)| *occupant == entity)
            .map(|(position, _)| position)
    }

    /// Every occupied position with its occupant, row by row.
    pub fn occupants(&self) -> impl Iterator<Item = (Position, EntityId)> + '_ {
        self.cells()
            .filter_map(|(position, cell)| cell.occupant().map(|occupant| (position, occupant)))
    }

    pub fn mark_explored(&mut self, position: Position) -> Result<(), GridError> {
        self.cell_mut(position)?.mark_explored();
        Ok(())
    }

    pub fn set_visible(&mut self, position: Position, visible: bool) -> Result<(), GridError> {
        self.cell_mut(position)?.set_visible(visible);
        Ok(())
    }

    /// Hides every cell; exploration flags are kept.
    pub fn clear_visibility(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.set_visible(false));
        self.touch();
    }

    pub fn add_effect(&mut self, position: Position, effect: CellEffects) -> Result<(), GridError> {
        self.cell_mut(position)?.add_effect(effect);
        Ok(())
    }

    /// Removes `effect` from every cell, e.g. when a movement preview closes.
    pub fn clear_effects_everywhere(&mut self, effect: CellEffects) {
        self.cells.iter_mut().for_each(|cell| cell.remove_effect(effect));
        self.touch();
    }

    /// Every in-bounds position within `range` of `center` under `metric`,
    /// center included, produced lazily row by row.
    pub fn positions_in_range(
        &self,
        center: Position,
        range: u32,
        metric: DistanceMetric,
    ) -> Result<impl Iterator<Item = Position> + use<>, GridError> {
        self.check_bounds(center)?;

        let reach = i32::try_from(range).unwrap_or(i32::MAX);
        let max_x = self.dimensions.width as i32 - 1;
        let max_y = self.dimensions.height as i32 - 1;
        let (min_x, max_x) = (center.x.saturating_sub(reach).max(0), center.x.saturating_add(reach).min(max_x));
        let (min_y, max_y) = (center.y.saturating_sub(reach).max(0), center.y.saturating_add(reach).min(max_y));

        Ok((min_y..=max_y)
            .flat_map(move |y| (min_x..=max_x).map(move |x| Position::new(x, y)))
            .filter(move |position| metric.distance(center, *position) <= range))
    }

    /// SHA-256 over the dimensions and terrain layout.
    ///
    /// Occupants, visibility and effects are excluded: two maps with the same
    /// digest yield the same pathfinding results once occupancy matches.
    pub fn terrain_digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.dimensions.width.to_le_bytes());
        hasher.update(self.dimensions.height.to_le_bytes());
        for cell in &self.cells {
            hasher.update([cell.terrain() as u8]);
        }
        hasher.finalize().into()
    }
}
