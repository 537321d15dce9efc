//! Map data loader.
//!
//! Loads a map's terrain layout and starting occupants from a RON file.
//! Terrain can be given as glyph rows, as sparse tile overrides on top of a
//! default terrain, or both (overrides applied after the rows).

use std::path::Path;

use anyhow::{Context, bail};
use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};
use tactics_core::{EntityId, GridMap, MapDimensions, MapId, Position, TerrainKind};

use crate::loaders::{LoadResult, read_file};

/// Map file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapSpec {
    pub id: u32,
    pub name: String,
    /// Required unless `layout` is given.
    #[serde(default)]
    pub dimensions: Option<(u32, u32)>,
    #[serde(default)]
    pub default_terrain: TerrainKind,
    /// Glyph rows, top row first.
    #[serde(default)]
    pub layout: Vec<String>,
    /// `(x, y, terrain)` overrides.
    #[serde(default)]
    pub tiles: Vec<(i32, i32, TerrainKind)>,
    /// `(x, y, entity)` starting occupants.
    #[serde(default)]
    pub occupants: Vec<(i32, i32, u32)>,
}

impl MapSpec {
    /// Builds the map, validating every coordinate and placement.
    pub fn build(&self) -> LoadResult<GridMap> {
        let id = MapId(self.id);
        let tiles = self
            .tiles
            .iter()
            .map(|&(x, y, terrain)| (Position::new(x, y), terrain));

        let mut map = if self.layout.is_empty() {
            let Some((width, height)) = self.dimensions else {
                bail!("map '{}' needs either `dimensions` or `layout`", self.name);
            };
            GridMap::from_tiles(
                id,
                self.name.as_str(),
                MapDimensions::new(width, height),
                self.default_terrain,
                tiles,
            )
            .with_context(|| format!("Invalid terrain for map '{}'", self.name))?
        } else {
            let mut map = GridMap::from_glyph_rows(id, self.name.as_str(), self.layout.as_slice())
                .with_context(|| format!("Invalid layout for map '{}'", self.name))?;
            if let Some((width, height)) = self.dimensions
                && map.dimensions() != MapDimensions::new(width, height)
            {
                bail!(
                    "map '{}' declares {}x{} but its layout is {}x{}",
                    self.name,
                    width,
                    height,
                    map.width(),
                    map.height()
                );
            }
            for (position, terrain) in tiles {
                map.set_terrain(position, terrain)
                    .with_context(|| format!("Invalid tile for map '{}'", self.name))?;
            }
            map
        };

        for &(x, y, entity) in &self.occupants {
            map.place_occupant(Position::new(x, y), EntityId(entity))
                .with_context(|| format!("Cannot place entity {} on map '{}'", entity, self.name))?;
        }

        Ok(map)
    }
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load and build a map from a RON file.
    pub fn load(path: &Path) -> LoadResult<GridMap> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to load map {}", path.display()))
    }

    /// Parse and build a map from RON text.
    pub fn parse(content: &str) -> LoadResult<GridMap> {
        let spec: MapSpec = ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(content)
            .context("Failed to parse map RON")?;
        spec.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_tiles_over_default_terrain() {
        let map = MapLoader::parse(
            r#"(
                id: 3,
                name: "ford",
                dimensions: (4, 2),
                default_terrain: grass,
                tiles: [(1, 0, water), (1, 1, bridge)],
                occupants: [(0, 0, 7)],
            )"#,
        )
        .unwrap();

        assert_eq!(map.id(), MapId(3));
        assert_eq!(map.name(), "ford");
        assert_eq!(map.cell(Position::new(0, 1)).unwrap().terrain(), TerrainKind::Grass);
        assert_eq!(map.cell(Position::new(1, 0)).unwrap().terrain(), TerrainKind::Water);
        assert_eq!(map.cell(Position::new(1, 1)).unwrap().terrain(), TerrainKind::Bridge);
        assert_eq!(map.occupant_position(EntityId(7)), Some(Position::new(0, 0)));
    }

    #[test]
    fn layout_rows_with_overrides() {
        let map = MapLoader::parse(
            r#"(
                id: 1,
                name: "keep",
                layout: [
                    "=#=#=",
                    "=...=",
                    "=#=#=",
                ],
                tiles: [(2, 1, road)],
            )"#,
        )
        .unwrap();

        assert_eq!(map.dimensions(), MapDimensions::new(5, 3));
        assert_eq!(map.cell(Position::new(2, 1)).unwrap().terrain(), TerrainKind::Road);
        assert_eq!(map.cell(Position::new(1, 0)).unwrap().terrain(), TerrainKind::Wall);
    }

    #[test]
    fn rejects_inconsistent_maps() {
        let missing_size = MapLoader::parse(r#"(id: 1, name: "void")"#);
        assert!(missing_size.is_err());

        let tile_outside = MapLoader::parse(
            r#"(id: 1, name: "edge", dimensions: (2, 2), tiles: [(2, 0, wall)])"#,
        );
        assert!(format!("{:#}", tile_outside.unwrap_err()).contains("out of bounds"));

        let size_mismatch = MapLoader::parse(
            r#"(id: 1, name: "liar", dimensions: (3, 3), layout: ["..", ".."])"#,
        );
        assert!(size_mismatch.is_err());

        let on_water = MapLoader::parse(
            r#"(id: 1, name: "lake", dimensions: (2, 1), default_terrain: water, occupants: [(0, 0, 1)])"#,
        );
        assert!(format!("{:#}", on_water.unwrap_err()).contains("impassable"));
    }
}
