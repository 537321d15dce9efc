//! Content factory for building grid content from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tactics_core::{GridConfig, GridMap, MapRegistry, TerrainCatalog};

use crate::loaders::{ConfigLoader, LoadResult, MapLoader, TerrainLoader};

/// Content factory that loads all grid content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── terrain.toml     (optional)
/// └── maps/
///     ├── crossing.ron
///     └── keep.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load grid configuration from `config.toml`, or the defaults when the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<GridConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GridConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the terrain catalog from `terrain.toml`, or the standard catalog
    /// when the file does not exist.
    pub fn load_terrain(&self) -> LoadResult<TerrainCatalog> {
        let path = self.data_dir.join("terrain.toml");
        if !path.exists() {
            return Ok(TerrainCatalog::standard());
        }
        TerrainLoader::load(&path)
    }

    /// Load the terrain catalog and install it process-wide.
    ///
    /// Must run before any map is loaded or queried.
    pub fn install_terrain(&self) -> LoadResult<()> {
        let catalog = self.load_terrain()?;
        TerrainCatalog::install(catalog).context("Failed to install terrain catalog")
    }

    /// Load a map from `maps/{map_name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `map_name` - Name of the map file (without `.ron` extension)
    pub fn load_map(&self, map_name: &str) -> LoadResult<GridMap> {
        MapLoader::load(&self.map_path(map_name))
    }

    /// Names of every map under `maps/`, sorted.
    pub fn map_names(&self) -> LoadResult<Vec<String>> {
        let maps_dir = self.data_dir.join("maps");
        let entries = std::fs::read_dir(&maps_dir)
            .with_context(|| format!("Failed to list maps in {}", maps_dir.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Load every map under `maps/` into a fresh registry.
    ///
    /// Fails when two files declare the same map id.
    pub fn load_registry(&self) -> LoadResult<MapRegistry> {
        let mut registry = MapRegistry::new();
        for name in self.map_names()? {
            let map = self.load_map(&name)?;
            let id = map.id();
            if registry.load(map).is_some() {
                anyhow::bail!("{} is declared by more than one map file (last: {})", id, name);
            }
        }
        Ok(registry)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn map_path(&self, map_name: &str) -> PathBuf {
        self.data_dir.join("maps").join(format!("{}.ron", map_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{MapId, Position, TerrainKind};

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.map_path("keep"),
            Path::new("/tmp/data").join("maps").join("keep.ron")
        );
    }

    #[test]
    fn optional_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), GridConfig::default());
        assert_eq!(factory.load_terrain().unwrap(), TerrainCatalog::standard());
        assert!(factory.load_map("missing").is_err());
    }

    #[test]
    fn loads_every_map_into_registry() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "maps/b_field.ron",
            r#"(id: 2, name: "field", dimensions: (3, 3))"#,
        );
        write(
            dir.path(),
            "maps/a_keep.ron",
            r#"(id: 1, name: "keep", layout: [".#.", "..."])"#,
        );
        write(dir.path(), "maps/notes.txt", "not a map");
        write(dir.path(), "config.toml", "default_movement_budget = 3\n");

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.map_names().unwrap(), vec!["a_keep", "b_field"]);
        assert_eq!(factory.load_config().unwrap().default_movement_budget, 3);

        let registry = factory.load_registry().unwrap();
        assert_eq!(registry.len(), 2);
        let keep = registry.get(MapId(1)).unwrap();
        assert_eq!(keep.cell(Position::new(1, 0)).unwrap().terrain(), TerrainKind::Wall);
    }

    #[test]
    fn duplicate_map_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "maps/one.ron", r#"(id: 5, name: "one", dimensions: (2, 2))"#);
        write(dir.path(), "maps/two.ron", r#"(id: 5, name: "two", dimensions: (2, 2))"#);

        let error = ContentFactory::new(dir.path()).load_registry().unwrap_err();
        assert!(error.to_string().contains("map:5"));
    }
}
