//! Terrain catalog loader.
//!
//! Reads per-terrain overrides from TOML and applies them on top of the
//! standard catalog. Kinds not mentioned keep their standard profile.
//!
//! ```toml
//! [forest]
//! movement_cost = 3
//! blocks_sight = false
//!
//! [ice]
//! passable = false
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use tactics_core::{TerrainCatalog, TerrainKind, TerrainProfile};

use crate::loaders::{LoadResult, read_file};

/// Partial profile; unset fields keep the standard value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TerrainOverride {
    pub movement_cost: Option<u32>,
    pub passable: Option<bool>,
    pub defense_bonus: Option<i32>,
    pub evasion_bonus: Option<i32>,
    pub blocks_sight: Option<bool>,
}

impl TerrainOverride {
    /// Applies the override to `base`.
    ///
    /// Making a kind impassable drops its cost to the sentinel; making it
    /// passable requires a real cost, either given here or already in `base`.
    pub fn apply(&self, kind: TerrainKind, base: TerrainProfile) -> LoadResult<TerrainProfile> {
        let passable = self.passable.unwrap_or(base.passable);
        let movement_cost = match (passable, self.movement_cost) {
            (false, _) => TerrainProfile::IMPASSABLE,
            (true, Some(0)) => bail!("{kind}: movement_cost must be at least 1"),
            (true, Some(TerrainProfile::IMPASSABLE)) => {
                bail!("{kind}: movement_cost {} is reserved for impassable terrain", TerrainProfile::IMPASSABLE)
            }
            (true, Some(cost)) => cost,
            (true, None) if base.entry_cost().is_some() => base.movement_cost,
            (true, None) => bail!("{kind}: passable terrain needs a movement_cost"),
        };

        Ok(TerrainProfile {
            movement_cost,
            passable,
            defense_bonus: self.defense_bonus.unwrap_or(base.defense_bonus),
            evasion_bonus: self.evasion_bonus.unwrap_or(base.evasion_bonus),
            blocks_sight: self.blocks_sight.unwrap_or(base.blocks_sight),
        })
    }
}

/// Loader for terrain catalog overrides from TOML files.
pub struct TerrainLoader;

impl TerrainLoader {
    /// Load overrides from a TOML file and apply them to the standard catalog.
    pub fn load(path: &Path) -> LoadResult<TerrainCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to load terrain {}", path.display()))
    }

    /// Parse overrides from TOML text and apply them to the standard catalog.
    pub fn parse(content: &str) -> LoadResult<TerrainCatalog> {
        let overrides: BTreeMap<String, TerrainOverride> =
            toml::from_str(content).context("Failed to parse terrain TOML")?;

        overrides
            .iter()
            .try_fold(TerrainCatalog::standard(), |catalog, (name, entry)| {
                let kind: TerrainKind = name
                    .parse()
                    .with_context(|| format!("Unknown terrain kind '{name}'"))?;
                let profile = entry.apply(kind, catalog.profile_of(kind))?;
                Ok(catalog.with_profile(kind, profile))
            })
    }
}
