//! Terrain kinds and the process-wide terrain catalog.
//!
//! Per-kind behaviour (movement cost, passability, combat bonuses, sight
//! blocking) is data in a fixed table indexed by [`TerrainKind`], not per-kind
//! dispatch. A catalog can be installed once at process start; until then (and
//! whenever nothing is installed) the standard table applies.

use std::sync::OnceLock;

use strum::{EnumCount, IntoEnumIterator};

use crate::state::GridError;

/// Canonical terrain classes for grid cells.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TerrainKind {
    #[default]
    Plain,
    Grass,
    Forest,
    Mountain,
    Water,
    Desert,
    Swamp,
    Road,
    Wall,
    Bridge,
    Cliff,
    Lava,
    Ice,
}

impl TerrainKind {
    /// Profile of this kind in the process-wide catalog.
    #[inline]
    pub fn profile(self) -> TerrainProfile {
        TerrainCatalog::global().profile_of(self)
    }

    pub fn is_passable(self) -> bool {
        self.profile().passable
    }

    pub fn blocks_sight(self) -> bool {
        self.profile().blocks_sight
    }

    /// Cost to enter a cell of this kind, or `None` when it cannot be entered.
    pub fn entry_cost(self) -> Option<u32> {
        self.profile().entry_cost()
    }

    /// Single-character map glyph used by text layouts and tooling.
    pub const fn glyph(self) -> char {
        match self {
            TerrainKind::Plain => '.',
            TerrainKind::Grass => ',',
            TerrainKind::Forest => 'T',
            TerrainKind::Mountain => '^',
            TerrainKind::Water => '~',
            TerrainKind::Desert => ':',
            TerrainKind::Swamp => '%',
            TerrainKind::Road => '=',
            TerrainKind::Wall => '#',
            TerrainKind::Bridge => 'H',
            TerrainKind::Cliff => '|',
            TerrainKind::Lava => '&',
            TerrainKind::Ice => '*',
        }
    }

    /// Inverse of [`TerrainKind::glyph`].
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::iter().find(|kind| kind.glyph() == glyph)
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Static rules attached to a terrain kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainProfile {
    /// Movement points spent to enter the cell. [`TerrainProfile::IMPASSABLE`]
    /// marks terrain that never admits movement.
    pub movement_cost: u32,
    /// Independent of cost: impassable terrain is never entered whatever its cost.
    pub passable: bool,
    pub defense_bonus: i32,
    pub evasion_bonus: i32,
    pub blocks_sight: bool,
}

impl TerrainProfile {
    /// Sentinel movement cost for terrain that cannot be entered.
    pub const IMPASSABLE: u32 = u32::MAX;

    pub const fn passable(movement_cost: u32, defense_bonus: i32, evasion_bonus: i32) -> Self {
        Self {
            movement_cost,
            passable: true,
            defense_bonus,
            evasion_bonus,
            blocks_sight: false,
        }
    }

    pub const fn impassable(defense_bonus: i32, evasion_bonus: i32) -> Self {
        Self {
            movement_cost: Self::IMPASSABLE,
            passable: false,
            defense_bonus,
            evasion_bonus,
            blocks_sight: false,
        }
    }

    /// Marks the profile as opaque to line-of-sight checks (builder pattern).
    #[must_use]
    pub const fn blocking_sight(mut self) -> Self {
        self.blocks_sight = true;
        self
    }

    /// Passability and cost queried together: `Some(cost)` only when the
    /// terrain may be entered.
    #[inline]
    pub const fn entry_cost(&self) -> Option<u32> {
        if self.passable && self.movement_cost != Self::IMPASSABLE {
            Some(self.movement_cost)
        } else {
            None
        }
    }
}

/// Fixed table of terrain profiles indexed by [`TerrainKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainCatalog {
    profiles: [TerrainProfile; TerrainKind::COUNT],
}

static GLOBAL: OnceLock<TerrainCatalog> = OnceLock::new();

impl TerrainCatalog {
    /// Built-in terrain rules.
    pub const fn standard() -> Self {
        // Order follows the `TerrainKind` declaration.
        Self {
            profiles: [
                TerrainProfile::passable(1, 0, 0),                    // plain
                TerrainProfile::passable(1, 0, 5),                    // grass
                TerrainProfile::passable(2, 10, 20).blocking_sight(), // forest
                TerrainProfile::passable(3, 20, 10).blocking_sight(), // mountain
                TerrainProfile::impassable(0, 0),                     // water
                TerrainProfile::passable(2, 0, -5),                   // desert
                TerrainProfile::passable(3, -5, -10),                 // swamp
                TerrainProfile::passable(1, 0, 0),                    // road
                TerrainProfile::impassable(0, 0).blocking_sight(),    // wall
                TerrainProfile::passable(1, 0, 0),                    // bridge
                TerrainProfile::impassable(0, 0),                     // cliff
                TerrainProfile::passable(10, 0, 0),                   // lava
                TerrainProfile::passable(1, 0, -10),                  // ice
            ],
        }
    }

    /// Total lookup over the closed terrain enumeration.
    #[inline]
    pub fn profile_of(&self, kind: TerrainKind) -> TerrainProfile {
        self.profiles[kind.index()]
    }

    /// Replaces the profile of one kind (builder pattern).
    #[must_use]
    pub fn with_profile(mut self, kind: TerrainKind, profile: TerrainProfile) -> Self {
        self.profiles[kind.index()] = profile;
        self
    }

    /// Iterates `(kind, profile)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TerrainKind, TerrainProfile)> + '_ {
        TerrainKind::iter().map(|kind| (kind, self.profile_of(kind)))
    }

    /// Cheapest cost of any enterable terrain, or 0 when nothing can be
    /// entered. Lower bound used by admissible search heuristics.
    pub fn min_entry_cost(&self) -> u32 {
        self.profiles
            .iter()
            .filter_map(TerrainProfile::entry_cost)
            .min()
            .unwrap_or(0)
    }

    /// Installs the process-wide catalog.
    ///
    /// Succeeds only once, and only before any terrain lookup has pinned the
    /// standard table.
    pub fn install(catalog: TerrainCatalog) -> Result<(), GridError> {
        GLOBAL
            .set(catalog)
            .map_err(|_| GridError::CatalogAlreadyInstalled)?;
        tracing::debug!("terrain catalog installed");
        Ok(())
    }

    /// The installed catalog, pinning the standard table on first use.
    pub fn global() -> &'static TerrainCatalog {
        GLOBAL.get_or_init(TerrainCatalog::standard)
    }
}

impl Default for TerrainCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
