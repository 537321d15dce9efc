use crate::geometry::DistanceMetric;

/// How diagonal steps are priced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DiagonalPolicy {
    /// Diagonal steps cost the destination cell's flat movement cost, exactly
    /// like orthogonal steps. No √2 scaling.
    #[default]
    DestinationCost,
    /// Only the four orthogonal directions are expanded.
    Forbidden,
}

/// Movement rules shared by every pathfinder query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementRules {
    pub diagonal: DiagonalPolicy,
}

impl MovementRules {
    /// 8-directional movement at flat destination cost.
    pub const DEFAULT: Self = Self {
        diagonal: DiagonalPolicy::DestinationCost,
    };

    /// 4-directional movement.
    pub const ORTHOGONAL: Self = Self {
        diagonal: DiagonalPolicy::Forbidden,
    };

    pub const fn allows_diagonals(&self) -> bool {
        matches!(self.diagonal, DiagonalPolicy::DestinationCost)
    }

    /// Metric whose unit ball is the set of positions one step away.
    pub const fn step_metric(&self) -> DistanceMetric {
        match self.diagonal {
            DiagonalPolicy::DestinationCost => DistanceMetric::Chebyshev,
            DiagonalPolicy::Forbidden => DistanceMetric::Manhattan,
        }
    }
}

/// Grid configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Movement rules handed to every pathfinder built from this config.
    pub movement: MovementRules,
    /// Metric used by range abilities; keep it consistent with `movement`.
    pub range_metric: DistanceMetric,
    /// Movement points granted when a caller does not supply a budget.
    pub default_movement_budget: u32,
}

impl GridConfig {
    // ===== compile-time constants =====
    /// Largest accepted width or height, in cells.
    pub const MAX_DIMENSION: u32 = 1024;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MOVEMENT_BUDGET: u32 = 5;

    pub fn new() -> Self {
        Self {
            movement: MovementRules::DEFAULT,
            range_metric: DistanceMetric::Chebyshev,
            default_movement_budget: Self::DEFAULT_MOVEMENT_BUDGET,
        }
    }

    /// Config for 4-directional games: orthogonal movement and diamond ranges.
    pub fn orthogonal() -> Self {
        Self {
            movement: MovementRules::ORTHOGONAL,
            range_metric: DistanceMetric::Manhattan,
            ..Self::new()
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_eight_directional_flat_cost() {
        let config = GridConfig::default();

        assert_eq!(config.movement, MovementRules::DEFAULT);
        assert_eq!(config.movement.diagonal, DiagonalPolicy::DestinationCost);
        assert!(config.movement.allows_diagonals());
        assert_eq!(config.range_metric, config.movement.step_metric());
    }

    #[test]
    fn orthogonal_config_uses_manhattan_ranges() {
        let config = GridConfig::orthogonal();

        assert!(!config.movement.allows_diagonals());
        assert_eq!(config.range_metric, DistanceMetric::Manhattan);
        assert_eq!(config.default_movement_budget, GridConfig::DEFAULT_MOVEMENT_BUDGET);
    }
}
