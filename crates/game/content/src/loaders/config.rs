//! Grid configuration loader.

use std::path::Path;

use anyhow::Context;
use tactics_core::GridConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for grid configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<GridConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to load config {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GridConfig> {
        toml::from_str(content).context("Failed to parse config TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{DiagonalPolicy, DistanceMetric};

    #[test]
    fn empty_file_is_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GridConfig::default());
    }

    #[test]
    fn orthogonal_config() {
        let config = ConfigLoader::parse(
            r#"
            range_metric = "manhattan"
            default_movement_budget = 6

            [movement]
            diagonal = "forbidden"
            "#,
        )
        .unwrap();

        assert_eq!(config.movement.diagonal, DiagonalPolicy::Forbidden);
        assert_eq!(config.range_metric, DistanceMetric::Manhattan);
        assert_eq!(config.default_movement_budget, 6);
    }
}
