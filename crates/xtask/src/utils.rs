//! Utility functions for xtask commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tactics_content::ContentFactory;
use tactics_core::{GridConfig, GridMap, MovementRules, Position};

use crate::dirs;

/// Map selection shared by every query command.
#[derive(Args)]
pub struct MapArgs {
    /// Map file under `maps/`, without the `.ron` extension
    #[arg(value_name = "MAP")]
    pub map: String,

    /// Content directory (defaults to $TACTICS_DATA_DIR, then ./data)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Force 4-directional movement regardless of config.toml
    #[arg(long)]
    pub orthogonal: bool,
}

/// A map loaded together with the content it was configured with.
pub struct Loaded {
    pub map: GridMap,
    pub config: GridConfig,
    pub rules: MovementRules,
}

impl MapArgs {
    /// Install the terrain catalog, then load config and map.
    pub fn load(&self) -> Result<Loaded> {
        let data_dir = dirs::data_dir(self.data_dir.clone());
        tracing::debug!("loading content from {}", data_dir.display());

        let factory = ContentFactory::new(&data_dir);
        factory.install_terrain()?;
        let config = factory.load_config()?;
        let map = factory
            .load_map(&self.map)
            .with_context(|| format!("Hint: available maps live in {}", data_dir.join("maps").display()))?;

        tracing::info!(
            "loaded {} '{}' ({}x{})",
            map.id(),
            map.name(),
            map.width(),
            map.height()
        );

        let rules = if self.orthogonal {
            MovementRules::ORTHOGONAL
        } else {
            config.movement
        };

        Ok(Loaded { map, config, rules })
    }
}

/// Output format
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary with a map overlay
    Summary,
    /// Full JSON output
    Json,
}

/// Parses `x,y` (spaces and surrounding parentheses allowed).
pub fn parse_position(raw: &str) -> Result<Position, String> {
    let trimmed = raw.trim().trim_start_matches('(').trim_end_matches(')');
    let (x, y) = trimmed
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{raw}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate `{}`: {}", part.trim(), e))
    };
    Ok(Position::new(parse(x)?, parse(y)?))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report to JSON")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_parse_with_or_without_parentheses() {
        assert_eq!(parse_position("3,4"), Ok(Position::new(3, 4)));
        assert_eq!(parse_position(" (-1, 7) "), Ok(Position::new(-1, 7)));
        assert!(parse_position("3").is_err());
        assert!(parse_position("a,1").is_err());
    }
}
