//! Cheapest path between two cells

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;

use tactics_core::{MapId, Pathfinder, Position};

use super::render::{draw, path_marks, print_header};
use crate::utils::{MapArgs, OutputFormat, parse_position, print_json};

/// Find the cheapest path between two cells
#[derive(Parser)]
pub struct Path {
    #[command(flatten)]
    target: MapArgs,

    /// Start cell; its occupant, if any, is the mover
    #[arg(value_name = "FROM", value_parser = parse_position)]
    from: Position,

    /// Goal cell
    #[arg(value_name = "TO", value_parser = parse_position)]
    to: Position,

    /// Walk through cells held by other entities
    #[arg(long)]
    ignore_occupation: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct PathReport {
    map: MapId,
    from: Position,
    to: Position,
    found: bool,
    cost: u32,
    positions: Vec<Position>,
}

impl Path {
    pub fn execute(self) -> Result<()> {
        let loaded = self.target.load()?;
        let map = &loaded.map;
        let result =
            Pathfinder::new(map, loaded.rules).find_path(self.from, self.to, self.ignore_occupation);

        match self.format {
            OutputFormat::Json => print_json(&PathReport {
                map: map.id(),
                from: self.from,
                to: self.to,
                found: result.is_found(),
                cost: result.cost(),
                positions: result.positions().to_vec(),
            })?,
            OutputFormat::Summary => {
                print_header(map);
                if result.is_found() {
                    println!(
                        "{} {} steps, cost {}",
                        style("Path:").bold().green(),
                        result.steps(),
                        result.cost()
                    );
                    let route: Vec<String> =
                        result.positions().iter().map(ToString::to_string).collect();
                    println!("  {}", route.join(" -> "));
                } else {
                    println!(
                        "{} {} -> {}",
                        style("No path:").bold().red(),
                        self.from,
                        self.to
                    );
                }
                println!();
                print!("{}", draw(map, &path_marks(result.positions())));
            }
        }

        Ok(())
    }
}
