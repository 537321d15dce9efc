//! Cells reachable within a movement budget

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;

use tactics_core::{EntityId, MapId, Pathfinder, Position};

use super::render::{draw, print_header};
use crate::utils::{MapArgs, OutputFormat, parse_position, print_json};

/// Stand-in id for a mover that is not placed on the map.
const UNPLACED_MOVER: EntityId = EntityId(u32::MAX);

/// List the cells reachable within a movement budget
#[derive(Parser)]
pub struct Reach {
    #[command(flatten)]
    target: MapArgs,

    /// Start cell
    #[arg(value_name = "FROM", value_parser = parse_position)]
    from: Position,

    /// Movement points (defaults to `default_movement_budget` from config.toml)
    #[arg(short, long)]
    budget: Option<u32>,

    /// Mover id (defaults to the occupant of FROM)
    #[arg(short, long)]
    entity: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct ReachReport {
    map: MapId,
    mover: EntityId,
    origin: Position,
    budget: u32,
    cells: Vec<ReachCell>,
}

#[derive(Serialize)]
struct ReachCell {
    position: Position,
    cost: u32,
}

impl Reach {
    pub fn execute(self) -> Result<()> {
        let loaded = self.target.load()?;
        let map = &loaded.map;
        let budget = self
            .budget
            .unwrap_or(loaded.config.default_movement_budget);
        let mover = match self.entity {
            Some(id) => EntityId(id),
            None => map
                .cell(self.from)?
                .occupant()
                .unwrap_or(UNPLACED_MOVER),
        };

        let reach = Pathfinder::new(map, loaded.rules).find_reachable(mover, self.from, budget)?;

        match self.format {
            OutputFormat::Json => print_json(&ReachReport {
                map: map.id(),
                mover,
                origin: reach.origin(),
                budget: reach.budget(),
                cells: reach
                    .iter()
                    .map(|(position, cost)| ReachCell { position, cost })
                    .collect(),
            })?,
            OutputFormat::Summary => {
                print_header(map);
                println!(
                    "{} {} cells within {} movement points of {}",
                    style("Reachable:").bold().green(),
                    reach.len(),
                    budget,
                    self.from
                );
                println!();

                // Last digit of the cost, origin as `S`
                let marks: BTreeMap<Position, char> = reach
                    .iter()
                    .map(|(position, cost)| {
                        let mark = if position == reach.origin() {
                            'S'
                        } else {
                            char::from_digit(cost % 10, 10).unwrap_or('?')
                        };
                        (position, mark)
                    })
                    .collect();
                print!("{}", draw(map, &marks));
            }
        }

        Ok(())
    }
}
