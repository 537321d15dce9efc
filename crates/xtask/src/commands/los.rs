//! Line of sight between two cells

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;

use tactics_core::{MapId, Pathfinder, Position};

use super::render::{draw, print_header};
use crate::utils::{MapArgs, OutputFormat, parse_position, print_json};

/// Check line of sight between two cells
#[derive(Parser)]
pub struct Los {
    #[command(flatten)]
    target: MapArgs,

    /// Observer cell
    #[arg(value_name = "FROM", value_parser = parse_position)]
    from: Position,

    /// Target cell
    #[arg(value_name = "TO", value_parser = parse_position)]
    to: Position,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct LosReport {
    map: MapId,
    from: Position,
    to: Position,
    visible: bool,
    line: Vec<Position>,
    blockers: Vec<Position>,
}

impl Los {
    pub fn execute(self) -> Result<()> {
        let loaded = self.target.load()?;
        let map = &loaded.map;
        let pathfinder = Pathfinder::new(map, loaded.rules);

        let visible = pathfinder.has_line_of_sight(self.from, self.to)?;
        let line: Vec<Position> = pathfinder.line_points(self.from, self.to).collect();
        let blockers: Vec<Position> = line
            .iter()
            .copied()
            .filter(|p| *p != self.from && *p != self.to)
            .filter(|p| map.get(*p).is_some_and(|cell| cell.blocks_sight()))
            .collect();

        match self.format {
            OutputFormat::Json => print_json(&LosReport {
                map: map.id(),
                from: self.from,
                to: self.to,
                visible,
                line,
                blockers,
            })?,
            OutputFormat::Summary => {
                print_header(map);
                if visible {
                    println!(
                        "{} {} sees {}",
                        style("Visible:").bold().green(),
                        self.from,
                        self.to
                    );
                } else {
                    let listed: Vec<String> = blockers.iter().map(ToString::to_string).collect();
                    println!(
                        "{} blocked at {}",
                        style("Hidden:").bold().red(),
                        listed.join(", ")
                    );
                }
                println!();

                let mut marks: BTreeMap<Position, char> =
                    line.iter().map(|position| (*position, '*')).collect();
                for blocker in &blockers {
                    marks.insert(*blocker, 'X');
                }
                marks.insert(self.from, 'S');
                marks.insert(self.to, 'T');
                print!("{}", draw(map, &marks));
            }
        }

        Ok(())
    }
}
