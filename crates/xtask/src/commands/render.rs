//! Draw a map as terrain glyphs
//!
//! Occupants are drawn as `@`. Overlays (paths, reachable areas, sight lines)
//! replace the glyph of the cells they mark.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Parser;
use console::{Style, style};

use tactics_core::{GridMap, Position, TerrainKind};

use crate::utils::{MapArgs, parse_position};

/// Draw a map, optionally with a path overlay
#[derive(Parser)]
pub struct Render {
    #[command(flatten)]
    target: MapArgs,

    /// Overlay the cheapest path starting here (requires --to)
    #[arg(long, value_name = "X,Y", value_parser = parse_position, requires = "to")]
    from: Option<Position>,

    /// Goal of the overlaid path
    #[arg(long, value_name = "X,Y", value_parser = parse_position, requires = "from")]
    to: Option<Position>,

    /// Print glyphs without colour
    #[arg(long)]
    plain: bool,
}

impl Render {
    pub fn execute(self) -> Result<()> {
        let loaded = self.target.load()?;
        let map = &loaded.map;

        let mut marks = BTreeMap::new();
        if let (Some(from), Some(to)) = (self.from, self.to) {
            let path = tactics_core::Pathfinder::new(map, loaded.rules).find_path(from, to, false);
            if path.is_empty() {
                println!("{} {} -> {}", style("No path:").bold().red(), from, to);
            }
            marks = path_marks(path.positions());
        }

        print_header(map);
        if self.plain {
            for row in layout(map, &marks) {
                println!("{}", row);
            }
        } else {
            print!("{}", draw(map, &marks));
        }
        Ok(())
    }
}

pub(crate) fn print_header(map: &GridMap) {
    println!(
        "{} {} ({})",
        style("Map:").bold().cyan(),
        map.name(),
        map.id()
    );
    println!(
        "{} {}x{}",
        style("Size:").bold().cyan(),
        map.width(),
        map.height()
    );
    println!(
        "{} {}",
        style("Terrain digest:").bold().cyan(),
        short_digest(map)
    );
    println!();
}

fn short_digest(map: &GridMap) -> String {
    hex::encode(&map.terrain_digest()[..8])
}

/// `S` at the start, `G` at the goal, `*` in between.
pub(crate) fn path_marks(path: &[Position]) -> BTreeMap<Position, char> {
    let last = path.len().saturating_sub(1);
    path.iter()
        .enumerate()
        .map(|(i, position)| {
            let mark = match i {
                0 => 'S',
                i if i == last => 'G',
                _ => '*',
            };
            (*position, mark)
        })
        .collect()
}

/// Plain glyph rows, top row first.
pub(crate) fn layout(map: &GridMap, marks: &BTreeMap<Position, char>) -> Vec<String> {
    let mut rows = vec![String::new(); map.height() as usize];
    for (position, cell) in map.cells() {
        rows[position.y as usize].push(glyph_at(position, cell.terrain(), cell.is_occupied(), marks));
    }
    rows
}

/// Coloured rendering of [`layout`], one line per row.
pub(crate) fn draw(map: &GridMap, marks: &BTreeMap<Position, char>) -> String {
    let mut out = String::new();
    for (position, cell) in map.cells() {
        let glyph = glyph_at(position, cell.terrain(), cell.is_occupied(), marks);
        let styled = if marks.contains_key(&position) {
            Style::new().bold().yellow().apply_to(glyph)
        } else if cell.is_occupied() {
            Style::new().bold().white().apply_to(glyph)
        } else {
            terrain_style(cell.terrain()).apply_to(glyph)
        };
        out.push_str(&styled.to_string());
        if position.x as u32 + 1 == map.width() {
            out.push('\n');
        }
    }
    out
}

fn glyph_at(
    position: Position,
    terrain: TerrainKind,
    occupied: bool,
    marks: &BTreeMap<Position, char>,
) -> char {
    match marks.get(&position) {
        Some(mark) => *mark,
        None if occupied => '@',
        None => terrain.glyph(),
    }
}

fn terrain_style(terrain: TerrainKind) -> Style {
    use TerrainKind::*;
    match terrain {
        Plain | Road | Bridge => Style::new().dim(),
        Grass | Forest => Style::new().green(),
        Mountain | Cliff => Style::new().white(),
        Water | Ice => Style::new().blue(),
        Desert => Style::new().yellow(),
        Swamp => Style::new().magenta(),
        Wall => Style::new().bold(),
        Lava => Style::new().red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{EntityId, MapId};

    #[test]
    fn layout_overlays_marks_and_occupants() {
        let mut map = GridMap::from_glyph_rows(MapId(1), "r", &["..#", "~T."]).unwrap();
        map.place_occupant(Position::new(2, 1), EntityId(1)).unwrap();

        let marks = path_marks(&[Position::new(0, 0), Position::new(1, 0), Position::new(0, 1)]);
        // Water can be marked; marks are presentation only
        assert_eq!(layout(&map, &marks), vec!["S*#", "GT@"]);
        assert_eq!(layout(&map, &BTreeMap::new()), vec!["..#", "~T@"]);
    }

    #[test]
    fn single_position_path_is_start() {
        let marks = path_marks(&[Position::new(4, 4)]);
        assert_eq!(marks.get(&Position::new(4, 4)), Some(&'S'));
    }
}
