use arrayvec::ArrayVec;

use crate::config::MovementRules;
use crate::state::{GridMap, Position};

/// One grid step. `Up` is `y - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    UpRight,
    DownRight,
    DownLeft,
    UpLeft,
}

impl Direction {
    /// Expansion order. Orthogonal steps come first, so among equal-cost
    /// routes the searches prefer straight moves.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpLeft,
    ];

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::UpRight => (1, -1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }

    pub const fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }

    /// Directions expanded under `rules`, in expansion order.
    pub fn allowed(rules: MovementRules) -> &'static [Direction] {
        if rules.allows_diagonals() {
            &Self::ALL
        } else {
            &Self::ORTHOGONAL
        }
    }
}

/// In-bounds neighbours of `position`, in expansion order. Terrain and
/// occupancy are not checked.
pub(super) fn neighbors(
    map: &GridMap,
    rules: MovementRules,
    position: Position,
) -> ArrayVec<Position, 8> {
    Direction::allowed(rules)
        .iter()
        .map(|direction| {
            let (dx, dy) = direction.delta();
            position.offset(dx, dy)
        })
        .filter(|next| map.contains(*next))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TerrainKind;
    use crate::state::{MapDimensions, MapId};

    fn map() -> GridMap {
        GridMap::new(MapId(1), "n", MapDimensions::new(3, 3), TerrainKind::Plain).unwrap()
    }

    #[test]
    fn center_neighbours_follow_fixed_order() {
        let found = neighbors(&map(), MovementRules::DEFAULT, Position::new(1, 1));

        assert_eq!(
            found.as_slice(),
            &[
                Position::new(1, 0),
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(0, 1),
                Position::new(2, 0),
                Position::new(2, 2),
                Position::new(0, 2),
                Position::new(0, 0),
            ]
        );
    }

    #[test]
    fn corner_neighbours_are_clipped() {
        let map = map();

        let diagonal = neighbors(&map, MovementRules::DEFAULT, Position::ORIGIN);
        assert_eq!(
            diagonal.as_slice(),
            &[Position::new(1, 0), Position::new(0, 1), Position::new(1, 1)]
        );

        let orthogonal = neighbors(&map, MovementRules::ORTHOGONAL, Position::ORIGIN);
        assert_eq!(
            orthogonal.as_slice(),
            &[Position::new(1, 0), Position::new(0, 1)]
        );
    }

    #[test]
    fn diagonal_classification() {
        let diagonals = Direction::ALL.iter().filter(|d| d.is_diagonal()).count();
        assert_eq!(diagonals, 4);
        assert!(Direction::ORTHOGONAL.iter().all(|d| !d.is_diagonal()));
        assert_eq!(Direction::UpLeft.to_string(), "up-left");
    }
}
