use std::fmt;

/// Identifier of an entity standing on the grid.
///
/// Cells only ever hold this identifier. The entity itself is owned by the
/// character module and resolved through it when needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of a loaded map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapId(pub u32);

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map:{}", self.0)
    }
}

/// Discrete grid position expressed in cell coordinates.
///
/// `y` grows downwards: "up" is `y - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by the given delta.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Sum of the absolute axis deltas, saturating at `u32::MAX`.
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }

    /// Largest absolute axis delta: the number of 8-directional steps between
    /// two positions on an open grid.
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Straight-line distance between cell coordinates.
    pub fn euclidean_distance(self, other: Position) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// True when `other` is one of the 8 surrounding positions.
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.chebyshev_distance(other) == 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_between_positions() {
        let a = Position::new(1, 2);
        let b = Position::new(4, -2);

        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(a.chebyshev_distance(b), 4);
        assert!((a.euclidean_distance(b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distances_across_the_full_coordinate_range() {
        let low = Position::new(i32::MIN, i32::MIN);
        let high = Position::new(i32::MAX, i32::MAX);

        assert_eq!(low.chebyshev_distance(high), u32::MAX);
        assert_eq!(low.manhattan_distance(high), u32::MAX);
        assert_eq!(
            Position::new(i32::MIN, 0).chebyshev_distance(Position::new(i32::MAX, 0)),
            u32::MAX
        );
        assert_eq!(
            Position::new(i32::MIN, 0).manhattan_distance(Position::new(i32::MAX, 0)),
            u32::MAX
        );
        assert_eq!(high.manhattan_distance(low), low.manhattan_distance(high));
        assert!(low.euclidean_distance(high).is_finite());
        assert!(!low.is_adjacent(high));
    }

    #[test]
    fn adjacency_includes_diagonals_but_not_self() {
        let center = Position::new(3, 3);

        assert!(center.is_adjacent(Position::new(4, 4)));
        assert!(center.is_adjacent(Position::new(3, 2)));
        assert!(!center.is_adjacent(center));
        assert!(!center.is_adjacent(Position::new(5, 3)));
    }
}
